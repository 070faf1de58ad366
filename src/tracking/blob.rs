//! Colour-blob hand tracker
//!
//! Finds connected regions of a target colour (a coloured glove) on a coarse
//! grid and reports one box per region. Cheap enough to run every tick and
//! needs no model files.

use std::collections::VecDeque;

use image::Rgb;
use serde::{Deserialize, Serialize};

use super::frame::Frame;
use super::tracker::{Detection, HandTracker};
use crate::sim::{CameraSpace, Rect};

/// Colour-blob tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobTrackerConfig {
    /// Glove colour
    pub target: [u8; 3],
    /// Per-channel distance still counted as the glove
    pub tolerance: u8,
    /// Grid cell size in pixels; one sample per cell
    pub cell: u32,
    /// Regions smaller than this many cells are noise
    pub min_cells: usize,
    /// Annotation colour
    pub outline: [u8; 3],
    pub outline_thickness: u32,
}

impl Default for BlobTrackerConfig {
    fn default() -> Self {
        Self {
            target: [255, 0, 255],
            tolerance: 60,
            cell: 4,
            min_cells: 4,
            outline: [0, 255, 0],
            outline_thickness: 2,
        }
    }
}

/// Tracks hands by glove colour
#[derive(Debug, Clone, Default)]
pub struct ColorBlobTracker {
    config: BlobTrackerConfig,
}

/// Grid extent of one connected region
struct Region {
    min: (u32, u32),
    max: (u32, u32),
    cells: usize,
}

impl ColorBlobTracker {
    pub fn new(config: BlobTrackerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BlobTrackerConfig {
        &self.config
    }

    fn matches(&self, pixel: &Rgb<u8>) -> bool {
        pixel
            .0
            .iter()
            .zip(self.config.target)
            .all(|(&p, t)| p.abs_diff(t) <= self.config.tolerance)
    }

    /// Glove mask sampled at each cell center, row-major
    fn mask(&self, frame: &Frame, cols: u32, rows: u32) -> Vec<bool> {
        let cell = self.config.cell.max(1);
        let (w, h) = frame.dimensions();
        let image = frame.image();
        let mut mask = Vec::with_capacity((cols * rows) as usize);
        for gy in 0..rows {
            let y = (gy * cell + cell / 2).min(h - 1);
            for gx in 0..cols {
                let x = (gx * cell + cell / 2).min(w - 1);
                mask.push(self.matches(image.get_pixel(x, y)));
            }
        }
        mask
    }

    /// 4-connected regions of the mask
    fn regions(mask: &[bool], cols: u32, rows: u32) -> Vec<Region> {
        let idx = |x: u32, y: u32| (y * cols + x) as usize;
        let mut seen = vec![false; mask.len()];
        let mut regions = Vec::new();
        let mut queue = VecDeque::new();

        for y in 0..rows {
            for x in 0..cols {
                if !mask[idx(x, y)] || seen[idx(x, y)] {
                    continue;
                }
                seen[idx(x, y)] = true;
                queue.push_back((x, y));
                let mut region = Region {
                    min: (x, y),
                    max: (x, y),
                    cells: 0,
                };

                while let Some((cx, cy)) = queue.pop_front() {
                    region.cells += 1;
                    region.min = (region.min.0.min(cx), region.min.1.min(cy));
                    region.max = (region.max.0.max(cx), region.max.1.max(cy));

                    let mut visit = |nx: u32, ny: u32| {
                        let i = idx(nx, ny);
                        if mask[i] && !seen[i] {
                            seen[i] = true;
                            queue.push_back((nx, ny));
                        }
                    };
                    if cx > 0 {
                        visit(cx - 1, cy);
                    }
                    if cx + 1 < cols {
                        visit(cx + 1, cy);
                    }
                    if cy > 0 {
                        visit(cx, cy - 1);
                    }
                    if cy + 1 < rows {
                        visit(cx, cy + 1);
                    }
                }
                regions.push(region);
            }
        }
        regions
    }
}

impl HandTracker for ColorBlobTracker {
    fn locate_hands(&mut self, frame: Frame) -> Detection {
        let cell = self.config.cell.max(1);
        let (w, h) = frame.dimensions();
        let cols = w.div_ceil(cell);
        let rows = h.div_ceil(cell);

        let mask = self.mask(&frame, cols, rows);
        let hands: Vec<Rect<CameraSpace>> = Self::regions(&mask, cols, rows)
            .into_iter()
            .filter(|r| r.cells >= self.config.min_cells)
            .map(|r| {
                let x0 = r.min.0 * cell;
                let y0 = r.min.1 * cell;
                let x1 = ((r.max.0 + 1) * cell).min(w);
                let y1 = ((r.max.1 + 1) * cell).min(h);
                Rect::new(x0 as f32, y0 as f32, (x1 - x0) as f32, (y1 - y0) as f32)
            })
            .collect();

        let mut annotated = frame;
        let outline = Rgb(self.config.outline);
        for hand in &hands {
            annotated.draw_outline(hand, outline, self.config.outline_thickness);
        }

        Detection { annotated, hands }
    }
}
