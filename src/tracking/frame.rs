//! Camera frames

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::error::CameraError;
use crate::sim::{CameraSpace, Rect};

/// One RGB camera frame with positive dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    pub fn new(image: RgbImage) -> Result<Self, CameraError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CameraError::EmptyFrame { width, height });
        }
        Ok(Self { image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Flip left-right so a front-facing camera behaves like a mirror
    pub fn mirrored(mut self) -> Self {
        imageops::flip_horizontal_in_place(&mut self.image);
        self
    }

    /// Scaled copy for the picture-in-picture feed
    pub fn thumbnail(&self, width: u32, height: u32) -> RgbImage {
        imageops::resize(&self.image, width, height, FilterType::Triangle)
    }

    /// Draw a rectangle outline, clipped to the frame
    pub fn draw_outline(&mut self, rect: &Rect<CameraSpace>, color: Rgb<u8>, thickness: u32) {
        let (w, h) = self.dimensions();
        let clamp_x = |v: f32| (v.max(0.0) as u32).min(w);
        let clamp_y = |v: f32| (v.max(0.0) as u32).min(h);

        let x0 = clamp_x(rect.x);
        let x1 = clamp_x(rect.right());
        let y0 = clamp_y(rect.y);
        let y1 = clamp_y(rect.bottom());
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let on_edge = x < x0 + thickness
                    || x + thickness >= x1
                    || y < y0 + thickness
                    || y + thickness >= y1;
                if on_edge {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_rejected() {
        let err = Frame::new(RgbImage::new(0, 10)).unwrap_err();
        assert!(matches!(err, CameraError::EmptyFrame { width: 0, height: 10 }));
    }

    #[test]
    fn test_mirror_flips_columns() {
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(0, 1, Rgb([255, 0, 0]));
        let frame = Frame::new(img).unwrap().mirrored();
        assert_eq!(*frame.image().get_pixel(3, 1), Rgb([255, 0, 0]));
        assert_eq!(*frame.image().get_pixel(0, 1), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_outline_only_touches_edges() {
        let mut frame = Frame::new(RgbImage::new(20, 20)).unwrap();
        let green = Rgb([0, 255, 0]);
        frame.draw_outline(&Rect::new(5.0, 5.0, 10.0, 10.0), green, 2);
        assert_eq!(*frame.image().get_pixel(5, 5), green);
        assert_eq!(*frame.image().get_pixel(14, 14), green);
        assert_eq!(*frame.image().get_pixel(6, 10), green);
        assert_eq!(*frame.image().get_pixel(10, 10), Rgb([0, 0, 0]));
        assert_eq!(*frame.image().get_pixel(15, 15), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_outline_clipped_to_frame() {
        let mut frame = Frame::new(RgbImage::new(10, 10)).unwrap();
        frame.draw_outline(&Rect::new(-5.0, -5.0, 100.0, 100.0), Rgb([1, 2, 3]), 1);
        assert_eq!(*frame.image().get_pixel(0, 0), Rgb([1, 2, 3]));
        assert_eq!(*frame.image().get_pixel(9, 9), Rgb([1, 2, 3]));
    }

    #[test]
    fn test_thumbnail_size() {
        let frame = Frame::new(RgbImage::new(640, 480)).unwrap();
        assert_eq!(frame.thumbnail(320, 240).dimensions(), (320, 240));
    }
}
