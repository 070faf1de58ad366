//! Sprite assets and the render mode chosen at startup
//!
//! Either every sprite loads and objects are drawn as images, or the game
//! falls back to coloured circles for the whole session. There is no
//! per-frame retry.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::error::AssetError;
use crate::sim::{FRUIT_VARIANTS, ObjectKind};

/// Fruit sprite files, indexed by `Appearance::sprite`
pub const FRUIT_SPRITES: [&str; FRUIT_VARIANTS as usize] =
    ["apple.jpg", "banana.jpg", "cherry.jpg"];
pub const BOMB_SPRITE: &str = "bomb.jpeg";

/// Which image to draw for an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Fruit(u8),
    Bomb,
}

impl SpriteId {
    pub fn for_object(kind: ObjectKind, variant: u8) -> Self {
        match kind {
            ObjectKind::Fruit => SpriteId::Fruit(variant % FRUIT_VARIANTS),
            ObjectKind::Bomb => SpriteId::Bomb,
        }
    }
}

/// All object sprites, pre-scaled to the object size
#[derive(Debug, Clone)]
pub struct SpriteSet {
    fruits: Vec<RgbaImage>,
    bomb: RgbaImage,
}

impl SpriteSet {
    pub fn load(dir: &Path, size: u32) -> Result<Self, AssetError> {
        let fruits = FRUIT_SPRITES
            .iter()
            .map(|name| load_sprite(&dir.join(name), size))
            .collect::<Result<Vec<_>, _>>()?;
        let bomb = load_sprite(&dir.join(BOMB_SPRITE), size)?;
        Ok(Self { fruits, bomb })
    }

    pub fn get(&self, id: SpriteId) -> &RgbaImage {
        match id {
            SpriteId::Fruit(i) => &self.fruits[usize::from(i) % self.fruits.len()],
            SpriteId::Bomb => &self.bomb,
        }
    }
}

fn load_sprite(path: &Path, size: u32) -> Result<RgbaImage, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(imageops::resize(&image.to_rgba8(), size, size, FilterType::Triangle))
}

/// How objects are drawn for the whole session
#[derive(Debug, Clone)]
pub enum RenderMode {
    AssetBacked(SpriteSet),
    PrimitiveShape,
}

impl RenderMode {
    /// Try the sprites once; any failure selects primitive shapes
    pub fn resolve(dir: &Path, size: u32) -> Self {
        match SpriteSet::load(dir, size) {
            Ok(sprites) => {
                log::info!("Loaded sprites from {}", dir.display());
                RenderMode::AssetBacked(sprites)
            }
            Err(e) => {
                log::warn!("{e}; using colored circles instead");
                RenderMode::PrimitiveShape
            }
        }
    }

    pub fn is_asset_backed(&self) -> bool {
        matches!(self, RenderMode::AssetBacked(_))
    }
}
