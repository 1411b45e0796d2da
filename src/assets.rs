//! Sprite asset provider.
//!
//! Sprites live in a flat directory as `sprite.<n>.png`. [`AssetSource`]
//! decides, once per sprite, whether the file is there or a placeholder must
//! stand in for it. A missing file is never fatal: the placeholder is a
//! 16×16 magenta square scaled like any other sprite, and a warning is
//! logged. A file that exists but does not decode is reported as an error.
//!
//! All scaling is nearest-neighbor so pixel art stays crisp.

use std::path::{Path, PathBuf};

use log::{info, warn};
use raylib::prelude::{Color, Image};

/// Side of the placeholder image before scaling.
pub const PLACEHOLDER_SIZE: i32 = 16;
/// Fill color of the placeholder image.
pub const PLACEHOLDER_COLOR: Color = Color {
    r: 255,
    g: 0,
    b: 255,
    a: 255,
};

/// Path of sprite `sprite_id` inside `dir`.
pub fn sprite_path(dir: &Path, sprite_id: u32) -> PathBuf {
    dir.join(format!("sprite.{}.png", sprite_id))
}

/// Where the pixels of a sprite come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// The sprite file exists on disk.
    FileBacked(PathBuf),
    /// The sprite file is missing; a solid placeholder is generated.
    Placeholder,
}

impl AssetSource {
    /// Select the source for `sprite_id`, warning when the file is missing.
    pub fn resolve(dir: &Path, sprite_id: u32) -> Self {
        let path = sprite_path(dir, sprite_id);
        if path.is_file() {
            AssetSource::FileBacked(path)
        } else {
            warn!("Sprite not found: {} - using placeholder", path.display());
            AssetSource::Placeholder
        }
    }

    /// Produce the CPU image scaled by `scale` (nearest-neighbor, floored at 1).
    pub fn load_image(&self, scale: u32) -> Result<Image, String> {
        let scale = scale.max(1) as i32;
        let mut image = match self {
            AssetSource::FileBacked(path) => {
                let path_str = path
                    .to_str()
                    .ok_or_else(|| format!("Non UTF-8 sprite path: {}", path.display()))?;
                Image::load_image(path_str)
                    .map_err(|e| format!("Failed to load sprite {}: {}", path.display(), e))?
            }
            AssetSource::Placeholder => {
                Image::gen_image_color(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_COLOR)
            }
        };
        if scale != 1 {
            let (w, h) = (image.width, image.height);
            image.resize_nn(w * scale, h * scale);
        }
        Ok(image)
    }
}

/// Resolve and load sprite `sprite_id` from `dir`, scaled by `scale`.
pub fn load_sprite(dir: &Path, sprite_id: u32, scale: u32) -> Result<Image, String> {
    let source = AssetSource::resolve(dir, sprite_id);
    let image = source.load_image(scale)?;
    if let AssetSource::FileBacked(path) = &source {
        info!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
    }
    Ok(image)
}
