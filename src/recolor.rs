//! Batch sprite recoloring.
//!
//! Replaces the RGB channels of every visible pixel (alpha > 0) with a single
//! target color while keeping each pixel's alpha. Fully transparent pixels
//! are left untouched. Files are rewritten in place with no backup.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::info;

use crate::assets::sprite_path;

/// Parse `RRGGBB` (optionally prefixed with `#`) into RGB bytes.
pub fn parse_hex_color(hex: &str) -> Result<[u8; 3], String> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color '{}', expected RRGGBB", hex));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| format!("Invalid hex color '{}': {}", hex, e))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Recolor `img` in memory. Returns how many pixels were rewritten.
pub fn recolor_image(img: &mut RgbaImage, rgb: [u8; 3]) -> usize {
    let mut changed = 0;
    for pixel in img.pixels_mut() {
        if pixel[3] > 0 {
            pixel[0] = rgb[0];
            pixel[1] = rgb[1];
            pixel[2] = rgb[2];
            changed += 1;
        }
    }
    changed
}

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecolorReport {
    /// Files rewritten.
    pub processed: Vec<PathBuf>,
    /// Indices in the range with no file on disk.
    pub skipped: Vec<PathBuf>,
}

/// Recolor `sprite.<start>.png` ..= `sprite.<end>.png` in `dir`.
///
/// Missing files are skipped. The first file that fails to decode or save
/// stops the run; files already processed stay rewritten.
pub fn recolor_sprites(
    dir: &Path,
    start: u32,
    end: u32,
    rgb: [u8; 3],
) -> Result<RecolorReport, String> {
    if start > end {
        return Err(format!("Empty sprite range {}..={}", start, end));
    }
    let mut report = RecolorReport::default();
    for sprite_id in start..=end {
        let path = sprite_path(dir, sprite_id);
        if !path.is_file() {
            info!("Skipping: {} not found.", path.display());
            report.skipped.push(path);
            continue;
        }
        let mut img = image::open(&path)
            .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?
            .to_rgba8();
        let changed = recolor_image(&mut img, rgb);
        img.save(&path)
            .map_err(|e| format!("Failed to save {}: {}", path.display(), e))?;
        info!("Processed: {} ({} pixels)", path.display(), changed);
        report.processed.push(path);
    }
    Ok(report)
}
