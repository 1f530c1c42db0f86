//! Header logo decoding.

use std::path::Path;

use genie_core::{GenieError, Result};
use image::imageops::FilterType;

/// Edge length of the square header logo, in pixels.
pub const LOGO_SIZE: u32 = 45;

/// Decoded RGBA pixels, ready to upload as a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    /// Unmultiplied RGBA8, row-major.
    pub rgba: Vec<u8>,
}

/// Loads the image at `path` and scales it to a `size` x `size` square.
pub fn load_logo(path: &Path, size: u32) -> Result<LogoImage> {
    let decoded = image::open(path)
        .map_err(|e| GenieError::image(format!("Failed to open logo {:?}: {}", path, e)))?;
    let resized = decoded.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
    let (width, height) = resized.dimensions();
    tracing::debug!(?path, width, height, "Logo loaded");
    Ok(LogoImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}
