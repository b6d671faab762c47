//! Texture decoding, pixel buffer conversion and PNG export
//!
//! Overlays are drawn on `(rows, cols, channels)` arrays. `RgbImage` stores its
//! pixels row-major with interleaved channels, which is exactly that layout, so the
//! conversions below move the raw buffer without copying pixel by pixel.

use crate::io::error::{Result, Skin3dError, file_system};
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

/// Decode an image file and convert it to 8-bit RGB
///
/// # Errors
///
/// Returns [`Skin3dError::ImageLoad`] if the file is missing or cannot be decoded.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| Skin3dError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Move an RGB image into a `(height, width, 3)` array
///
/// # Errors
///
/// Returns an error if the image buffer does not match its reported dimensions.
pub fn rgb_to_array(img: RgbImage) -> Result<Array3<u8>> {
    let (width, height) = img.dimensions();
    Array3::from_shape_vec((height as usize, width as usize, 3), img.into_raw()).map_err(|e| {
        Skin3dError::InvalidBuffer {
            reason: e.to_string(),
        }
    })
}

/// Copy a `(height, width, 3)` array into an RGB image
///
/// # Errors
///
/// Returns an error if the array does not have exactly three channels.
pub fn array_to_rgb(pixels: &Array3<u8>) -> Result<RgbImage> {
    let (height, width, channels) = pixels.dim();
    if channels != 3 {
        return Err(Skin3dError::InvalidBuffer {
            reason: format!("expected 3 channels, found {channels}"),
        });
    }

    let raw: Vec<u8> = pixels.iter().copied().collect();
    RgbImage::from_raw(width as u32, height as u32, raw).ok_or_else(|| {
        Skin3dError::InvalidBuffer {
            reason: format!("buffer does not fit {width}x{height} RGB image"),
        }
    })
}

/// Write an RGB image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_rgb_png(img: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|e| Skin3dError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
