// Copyright @yucwang 2026

use crate::core::error::Result;
use crate::math::bitmap::Bitmap;

use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// 8-bit RGB PNG with the same channel quantization as the PPM writer.
pub fn write_png_to_file<P: AsRef<Path>>(bitmap: &Bitmap, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    log::info!("Writing PNG image: {}.", file_path.display());

    let image = RgbImage::from_fn(bitmap.width() as u32, bitmap.height() as u32, |x, y| {
        Rgb(bitmap[(x as usize, y as usize)].to_rgb8())
    });
    image.save_with_format(file_path, ImageFormat::Png)?;
    Ok(())
}
