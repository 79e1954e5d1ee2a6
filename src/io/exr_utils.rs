/* Copyright 2020 @TwoCookingMice */

use crate::core::error::{DfgError, Result};
use crate::math::bitmap::Bitmap;

use exr::prelude::*;
use std::path::Path;

// Write the table as a 32-bit float RGB OpenEXR image, unclamped.
pub fn write_exr_to_file<P: AsRef<Path>>(bitmap: &Bitmap, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    log::info!("Starting writing openexr images: {}.", file_path.display());

    write_rgb_file(file_path, bitmap.width(), bitmap.height(), |x, y| {
        let texel = bitmap[(x, y)];
        (texel.dfg1 as f32, texel.dfg2 as f32, 0.0f32)
    })
    .map_err(|e| DfgError::Exr(e.to_string()))
}
