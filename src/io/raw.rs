// Copyright @yucwang 2026

use crate::core::error::{DfgError, Result};
use crate::core::texel::DfgTexel;
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;

use half::f16;
use std::io::Write;
use std::path::Path;

pub const BYTES_PER_TEXEL: usize = 4;

/// Two little-endian binary16 values, `dfg1` first.
pub fn encode_texel(texel: &DfgTexel) -> [u8; BYTES_PER_TEXEL] {
    let r = f16::from_f64(texel.dfg1).to_le_bytes();
    let g = f16::from_f64(texel.dfg2).to_le_bytes();
    [r[0], r[1], g[0], g[1]]
}

/// Headerless half-float table, row-major.
pub fn write_raw<W: Write>(writer: &mut W, bitmap: &Bitmap) -> Result<()> {
    for texel in bitmap.texels() {
        writer.write_all(&encode_texel(texel))?;
    }
    Ok(())
}

pub fn read_raw(bytes: &[u8], resolution: usize) -> Result<Bitmap> {
    if resolution == 0 {
        return Err(DfgError::invalid("resolution", 0.0, "must be at least 1"));
    }
    let expected = resolution
        .checked_mul(resolution)
        .and_then(|n| n.checked_mul(BYTES_PER_TEXEL))
        .ok_or_else(|| {
            DfgError::invalid("resolution", resolution as Float, "table size overflows")
        })?;
    if bytes.len() != expected {
        return Err(DfgError::Format(format!(
            "expected {} bytes for a {}x{} table, got {}",
            expected,
            resolution,
            resolution,
            bytes.len()
        )));
    }

    let texels = bytes
        .chunks_exact(BYTES_PER_TEXEL)
        .map(|c| {
            DfgTexel::new(
                f16::from_le_bytes([c[0], c[1]]).to_f64(),
                f16::from_le_bytes([c[2], c[3]]).to_f64(),
            )
        })
        .collect();
    Bitmap::from_texels(resolution, resolution, texels)
        .ok_or_else(|| DfgError::Format(String::from("texel count mismatch")))
}

pub fn read_raw_file<P: AsRef<Path>>(path: P, resolution: usize) -> Result<Bitmap> {
    let path = path.as_ref();
    log::info!("Reading raw DFG table from: {}.", path.display());
    let bytes = std::fs::read(path)?;
    read_raw(&bytes, resolution)
}
