// Copyright @yucwang 2026

pub mod exr_utils;
pub mod png_utils;
pub mod ppm;
pub mod raw;

use crate::core::error::Result;
use crate::math::bitmap::Bitmap;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Two half floats per texel, no header.
    Raw,
    /// Binary PPM, 8 bits per channel.
    Ppm,
    /// 32-bit float OpenEXR.
    Exr,
    /// 8-bit PNG.
    Png,
}

pub fn write_table<P: AsRef<Path>>(bitmap: &Bitmap, format: OutputFormat, path: P) -> Result<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Raw | OutputFormat::Ppm => {
            log::info!("Writing {:?} table: {}.", format, path.display());
            let mut writer = BufWriter::new(File::create(path)?);
            if format == OutputFormat::Raw {
                raw::write_raw(&mut writer, bitmap)?;
            } else {
                ppm::write_ppm(&mut writer, bitmap)?;
            }
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Exr => exr_utils::write_exr_to_file(bitmap, path),
        OutputFormat::Png => png_utils::write_png_to_file(bitmap, path),
    }
}

#[cfg(test)]
mod tests {
    use super::{write_table, OutputFormat};
    use crate::core::texel::DfgTexel;
    use crate::math::bitmap::Bitmap;

    #[test]
    fn test_write_table_ppm_file() {
        let mut bitmap = Bitmap::new(2, 2);
        bitmap[(0, 0)] = DfgTexel::new(1.0, 1.0);
        let path = std::env::temp_dir().join(format!("dfglut_test_{}.ppm", std::process::id()));

        write_table(&bitmap, OutputFormat::Ppm, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
        assert_eq!(bytes.len(), 11 + 12);
        assert_eq!(&bytes[11..14], &[255, 255, 0]);
    }
}
