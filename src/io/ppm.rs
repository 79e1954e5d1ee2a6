// Copyright @yucwang 2026

use crate::core::error::Result;
use crate::math::bitmap::Bitmap;

use std::io::Write;

/// Binary PPM (P6): R = dfg1, G = dfg2, B = 0, 8 bits per channel.
pub fn write_ppm<W: Write>(writer: &mut W, bitmap: &Bitmap) -> Result<()> {
    write!(writer, "P6\n{} {}\n255\n", bitmap.width(), bitmap.height())?;
    for texel in bitmap.texels() {
        writer.write_all(&texel.to_rgb8())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_ppm;
    use crate::core::texel::DfgTexel;
    use crate::math::bitmap::Bitmap;

    #[test]
    fn test_write_ppm() {
        let mut bitmap = Bitmap::new(2, 2);
        bitmap[(0, 0)] = DfgTexel::new(1.2, 0.5);
        bitmap[(1, 1)] = DfgTexel::new(-0.1, 0.999);

        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &bitmap).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        let body = &bytes[header.len()..];
        assert_eq!(body.len(), 12);
        assert_eq!(&body[0..3], &[255, 127, 0]);
        assert_eq!(&body[3..9], &[0, 0, 0, 0, 0, 0]);
        assert_eq!(&body[9..12], &[0, 254, 0]);
    }
}
