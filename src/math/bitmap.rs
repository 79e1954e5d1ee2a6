// Copyright 2020 @TwoCookingMice

use crate::core::texel::DfgTexel;

use std::ops;
use std::vec::Vec;

/// Row-major grid of DFG texels, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    data: Vec<DfgTexel>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = DfgTexel;

    fn index(&self, index: (usize, usize)) -> &DfgTexel {
        assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut DfgTexel {
        assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(DfgTexel::default(); pixel_number),
               width: width,
               height: height }
    }

    pub fn from_texels(width: usize, height: usize, data: Vec<DfgTexel>) -> Option<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return None;
        }
        Some(Self { data, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [DfgTexel] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    /// Texels in row-major order.
    pub fn texels(&self) -> &[DfgTexel] {
        &self.data
    }
}

/* Test for Bitmap */
#[cfg(test)]
mod tests {
    use super::Bitmap;
    use crate::core::texel::DfgTexel;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(256usize, 128usize);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 128);

        bitmap[(5, 6)] = DfgTexel::new(1.0, 0.5);
        assert_eq!(bitmap[(5, 6)].dfg1, 1.0);
        assert_eq!(bitmap[(2, 6)].dfg1, 0.0);
        bitmap.row_mut(7)[1] = DfgTexel::new(0.25, 0.75);
        assert_eq!(bitmap[(1, 7)], DfgTexel::new(0.25, 0.75));
        assert_eq!(bitmap.texels()[6 * 256 + 5].dfg2, 0.5);
    }

    #[test]
    fn test_from_texels_checks_length() {
        assert!(Bitmap::from_texels(2, 2, vec![DfgTexel::default(); 3]).is_none());
        assert!(Bitmap::from_texels(2, 2, vec![DfgTexel::default(); 4]).is_some());
        let side = 1usize << (usize::BITS / 2);
        assert!(Bitmap::from_texels(side, side, Vec::new()).is_none());
    }

    #[test]
    #[should_panic]
    fn test_bitmap_rejects_column_overflow() {
        let bitmap = Bitmap::new(4, 4);
        let _ = bitmap[(4, 0)];
    }
}
