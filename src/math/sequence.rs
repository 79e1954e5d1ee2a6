// Copyright @yucwang 2026

use super::constants::{Float, UInt, Vector2f};

// 1 / 2^32
const INV_U32_RANGE: Float = 0.5 / 2147483648.0;

/// Reverse the bits of a 32-bit word with the five-step swap network.
pub fn reverse_bits(bits: UInt) -> UInt {
    let mut bits = bits;
    bits = (bits << 16) | (bits >> 16);
    bits = ((bits & 0x5555_5555) << 1) | ((bits & 0xAAAA_AAAA) >> 1);
    bits = ((bits & 0x3333_3333) << 2) | ((bits & 0xCCCC_CCCC) >> 2);
    bits = ((bits & 0x0F0F_0F0F) << 4) | ((bits & 0xF0F0_F0F0) >> 4);
    bits = ((bits & 0x00FF_00FF) << 8) | ((bits & 0xFF00_FF00) >> 8);
    bits
}

/// Van der Corput radical inverse in base 2, in `[0, 1)`.
pub fn radical_inverse(i: UInt) -> Float {
    reverse_bits(i) as Float * INV_U32_RANGE
}

/// The `i`-th point of an `n`-point Hammersley set.
pub fn hammersley(i: UInt, n: UInt) -> Vector2f {
    Vector2f::new(i as Float / n as Float, radical_inverse(i))
}
