/* Copyright 2020 @Yuchen Wong */

// The table is integrated in double precision; precision is only dropped
// when a texel is serialized.
pub type Float = f64;
pub type UInt = u32;

pub type Vector2f = nalgebra::Vector2<Float>;
pub type Vector3f = nalgebra::Vector3<Float>;

pub const PI: Float = std::f64::consts::PI;

/// Clamp `v` to `[0, 1]`.
pub fn saturate(v: Float) -> Float {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}
