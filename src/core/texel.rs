// Copyright @yucwang 2026

use crate::math::constants::{saturate, Float};

/// One entry of the DFG table: the Fresnel-weighted term and the
/// directional albedo of the specular lobe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DfgTexel {
    pub dfg1: Float,
    pub dfg2: Float,
}

impl DfgTexel {
    pub fn new(dfg1: Float, dfg2: Float) -> Self {
        Self { dfg1, dfg2 }
    }

    pub fn is_finite(&self) -> bool {
        self.dfg1.is_finite() && self.dfg2.is_finite()
    }

    /// 8-bit RGB encoding: truncated saturated channels, blue fixed at zero.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (saturate(self.dfg1) * 255.0) as u8,
            (saturate(self.dfg2) * 255.0) as u8,
            0,
        ]
    }
}

/// Integration parameters `(nov, a)` at texel `(x, y)` of a table with the
/// given resolution. Columns step through NoV, rows through perceptual
/// roughness, which is squared into `a`.
pub fn texel_parameters(resolution: usize, x: usize, y: usize) -> (Float, Float) {
    let inv_res = 1.0 / resolution as Float;
    let nov = (x as Float + 0.5) * inv_res;
    let perceptual_roughness = (y as Float + 0.5) * inv_res;
    (nov, perceptual_roughness * perceptual_roughness)
}
