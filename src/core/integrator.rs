// Copyright @yucwang 2026

use crate::core::error::Result;
use crate::core::texel::DfgTexel;
use crate::math::constants::Float;

pub trait Integrator: Sync {
    fn integrate_texel(&self, nov: Float, a: Float) -> Result<DfgTexel>;
    fn samples_per_texel(&self) -> u32;
}
