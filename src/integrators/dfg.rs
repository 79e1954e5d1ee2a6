// Copyright @yucwang 2026

use crate::core::error::{check_unit_interval, DfgError, Result};
use crate::core::integrator::Integrator;
use crate::core::texel::DfgTexel;
use crate::materials::microfacet::{fresnel_schlick_weight, visibility};
use crate::math::constants::{saturate, Float, Vector3f};
use crate::math::sequence::hammersley;
use crate::math::warp::{reflect, sample_ggx_half_vector};

pub const DEFAULT_SAMPLE_COUNT: u32 = 1024;

/// Split-sum pre-integration of the specular GGX lobe, importance sampled
/// with a Hammersley set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DfgIntegrator {
    samples_per_texel: u32,
}

impl Default for DfgIntegrator {
    fn default() -> Self {
        Self { samples_per_texel: DEFAULT_SAMPLE_COUNT }
    }
}

impl DfgIntegrator {
    pub fn new(samples_per_texel: u32) -> Result<Self> {
        if samples_per_texel == 0 {
            return Err(DfgError::invalid("sample_count", 0.0, "must be at least 1"));
        }
        Ok(Self { samples_per_texel })
    }

    /// Integrate one texel. `nov` and `a` must both lie in `(0, 1]`.
    pub fn integrate(&self, nov: Float, a: Float) -> Result<DfgTexel> {
        let nov = check_unit_interval("nov", nov)?;
        let a = check_unit_interval("a", a)?;
        Ok(integrate_unchecked(nov, a, self.samples_per_texel))
    }
}

impl Integrator for DfgIntegrator {
    fn integrate_texel(&self, nov: Float, a: Float) -> Result<DfgTexel> {
        self.integrate(nov, a)
    }

    fn samples_per_texel(&self) -> u32 {
        self.samples_per_texel
    }
}

/// Compute `(DFG1, DFG2)` for view cosine `nov` and roughness `a`
/// (squared perceptual roughness) with `sample_count` samples.
pub fn integrate_dfg(nov: Float, a: Float, sample_count: u32) -> Result<DfgTexel> {
    DfgIntegrator::new(sample_count)?.integrate(nov, a)
}

fn integrate_unchecked(nov: Float, a: Float, sample_count: u32) -> DfgTexel {
    // View direction in the x-z plane, z is the normal.
    let v = Vector3f::new((1.0 - nov * nov).sqrt(), 0.0, nov);

    let mut r0: Float = 0.0;
    let mut r1: Float = 0.0;
    for i in 0..sample_count {
        let u = hammersley(i, sample_count);
        let h = sample_ggx_half_vector(&u, a);
        let l = reflect(&v, &h);

        let voh = saturate(v.dot(&h));
        let nol = saturate(l.z);
        let noh = saturate(h.z);

        // Light below the horizon contributes nothing.
        if nol > 0.0 {
            let vis = visibility(nov, nol, a) * nol * (voh / noh);
            let fc = fresnel_schlick_weight(voh);
            r0 += vis * fc;
            r1 += vis;
        }
    }

    let scale = 4.0 / sample_count as Float;
    DfgTexel::new(r0 * scale, r1 * scale)
}
