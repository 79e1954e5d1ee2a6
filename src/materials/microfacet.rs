// Copyright @yucwang 2026

use crate::math::constants::Float;

/// Height-correlated Smith-GGX visibility term,
/// `V = G / (4 * nov * nol)`, for linear roughness `a`.
///
/// Heitz 2014, "Understanding the Masking-Shadowing Function in
/// Microfacet-Based BRDFs". Both cosines must not be zero at the same time.
pub fn visibility(nov: Float, nol: Float, a: Float) -> Float {
    let a2 = a * a;
    let ggx_l = nov * ((nol - nol * a2) * nol + a2).sqrt();
    let ggx_v = nol * ((nov - nov * a2) * nov + a2).sqrt();
    0.5 / (ggx_v + ggx_l)
}

/// Schlick's Fresnel weight `(1 - voh)^5`.
pub fn fresnel_schlick_weight(voh: Float) -> Float {
    (1.0 - voh).powi(5)
}
