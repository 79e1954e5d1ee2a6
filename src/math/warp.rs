// Copyright @yucwang 2023

use super::constants::{Float, Vector2f, Vector3f, PI};

/// Map a unit-square sample to a half vector distributed by the GGX normal
/// distribution with roughness `a`, in the local frame where `z` is the
/// surface normal.
pub fn sample_ggx_half_vector(u: &Vector2f, a: Float) -> Vector3f {
    let phi = 2.0 * PI * u.x;
    // (a + 1)(a - 1) instead of a^2 - 1: less cancellation near a = 1.
    let cos_theta2 = (1.0 - u.y) / (1.0 + (a + 1.0) * ((a - 1.0) * u.y));
    let cos_theta = cos_theta2.sqrt();
    let sin_theta = (1.0 - cos_theta2).max(0.0).sqrt();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vector3f::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Reflect `wi` about `m`.
pub fn reflect(wi: &Vector3f, m: &Vector3f) -> Vector3f {
    2.0 * wi.dot(m) * m - wi
}
