// Copyright @yucwang 2026

use crate::math::constants::Float;

pub type Result<T> = std::result::Result<T, DfgError>;

#[derive(Debug, thiserror::Error)]
pub enum DfgError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Float,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EXR error: {0}")]
    Exr(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("malformed table: {0}")]
    Format(String),
}

impl DfgError {
    pub fn invalid(name: &'static str, value: Float, reason: &'static str) -> Self {
        DfgError::InvalidParameter { name, value, reason }
    }
}

/// Accept finite values in `(0, 1]`.
pub fn check_unit_interval(name: &'static str, value: Float) -> Result<Float> {
    if !value.is_finite() {
        return Err(DfgError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 || value > 1.0 {
        return Err(DfgError::invalid(name, value, "must lie in (0, 1]"));
    }
    Ok(value)
}
