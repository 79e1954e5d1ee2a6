// Copyright @yucwang 2021

pub mod error;
pub mod integrator;
pub mod texel;
