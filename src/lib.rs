// Copyright @yucwang 2021

pub extern crate nalgebra as na;

pub mod core;
pub mod math;
pub mod io;
pub mod integrators;
pub mod materials;
pub mod renderers;

pub use crate::core::error::{DfgError, Result};
pub use crate::core::texel::DfgTexel;
pub use crate::integrators::dfg::{integrate_dfg, DfgIntegrator, DEFAULT_SAMPLE_COUNT};
pub use crate::renderers::table::{TableRenderer, DEFAULT_RESOLUTION};

/// Route `log` output through env_logger, `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
