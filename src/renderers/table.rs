// Copyright @yucwang 2021

use crate::core::error::{DfgError, Result};
use crate::core::integrator::Integrator;
use crate::core::texel::{texel_parameters, DfgTexel};
use crate::math::bitmap::Bitmap;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

pub const DEFAULT_RESOLUTION: usize = 64;

/// Fills a square DFG table, one integrator call per texel.
pub struct TableRenderer {
    integrator: Box<dyn Integrator>,
    resolution: usize,
    threads: usize,
    show_progress: bool,
}

impl Renderer for TableRenderer {
    fn render(&self) -> Result<Bitmap> {
        let resolution = self.resolution;
        if resolution == 0 {
            return Err(DfgError::invalid("resolution", 0.0, "must be at least 1"));
        }

        let thread_count = match self.threads {
            0 => thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            n => n,
        }
        .min(resolution);
        log::info!(
            "Rendering {}x{} DFG table, {} samples per texel, {} threads.",
            resolution,
            resolution,
            self.integrator.samples_per_texel(),
            thread_count
        );

        let progress = if self.show_progress {
            ProgressBar::new(resolution as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let integrator_ref: &dyn Integrator = self.integrator.as_ref();
        let next_row = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel::<(usize, Result<Vec<DfgTexel>>)>();
        let mut bitmap = Bitmap::new(resolution, resolution);
        let mut failure: Option<DfgError> = None;

        thread::scope(|scope| {
            for worker in 0..thread_count {
                let next_row = Arc::clone(&next_row);
                let tx = tx.clone();
                scope.spawn(move || {
                    let mut rows_done = 0usize;
                    loop {
                        let y = next_row.fetch_add(1, Ordering::Relaxed);
                        if y >= resolution {
                            break;
                        }
                        let row = render_row(integrator_ref, resolution, y);
                        if tx.send((y, row)).is_err() {
                            break;
                        }
                        rows_done += 1;
                    }
                    log::debug!("worker {} finished {} rows", worker, rows_done);
                });
            }

            drop(tx);
            for (y, row) in rx.iter() {
                match row {
                    Ok(texels) => bitmap.row_mut(y).copy_from_slice(&texels),
                    Err(e) => {
                        // Stop handing out rows, the table is lost anyway.
                        next_row.store(resolution, Ordering::Relaxed);
                        failure.get_or_insert(e);
                    }
                }
                progress.inc(1);
            }
        });
        progress.finish_and_clear();

        if let Some(e) = failure {
            return Err(e);
        }
        log::info!("DFG table done.");
        Ok(bitmap)
    }
}

impl TableRenderer {
    pub fn new(integrator: Box<dyn Integrator>, resolution: usize) -> Self {
        Self {
            integrator,
            resolution,
            threads: 0,
            show_progress: false,
        }
    }

    /// Worker count; 0 picks the available parallelism.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

fn render_row(integrator: &dyn Integrator, resolution: usize, y: usize) -> Result<Vec<DfgTexel>> {
    let mut row = Vec::with_capacity(resolution);
    for x in 0..resolution {
        let (nov, a) = texel_parameters(resolution, x, y);
        let texel = integrator.integrate_texel(nov, a)?;
        if !texel.is_finite() {
            log::warn!("non-finite texel at ({}, {}): nov = {}, a = {}", x, y, nov, a);
        }
        row.push(texel);
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::{Renderer, TableRenderer};
    use crate::core::error::{DfgError, Result};
    use crate::core::integrator::Integrator;
    use crate::core::texel::{texel_parameters, DfgTexel};
    use crate::integrators::dfg::DfgIntegrator;
    use crate::math::constants::Float;

    // Encodes the parameters it was called with.
    struct EchoIntegrator;

    impl Integrator for EchoIntegrator {
        fn integrate_texel(&self, nov: Float, a: Float) -> Result<DfgTexel> {
            Ok(DfgTexel::new(nov, a))
        }

        fn samples_per_texel(&self) -> u32 {
            1
        }
    }

    struct FailingIntegrator;

    impl Integrator for FailingIntegrator {
        fn integrate_texel(&self, nov: Float, _a: Float) -> Result<DfgTexel> {
            Err(DfgError::invalid("nov", nov, "rejected"))
        }

        fn samples_per_texel(&self) -> u32 {
            1
        }
    }

    #[test]
    fn test_texels_are_placed_row_major() {
        let bitmap = TableRenderer::new(Box::new(EchoIntegrator), 5)
            .with_threads(3)
            .render()
            .unwrap();
        assert_eq!(bitmap.width(), 5);
        assert_eq!(bitmap.height(), 5);
        for y in 0..5 {
            for x in 0..5 {
                let (nov, a) = texel_parameters(5, x, y);
                assert_eq!(bitmap[(x, y)], DfgTexel::new(nov, a));
            }
        }
    }

    #[test]
    fn test_thread_count_does_not_change_output() {
        let integrator = DfgIntegrator::new(32).unwrap();
        let serial = TableRenderer::new(Box::new(integrator), 6)
            .with_threads(1)
            .render()
            .unwrap();
        let parallel = TableRenderer::new(Box::new(integrator), 6)
            .with_threads(4)
            .render()
            .unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_rejects_zero_resolution() {
        let renderer = TableRenderer::new(Box::new(EchoIntegrator), 0);
        assert!(matches!(renderer.render(), Err(DfgError::InvalidParameter { .. })));
    }

    #[test]
    fn test_propagates_integrator_errors() {
        let renderer = TableRenderer::new(Box::new(FailingIntegrator), 4).with_threads(2);
        assert!(matches!(renderer.render(), Err(DfgError::InvalidParameter { .. })));
    }
}
