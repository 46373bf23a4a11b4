//! CPU implementation of the evaluator capability

use super::{ParallelismConfig, kernels};
use crate::dtype::{Complex64, Complex128, DType, Element};
use crate::error::Result;
use crate::runtime::{Evaluator, UnaryOp};
use crate::sample::Sample;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// Evaluates elementwise operations on the host CPU
#[derive(Clone, Debug, Default)]
pub struct CpuEvaluator {
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuEvaluator {
    /// Create an evaluator using the global rayon pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the parallelism settings
    ///
    /// A `max_threads` value builds a dedicated rayon pool for this evaluator.
    /// If the pool cannot be built the global pool is used instead.
    pub fn with_parallelism(mut self, config: ParallelismConfig) -> Self {
        self.parallelism = config;
        #[cfg(feature = "rayon")]
        {
            self.pool = config.max_threads().and_then(|threads| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map(Arc::new)
                    .map_err(|e| {
                        log::warn!("cpu: falling back to the global rayon pool: {e}");
                    })
                    .ok()
            });
        }
        self
    }

    /// Current parallelism settings
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    fn install_parallelism<T: Send>(&self, f: impl FnOnce() -> T + Send) -> T {
        #[cfg(feature = "rayon")]
        if let Some(pool) = &self.pool {
            return pool.install(f);
        }
        f()
    }

    fn angle(&self, a: &Sample) -> Result<Sample> {
        let out_dtype = a.dtype().real_dtype();
        if a.is_empty() {
            return Sample::zeros(out_dtype, a.shape());
        }

        let chunk_size = self.parallelism.chunk_size();
        match a.dtype() {
            DType::Complex64 => {
                let input = a.typed::<Complex64>();
                self.run(a, |out: &mut [f32]| {
                    kernels::angle_complex64(&input, out, chunk_size)
                })
            }
            DType::Complex128 => {
                let input = a.typed::<Complex128>();
                self.run(a, |out: &mut [f64]| {
                    kernels::angle_complex128(&input, out, chunk_size)
                })
            }
            DType::F32 => {
                let input = a.typed::<f32>();
                self.run(a, |out: &mut [f32]| {
                    kernels::angle_real(&input, out, chunk_size)
                })
            }
            DType::F64 => {
                let input = a.typed::<f64>();
                self.run(a, |out: &mut [f64]| {
                    kernels::angle_real(&input, out, chunk_size)
                })
            }
        }
    }

    /// Allocate an output shaped like `a`, fill it with `kernel`, and wrap it
    fn run<O: Element>(
        &self,
        a: &Sample,
        kernel: impl FnOnce(&mut [O]) + Send,
    ) -> Result<Sample> {
        let mut out = vec![O::from_parts(0.0, 0.0); a.numel()];
        self.install_parallelism(|| kernel(&mut out));
        Sample::from_slice(&out, a.shape())
    }
}

impl Evaluator for CpuEvaluator {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn evaluate(&self, op: UnaryOp, input: &Sample) -> Result<Sample> {
        match op {
            UnaryOp::Angle => self.angle(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_real_output_keeps_dtype_and_shape() {
        let cpu = CpuEvaluator::new();
        let input = Sample::from_slice(&[-1.0f32, 2.0, -3.0, 0.0], &[2, 2]).unwrap();
        let out = cpu.evaluate(UnaryOp::Angle, &input).unwrap();
        assert_eq!(out.dtype(), DType::F32);
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(
            out.to_vec::<f32>().unwrap(),
            vec![std::f32::consts::PI, 0.0, std::f32::consts::PI, 0.0]
        );
    }

    #[test]
    fn test_complex_output_is_component_dtype() {
        let cpu = CpuEvaluator::new();
        let input = Sample::from_vec(vec![Complex128::new(-1.0, 0.0), Complex128::new(0.0, 1.0)]);
        let out = cpu.evaluate(UnaryOp::Angle, &input).unwrap();
        assert_eq!(out.dtype(), DType::F64);
        assert_eq!(out.to_vec::<f64>().unwrap(), vec![PI, PI / 2.0]);
    }

    #[test]
    fn test_scalar_input() {
        let cpu = CpuEvaluator::new();
        let out = cpu
            .evaluate(UnaryOp::Angle, &Sample::scalar(-0.5f64))
            .unwrap();
        assert_eq!(out.shape(), &[] as &[usize]);
        assert_eq!(out.to_vec::<f64>().unwrap(), vec![PI]);
    }

    #[test]
    fn test_empty_input() {
        let cpu = CpuEvaluator::new();
        let input = Sample::from_vec(Vec::<Complex64>::new());
        let out = cpu.evaluate(UnaryOp::Angle, &input).unwrap();
        assert_eq!(out.dtype(), DType::F32);
        assert!(out.is_empty());
    }

    #[test]
    fn test_dedicated_pool_matches_default() {
        let n = kernels::PARALLEL_THRESHOLD * 3;
        let data: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new((i as f32 * 0.013).cos(), (i as f32 * 0.029).sin()))
            .collect();
        let input = Sample::from_slice(&data, &[3, kernels::PARALLEL_THRESHOLD]).unwrap();

        let default = CpuEvaluator::new();
        let configured =
            CpuEvaluator::new().with_parallelism(ParallelismConfig::new(Some(2), Some(257)));
        assert_eq!(configured.parallelism().chunk_size(), 257);

        let a = default.evaluate(UnaryOp::Angle, &input).unwrap();
        let b = configured.evaluate(UnaryOp::Angle, &input).unwrap();
        assert_eq!(a, b);
    }
}
