//! CPU evaluator
//!
//! Reference backend for the argument operation. Inputs are processed
//! element by element with no cross-element dependency; inputs of at least
//! [`PARALLEL_THRESHOLD`] elements are split into
//! chunks and run on rayon when the `rayon` feature is enabled. Serial and
//! parallel paths produce identical results.

mod evaluator;
pub(crate) mod kernels;
mod parallelism;

pub use evaluator::CpuEvaluator;
pub use kernels::PARALLEL_THRESHOLD;
pub use parallelism::ParallelismConfig;
