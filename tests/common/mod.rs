//! Common test utilities
#![allow(dead_code)]

use argcheck::compare::ToleranceMode;
use argcheck::config::ValidatorConfig;
use argcheck::runtime::cpu::{CpuEvaluator, ParallelismConfig};
use argcheck::validator::ArgumentOpValidator;

/// Install a test logger once per binary; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Validator over the default CPU evaluator with the default config
///
/// The config is not read from the environment so that results do not depend
/// on the shell a test runs in.
pub fn cpu_validator() -> ArgumentOpValidator<CpuEvaluator> {
    init_logging();
    ArgumentOpValidator::new(CpuEvaluator::new())
}

/// Validator over the default CPU evaluator comparing with `==`
pub fn exact_cpu_validator() -> ArgumentOpValidator<CpuEvaluator> {
    cpu_validator().with_mode(ToleranceMode::Exact)
}

/// Validator over a CPU evaluator with a dedicated pool and small chunks,
/// so that moderately sized samples take the parallel path
pub fn parallel_cpu_validator(seed: u64) -> ArgumentOpValidator<CpuEvaluator> {
    init_logging();
    let evaluator =
        CpuEvaluator::new().with_parallelism(ParallelismConfig::new(Some(2), Some(257)));
    ArgumentOpValidator::new(evaluator).with_config(ValidatorConfig::default().with_seed(seed))
}
