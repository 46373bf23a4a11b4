//! Scoped execution context for one test case

use super::{Evaluator, UnaryOp};
use crate::error::Result;
use crate::sample::Sample;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for session IDs
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a session
///
/// IDs are unique within a process lifetime, which keeps log lines from
/// concurrently running test cases apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    #[inline]
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Execution context borrowed from an evaluator for the length of a test case
///
/// A session is acquired with [`Session::new`] and released when it is
/// dropped, whether the test case passed, failed, or unwound.
pub struct Session<'e, E: Evaluator + ?Sized> {
    id: SessionId,
    evaluator: &'e E,
    runs: usize,
}

impl<'e, E: Evaluator + ?Sized> Session<'e, E> {
    /// Open a session on `evaluator`
    pub fn new(evaluator: &'e E) -> Self {
        let id = SessionId::next();
        log::trace!("{id}: opened on {}", evaluator.name());
        Self {
            id,
            evaluator,
            runs: 0,
        }
    }

    /// This session's ID
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Number of operations run so far
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Evaluate `op` over `input`
    pub fn run(&mut self, op: UnaryOp, input: &Sample) -> Result<Sample> {
        self.runs += 1;
        log::trace!(
            "{}: {op} over {} {:?}",
            self.id,
            input.dtype(),
            input.shape()
        );
        self.evaluator.evaluate(op, input)
    }
}

impl<E: Evaluator + ?Sized> Drop for Session<'_, E> {
    fn drop(&mut self) {
        log::debug!(
            "{}: released on {} after {} op(s)",
            self.id,
            self.evaluator.name(),
            self.runs
        );
    }
}
