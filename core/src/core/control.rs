// reconcile_chain/src/core/control.rs

//! Defines the outcome of a full `Runner::run` invocation.

/// Outcome of a run that did not fail.
///
/// A handler error is reported through the `Err` side of `Runner::run`, so the
/// three terminal states of a run are `Completed`, `Stopped` and `Err(e)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every handler ran to completion.
  Completed,
  /// A stop was observed at a handler boundary; the remaining handlers were skipped.
  /// This is a requested termination, not a failure.
  Stopped,
}

impl PipelineResult {
  pub fn is_stopped(&self) -> bool {
    matches!(self, PipelineResult::Stopped)
  }
}
