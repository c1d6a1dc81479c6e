// reconcile_chain/src/pipeline/execution.rs

//! Contains the `Runner::run()` method, responsible for driving the handler
//! chain to completion, a cooperative stop, or the first error.

use crate::core::context::Context;
use crate::core::control::PipelineResult;
use crate::pipeline::definition::Runner;
use std::fmt::Display;
use tracing::{event, instrument, span, Instrument, Level};

impl<C, E> Runner<C, E>
where
  C: Send + Sync + 'static,
  E: Display + Send + 'static,
{
  /// Executes the chain against `ctx`.
  ///
  /// A child of `ctx` is derived for this run and its cancel function is bound
  /// into the state, so `State::stop` ends this run only. Before each handler
  /// the child is checked without blocking:
  /// - done (stopped, parent cancelled, or deadline passed): the remaining
  ///   handlers are skipped and `Ok(PipelineResult::Stopped)` is returned;
  /// - otherwise the handler runs. Its error is returned as is, and nothing
  ///   after it runs.
  ///
  /// A stop requested by the last handler has no boundary after it, so it is
  /// checked once more when the loop ends and also yields `Stopped`. A caller
  /// deadline that passes after the last handler does not.
  ///
  /// A handler already running is never interrupted.
  #[instrument(
        name = "Runner::run",
        skip_all,
        fields(
            client_type = %std::any::type_name::<C>(),
            num_handlers = self.handlers.len(),
        ),
        err(Display)
    )]
  pub async fn run(&self, ctx: &Context) -> Result<PipelineResult, E> {
    let (ctx, cancel) = Context::with_cancel(ctx);
    self.state.bind_stop(cancel.clone());
    event!(Level::DEBUG, "Runner execution starting.");

    for (handler_idx, handler) in self.handlers.iter().enumerate() {
      if let Some(reason) = ctx.err() {
        event!(
          Level::INFO,
          handler_index = handler_idx,
          reason = %reason,
          "Run stopped; skipping remaining handlers."
        );
        return Ok(PipelineResult::Stopped);
      }

      let handler_span = span!(Level::INFO, "handler_execution", handler_index = handler_idx);
      if let Err(e) = handler
        .handle(ctx.clone(), self.state.clone())
        .instrument(handler_span)
        .await
      {
        // The error itself is recorded by `instrument(err)` on this fn.
        event!(Level::DEBUG, handler_index = handler_idx, "Handler failed; aborting run.");
        return Err(e);
      }
      event!(Level::TRACE, handler_index = handler_idx, "Handler finished.");
    }

    if cancel.is_cancelled() {
      event!(Level::INFO, "Run stopped by its last handler.");
      return Ok(PipelineResult::Stopped);
    }

    event!(Level::DEBUG, "Runner execution completed successfully.");
    Ok(PipelineResult::Completed)
  }
}
