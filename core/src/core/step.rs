// reconcile_chain/src/core/step.rs

//! Defines the `Handler<C, E>` capability: a single unit of reconciliation
//! logic executed as one link of a `Runner` chain.

use crate::core::context::Context;
use crate::state::State;
use async_trait::async_trait;
use std::future::Future;

/// An object that can be used as part of a handler chain.
///
/// Each handler implements independent logic for one part of a resource's
/// reconciliation. It receives the run's `Context` and a clone of the runner's
/// `State<C>`, and may:
/// 1. read or mutate the resource through the client in `state`,
/// 2. call `state.stop()` to skip every handler after it,
/// 3. return `Err(e)` to abort the run with `e`.
///
/// `C` is the resource client type, `E` the error type the chain returns.
#[async_trait]
pub trait Handler<C, E>: Send + Sync
where
  C: Send + Sync + 'static,
  E: Send + 'static,
{
  async fn handle(&self, ctx: Context, state: State<C>) -> Result<(), E>;

  /// Erases the concrete handler type so different handlers can share one
  /// `add_handlers` call.
  fn boxed(self) -> BoxedHandler<C, E>
  where
    Self: Sized + 'static,
  {
    Box::new(self)
  }
}

/// Type-erased handler as stored by the `Runner`.
pub type BoxedHandler<C, E> = Box<dyn Handler<C, E>>;

/// Adapts a plain async function or closure into a `Handler`, so simple steps
/// need no named type.
///
/// ```ignore
/// let step = handler_fn(|_ctx: Context, state: State<MyClient>| async move {
///   state.log().info("hello from a step");
///   Ok::<_, StateError>(())
/// });
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HandlerFunc<F>(F);

/// Wraps `f` as a [`HandlerFunc`].
pub fn handler_fn<F>(f: F) -> HandlerFunc<F> {
  HandlerFunc(f)
}

#[async_trait]
impl<C, E, F, Fut> Handler<C, E> for HandlerFunc<F>
where
  C: Send + Sync + 'static,
  E: Send + 'static,
  F: Fn(Context, State<C>) -> Fut + Send + Sync,
  Fut: Future<Output = Result<(), E>> + Send + 'static,
{
  async fn handle(&self, ctx: Context, state: State<C>) -> Result<(), E> {
    (self.0)(ctx, state).await
  }
}
