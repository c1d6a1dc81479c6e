// reconcile_chain/src/pipeline/definition.rs

//! Contains the `Runner<C, E>` struct definition and methods for its
//! construction and for appending handlers.

use crate::core::step::{BoxedHandler, Handler};
use crate::error::StateError;
use crate::state::{State, StateOption};
use std::fmt;
use std::sync::Arc;

/// Runs a chain of handlers, in insertion order, against one `State<C>`.
///
/// `C` is the resource client shared by all handlers; `E` is the error type
/// handlers return and `run` passes back unchanged.
pub struct Runner<C, E = StateError>
where
  C: Send + Sync + 'static,
  E: Send + 'static,
{
  /// Ordered chain; insertion order is execution order.
  pub(crate) handlers: Vec<BoxedHandler<C, E>>,
  pub(crate) state: State<C>,
}

impl<C, E> Runner<C, E>
where
  C: Send + Sync + 'static,
  E: Send + 'static,
{
  /// Creates a runner around `client`, applying `options` to its state in
  /// order (last write wins).
  pub fn new<I>(client: Arc<C>, options: I) -> Self
  where
    I: IntoIterator<Item = StateOption<C>>,
  {
    let mut state = State::new(client);
    for opt in options {
      opt(&mut state);
    }
    Self {
      handlers: Vec::new(),
      state,
    }
  }

  /// Appends one handler to the chain.
  pub fn add_handler<H>(&mut self, handler: H) -> &mut Self
  where
    H: Handler<C, E> + 'static,
  {
    self.handlers.push(Box::new(handler));
    self
  }

  /// Appends handlers to the chain, keeping their order. Repeated calls
  /// accumulate.
  pub fn add_handlers<I>(&mut self, handlers: I) -> &mut Self
  where
    I: IntoIterator<Item = BoxedHandler<C, E>>,
  {
    self.handlers.extend(handlers);
    self
  }

  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }

  /// The state handed to every handler.
  pub fn state(&self) -> &State<C> {
    &self.state
  }
}

impl<C, E> fmt::Debug for Runner<C, E>
where
  C: Send + Sync + 'static,
  E: Send + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Runner")
      .field("num_handlers", &self.handlers.len())
      .field("state", &self.state)
      .finish()
  }
}
