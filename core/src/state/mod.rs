// reconcile_chain/src/state/mod.rs

//! Defines `State<C>`, the context shared by every handler of one `Runner`.
//!
//! It gives handlers access to the resource client and the logger, and lets
//! them stop the active run without returning an error.

pub mod logger;
pub mod options;

pub use logger::Logger;
pub use options::{with_logger, StateOption};

use crate::core::context::CancelFunc;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{event, Level};

/// Shared handler state: client handle, logger handle and the stop control of
/// the run currently bound to it.
///
/// Cloning is cheap; clones share the client, the logger and the stop slot.
pub struct State<C> {
  client: Arc<C>,
  log: Logger,
  // Bound by `Runner::run` at the start of every invocation.
  stop: Arc<Mutex<Option<CancelFunc>>>,
}

impl<C> State<C> {
  pub(crate) fn new(client: Arc<C>) -> Self {
    Self {
      client,
      log: Logger::default(),
      stop: Arc::new(Mutex::new(None)),
    }
  }

  /// Returns the logger handle.
  pub fn log(&self) -> &Logger {
    &self.log
  }

  /// Returns the resource client.
  pub fn client(&self) -> &C {
    &self.client
  }

  /// Stops the current run. The handler calling this still runs to its end;
  /// the next handler boundary observes the stop and skips the rest of the
  /// chain. Subsequent calls do nothing.
  ///
  /// Outside of any run there is nothing to stop: the call is ignored and a
  /// warning is emitted.
  pub fn stop(&self) {
    match self.stop.lock().as_ref() {
      Some(cancel) => {
        if cancel.cancel() {
          event!(Level::DEBUG, "Stop requested for the active run.");
        }
      }
      None => {
        event!(Level::WARN, "State::stop called before any run was started; ignoring.");
      }
    }
  }

  /// Whether `stop` fired during the most recent run.
  pub fn is_stopped(&self) -> bool {
    self.stop.lock().as_ref().map_or(false, CancelFunc::is_cancelled)
  }

  pub(crate) fn bind_stop(&self, cancel: CancelFunc) {
    *self.stop.lock() = Some(cancel);
  }
}

impl<C> Clone for State<C> {
  fn clone(&self) -> Self {
    Self {
      client: Arc::clone(&self.client),
      log: self.log.clone(),
      stop: Arc::clone(&self.stop),
    }
  }
}

impl<C> fmt::Debug for State<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("State")
      .field("client_type", &std::any::type_name::<C>())
      .field("log", &self.log)
      .field("run_bound", &self.stop.lock().is_some())
      .finish()
  }
}
