// reconcile_chain/src/error.rs
use crate::resource::client::ClientError;
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Default error type of a `Runner`.
///
/// A chain may use any error type; this one covers the built-in handlers
/// (client failures) and arbitrary handler failures via `anyhow`.
#[derive(Debug, Error)]
pub enum StateError {
  #[error("Resource client error: {0}")]
  Client(#[from] ClientError),

  #[error("Error in handler. Source: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },
}

// Lets handlers written against `anyhow` use `?` directly.
impl From<AnyhowError> for StateError {
  fn from(err: AnyhowError) -> Self {
    // Keep a client failure recognisable instead of burying it in Handler.
    match err.downcast::<ClientError>() {
      Ok(client_err) => StateError::Client(client_err),
      Err(source) => StateError::Handler { source },
    }
  }
}

pub type StateResult<T, E = StateError> = std::result::Result<T, E>;
