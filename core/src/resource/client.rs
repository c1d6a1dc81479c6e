// reconcile_chain/src/resource/client.rs

use crate::core::context::{Context, ContextError};
use crate::resource::object::{Object, ObjectKey};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("Resource not found: {key}")]
  NotFound { key: ObjectKey },

  #[error("Conflict while writing {key}: {message}")]
  Conflict { key: ObjectKey, message: String },

  #[error("Client call refused: {0}")]
  Context(#[from] ContextError),

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

/// Persists changes made to a resource by handlers.
///
/// Both operations are expected to be idempotent from the caller's point of
/// view; retrying is the caller's business. Implementations should refuse
/// work with [`ClientError::Context`] once `ctx` is done.
#[async_trait]
pub trait Client: Send + Sync + 'static {
  /// Writes the current state of `obj`, including its metadata.
  async fn update<O: Object>(&self, ctx: &Context, obj: &O) -> Result<(), ClientError>;

  /// Deletes `obj`.
  async fn delete<O: Object>(&self, ctx: &Context, obj: &O) -> Result<(), ClientError>;
}
