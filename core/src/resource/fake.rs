// reconcile_chain/src/resource/fake.rs

//! In-memory `Client` for tests and demos.

use crate::core::context::Context;
use crate::resource::client::{Client, ClientError};
use crate::resource::object::{Object, ObjectKey, ObjectMeta};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{event, Level};

/// Stores the metadata of every object it knows, keyed by `ObjectKey`.
///
/// `update` overwrites a known object and `delete` forgets it; both report
/// `NotFound` for unknown keys and refuse with `ClientError::Context` when the
/// context is done. Call counters include refused and failed calls.
#[derive(Debug, Default)]
pub struct FakeClient {
  objects: Mutex<HashMap<ObjectKey, ObjectMeta>>,
  updates: AtomicUsize,
  deletes: AtomicUsize,
  next_failure: Mutex<Option<ClientError>>,
}

impl FakeClient {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds the store with the current state of `obj`.
  pub fn with_object<O: Object>(self, obj: &O) -> Self {
    self.objects.lock().insert(obj.key(), obj.meta().clone());
    self
  }

  pub fn get(&self, key: &ObjectKey) -> Option<ObjectMeta> {
    self.objects.lock().get(key).cloned()
  }

  pub fn contains(&self, key: &ObjectKey) -> bool {
    self.objects.lock().contains_key(key)
  }

  pub fn update_count(&self) -> usize {
    self.updates.load(Ordering::SeqCst)
  }

  pub fn delete_count(&self) -> usize {
    self.deletes.load(Ordering::SeqCst)
  }

  /// Makes the next `update` or `delete` fail with `err`.
  pub fn fail_next_with(&self, err: ClientError) {
    *self.next_failure.lock() = Some(err);
  }

  fn admit(&self, ctx: &Context) -> Result<(), ClientError> {
    if let Some(reason) = ctx.err() {
      return Err(reason.into());
    }
    match self.next_failure.lock().take() {
      Some(err) => Err(err),
      None => Ok(()),
    }
  }
}

#[async_trait]
impl Client for FakeClient {
  async fn update<O: Object>(&self, ctx: &Context, obj: &O) -> Result<(), ClientError> {
    self.updates.fetch_add(1, Ordering::SeqCst);
    self.admit(ctx)?;
    let key = obj.key();
    let mut objects = self.objects.lock();
    match objects.get_mut(&key) {
      Some(stored) => {
        *stored = obj.meta().clone();
        event!(Level::TRACE, %key, "FakeClient updated object.");
        Ok(())
      }
      None => Err(ClientError::NotFound { key }),
    }
  }

  async fn delete<O: Object>(&self, ctx: &Context, obj: &O) -> Result<(), ClientError> {
    self.deletes.fetch_add(1, Ordering::SeqCst);
    self.admit(ctx)?;
    let key = obj.key();
    match self.objects.lock().remove(&key) {
      Some(_) => {
        event!(Level::TRACE, %key, "FakeClient deleted object.");
        Ok(())
      }
      None => Err(ClientError::NotFound { key }),
    }
  }
}
