// reconcile_chain/src/handlers/finalizer.rs

//! Finalizer lifecycle handlers.
//!
//! Placed at the head of a chain, `FinalizerHandler` followed by
//! `DeletionHandler` make sure a live resource carries the finalizer and that a
//! resource being deleted gets it removed. Whenever either of them writes to
//! the client it also stops the run, so the rest of the chain sees the result
//! of that write on the next reconciliation instead of in this one.

use crate::core::context::Context;
use crate::core::step::Handler;
use crate::resource::client::{Client, ClientError};
use crate::resource::handle::ObjectHandle;
use crate::resource::object::Object;
use crate::state::State;
use async_trait::async_trait;

/// Adds the finalizer `key` to the resource when it is missing, persists the
/// resource with `Client::update`, and stops the run.
#[derive(Debug, Clone)]
pub struct FinalizerHandler<O: Object> {
  obj: ObjectHandle<O>,
  key: String,
}

pub fn finalizer_handler<O: Object>(obj: ObjectHandle<O>, key: impl Into<String>) -> FinalizerHandler<O> {
  FinalizerHandler { obj, key: key.into() }
}

#[async_trait]
impl<C, E, O> Handler<C, E> for FinalizerHandler<O>
where
  C: Client,
  E: From<ClientError> + Send + 'static,
  O: Object,
{
  async fn handle(&self, ctx: Context, state: State<C>) -> Result<(), E> {
    let snapshot = {
      let mut obj = self.obj.write();
      if obj.meta().contains_finalizer(&self.key) {
        state.log().debug("deletion finalizer present");
        return Ok(());
      }
      state.log().info("deletion finalizer not found, adding");
      obj.meta_mut().add_finalizer(&self.key);
      obj.clone()
    };
    let result = state.client().update(&ctx, &snapshot).await;
    if let Err(err) = &result {
      state.log().warn(format!("failed to persist finalizer: {}", err));
    }
    // The run stops whether or not the write went through.
    state.stop();
    result.map_err(E::from)
  }
}

/// When the resource has a deletion timestamp, removes the finalizer `key`,
/// deletes the resource with `Client::delete`, and stops the run. Otherwise
/// does nothing.
#[derive(Debug, Clone)]
pub struct DeletionHandler<O: Object> {
  obj: ObjectHandle<O>,
  key: String,
}

pub fn deletion_handler<O: Object>(obj: ObjectHandle<O>, key: impl Into<String>) -> DeletionHandler<O> {
  DeletionHandler { obj, key: key.into() }
}

#[async_trait]
impl<C, E, O> Handler<C, E> for DeletionHandler<O>
where
  C: Client,
  E: From<ClientError> + Send + 'static,
  O: Object,
{
  async fn handle(&self, ctx: Context, state: State<C>) -> Result<(), E> {
    let snapshot = {
      let mut obj = self.obj.write();
      if !obj.meta().is_being_deleted() {
        return Ok(());
      }
      state.log().info("resource is in deletion. Removing finalizer");
      obj.meta_mut().remove_finalizer(&self.key);
      obj.clone()
    };
    let result = state.client().delete(&ctx, &snapshot).await;
    if let Err(err) = &result {
      state.log().warn(format!("failed to delete resource: {}", err));
    }
    state.stop();
    result.map_err(E::from)
  }
}
