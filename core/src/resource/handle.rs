// reconcile_chain/src/resource/handle.rs

use crate::resource::object::{Object, ObjectKey};
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared, lockable handle to the resource being reconciled.
///
/// Handlers that mutate the resource and the caller that inspects it after
/// the run hold clones of the same handle.
///
/// IMPORTANT: guards returned here are blocking and MUST be dropped before any
/// `.await`. Take a [`snapshot`](ObjectHandle::snapshot) to hand the resource
/// to a client call.
#[derive(Debug)]
pub struct ObjectHandle<O: Object>(Arc<RwLock<O>>);

impl<O: Object> ObjectHandle<O> {
  pub fn new(obj: O) -> Self {
    ObjectHandle(Arc::new(RwLock::new(obj)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, O> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, O> {
    self.0.write()
  }

  /// Clones the current state of the resource out of the lock.
  pub fn snapshot(&self) -> O {
    self.0.read().clone()
  }

  pub fn key(&self) -> ObjectKey {
    self.0.read().key()
  }

  /// Read guard over a part of the resource, e.g. `handle.map_read(|o| &o.meta().finalizers)`.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&O) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }
}

impl<O: Object> Clone for ObjectHandle<O> {
  fn clone(&self) -> Self {
    ObjectHandle(Arc::clone(&self.0))
  }
}

impl<O: Object + Default> Default for ObjectHandle<O> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
