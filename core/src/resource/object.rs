// reconcile_chain/src/resource/object.rs

//! Metadata-only model of a persisted resource.

use std::fmt;
use std::time::SystemTime;

/// The part of a resource the chain cares about: identity, finalizers and
/// whether deletion has been requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMeta {
  pub name: String,
  pub namespace: String,
  pub finalizers: Vec<String>,
  /// Set once deletion was requested; the resource lingers until its
  /// finalizers are gone.
  pub deletion_timestamp: Option<SystemTime>,
}

impl ObjectMeta {
  pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      namespace: namespace.into(),
      ..Default::default()
    }
  }

  pub fn with_finalizers<I, S>(mut self, finalizers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.finalizers = finalizers.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_deletion_timestamp(mut self, at: SystemTime) -> Self {
    self.deletion_timestamp = Some(at);
    self
  }

  pub fn contains_finalizer(&self, finalizer: &str) -> bool {
    self.finalizers.iter().any(|f| f == finalizer)
  }

  /// Appends `finalizer` unless already present. Returns whether it was added.
  pub fn add_finalizer(&mut self, finalizer: &str) -> bool {
    if self.contains_finalizer(finalizer) {
      return false;
    }
    self.finalizers.push(finalizer.to_string());
    true
  }

  /// Removes every occurrence of `finalizer`. Returns whether any was removed.
  pub fn remove_finalizer(&mut self, finalizer: &str) -> bool {
    let before = self.finalizers.len();
    self.finalizers.retain(|f| f != finalizer);
    self.finalizers.len() != before
  }

  pub fn is_being_deleted(&self) -> bool {
    self.deletion_timestamp.is_some()
  }
}

/// Identity of a resource across client calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey {
  pub kind: String,
  pub namespace: String,
  pub name: String,
}

impl fmt::Display for ObjectKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}/{}", self.kind, self.namespace, self.name)
  }
}

/// A resource a `Client` can persist.
///
/// Only the metadata is modelled; the rest of the resource is opaque to the
/// chain and travels with the implementing type.
pub trait Object: Clone + Send + Sync + 'static {
  fn kind(&self) -> &str;

  fn meta(&self) -> &ObjectMeta;

  fn meta_mut(&mut self) -> &mut ObjectMeta;

  fn key(&self) -> ObjectKey {
    let meta = self.meta();
    ObjectKey {
      kind: self.kind().to_string(),
      namespace: meta.namespace.clone(),
      name: meta.name.clone(),
    }
  }
}
