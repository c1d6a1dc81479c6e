// reconcile_chain/src/resource/mod.rs

//! The minimal resource contract handlers work against: an `Object` with
//! metadata, a shared `ObjectHandle` to it, and the `Client` that persists
//! updates and deletions.

pub mod client;
pub mod fake;
pub mod handle;
pub mod object;

pub use client::{Client, ClientError};
pub use fake::FakeClient;
pub use handle::ObjectHandle;
pub use object::{Object, ObjectKey, ObjectMeta};
