// reconcile_chain/src/handlers/mod.rs

//! Ready-made handlers built on the `Handler` capability.

pub mod finalizer;

pub use finalizer::{deletion_handler, finalizer_handler, DeletionHandler, FinalizerHandler};
