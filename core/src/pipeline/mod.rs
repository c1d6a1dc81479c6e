// reconcile_chain/src/pipeline/mod.rs

//! Defines the `Runner<C, E>` struct, its construction, and execution logic.

pub mod definition;
pub mod execution;

// Re-export the main Runner struct
pub use definition::Runner;
