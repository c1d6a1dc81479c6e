pub mod context;
pub mod control;
pub mod step;

// Re-export key types for easier access from other modules (and lib.rs)
pub use context::{CancelFunc, Context, ContextError};
pub use control::PipelineResult;
pub use step::{handler_fn, BoxedHandler, Handler, HandlerFunc};
