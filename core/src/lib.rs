// src/lib.rs

//! reconcile-chain: a sequential handler pipeline for reconciling a single
//! external resource.
//!
//! A `Runner` owns an ordered chain of handlers and one shared `State`:
//!  - Handlers run one at a time, in the order they were added.
//!  - Any handler may return an error, which aborts the run and is returned as is.
//!  - Any handler may call `State::stop()`; the run then ends successfully at
//!    the next handler boundary.
//!  - Cancellation and deadlines of the caller's `Context` are honoured at the
//!    same boundaries.
//!  - Finalizer add/remove handlers are provided on top of a minimal `Client`.

pub mod core;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod resource;
pub mod state;

// --- Re-exports for the Public API ---

pub use crate::core::context::{CancelFunc, Context, ContextError};
pub use crate::core::control::PipelineResult;
pub use crate::core::step::{handler_fn, BoxedHandler, Handler, HandlerFunc};

pub use crate::pipeline::definition::Runner;
pub use crate::state::{with_logger, Logger, State, StateOption};

pub use crate::handlers::{deletion_handler, finalizer_handler, DeletionHandler, FinalizerHandler};
pub use crate::resource::{Client, ClientError, FakeClient, Object, ObjectHandle, ObjectKey, ObjectMeta};

pub use crate::error::{StateError, StateResult};

/*
    Typical reconciliation:
    1. Wrap the resource being reconciled in an `ObjectHandle`.
    2. Build `Runner::new(Arc::new(client), [with_logger(Logger::new("my-resource"))])`.
    3. Add handlers: `finalizer_handler`, `deletion_handler`, then the business steps
       (named types implementing `Handler`, or closures via `handler_fn`).
    4. `runner.run(&Context::background()).await` and requeue on `Err`.
*/
