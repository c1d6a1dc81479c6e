// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use reconcile_chain::{
  handler_fn, BoxedHandler, ClientError, Context, FakeClient, Handler, Object, ObjectMeta, State,
};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)] // Clone, PartialEq, Eq for assertions
pub enum TestError {
  #[error("Client error: {0}")]
  Client(String), // Store as String for Eq comparison

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<ClientError> for TestError {
  fn from(err: ClientError) -> Self {
    TestError::Client(err.to_string())
  }
}

// --- Common Resource Type ---
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestRule {
  pub meta: ObjectMeta,
  pub host: String,
}

impl TestRule {
  pub fn new(meta: ObjectMeta) -> Self {
    Self {
      meta,
      host: "example.local".to_string(),
    }
  }
}

impl Object for TestRule {
  fn kind(&self) -> &str {
    "TestRule"
  }

  fn meta(&self) -> &ObjectMeta {
    &self.meta
  }

  fn meta_mut(&mut self) -> &mut ObjectMeta {
    &mut self.meta
  }
}

// --- Execution Recorder ---
/// Records the names of handlers in the order they ran.
#[derive(Clone, Debug, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
  pub fn record(&self, name: &str) {
    self.0.lock().push(name.to_string());
  }

  pub fn executed(&self) -> Vec<String> {
    self.0.lock().clone()
  }

  pub fn count(&self) -> usize {
    self.0.lock().len()
  }
}

// --- Common Handler Creators ---
pub fn create_noop_handler(name: &'static str, recorder: &Recorder) -> BoxedHandler<FakeClient, TestError> {
  let recorder = recorder.clone();
  handler_fn(move |_ctx: Context, _state: State<FakeClient>| {
    let recorder = recorder.clone();
    async move {
      recorder.record(name);
      HANDLER_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      tracing::debug!(target: "test_handlers", step = name, "executed");
      Ok::<(), TestError>(())
    }
  })
  .boxed()
}

pub fn create_failing_handler(
  name: &'static str,
  error_message: &'static str,
  recorder: &Recorder,
) -> BoxedHandler<FakeClient, TestError> {
  let recorder = recorder.clone();
  handler_fn(move |_ctx: Context, _state: State<FakeClient>| {
    let recorder = recorder.clone();
    async move {
      recorder.record(name);
      HANDLER_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      tracing::warn!(target: "test_handlers", step = name, "failing with: '{}'", error_message);
      Err::<(), TestError>(TestError::Handler(error_message.to_string()))
    }
  })
  .boxed()
}

/// Calls `state.stop()` `times` times, then returns `Ok(())`.
pub fn create_stopping_handler(
  name: &'static str,
  times: usize,
  recorder: &Recorder,
) -> BoxedHandler<FakeClient, TestError> {
  let recorder = recorder.clone();
  handler_fn(move |_ctx: Context, state: State<FakeClient>| {
    let recorder = recorder.clone();
    async move {
      recorder.record(name);
      HANDLER_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      for _ in 0..times {
        state.stop();
      }
      Ok::<(), TestError>(())
    }
  })
  .boxed()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counter for checking execution counts across a test ---
pub static HANDLER_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  HANDLER_EXEC_COUNTER.store(0, Ordering::SeqCst);
}
