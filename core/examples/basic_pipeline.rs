// reconcile_chain/examples/basic_pipeline.rs

use reconcile_chain::{handler_fn, with_logger, Context, FakeClient, Logger, PipelineResult, Runner, State, StateError};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StateError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Basic Runner Example ---");

  // 1. Build a runner around a client; options apply in order.
  let mut runner: Runner<FakeClient> = Runner::new(
    Arc::new(FakeClient::new()),
    [with_logger(Logger::new("basic-example"))],
  );

  // 2. Append handlers; they run in insertion order.
  runner.add_handler(handler_fn(|_ctx: Context, state: State<FakeClient>| async move {
    state.log().info("Alpha executed.");
    Ok::<(), StateError>(())
  }));
  runner.add_handler(handler_fn(|_ctx: Context, state: State<FakeClient>| async move {
    state.log().info("Beta executed, stopping the run.");
    state.stop();
    Ok::<(), StateError>(())
  }));
  runner.add_handler(handler_fn(|_ctx: Context, state: State<FakeClient>| async move {
    state.log().error("Gamma executed (SHOULD NOT HAPPEN).");
    Ok::<(), StateError>(())
  }));

  // 3. Run.
  let result = runner.run(&Context::background()).await?;
  info!(?result, "Runner finished.");
  assert_eq!(result, PipelineResult::Stopped);
  Ok(())
}
