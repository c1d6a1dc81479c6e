// reconcile_chain/examples/finalizer_flow.rs

use reconcile_chain::{
  deletion_handler, finalizer_handler, handler_fn, with_logger, Context, FakeClient, Handler, Logger, Object,
  ObjectHandle, ObjectMeta, PipelineResult, Runner, State, StateError,
};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::info;

const FINALIZER: &str = "gateway.example.io/cleanup";

#[derive(Clone, Debug)]
struct ApiRule {
  meta: ObjectMeta,
  host: String,
}

impl Object for ApiRule {
  fn kind(&self) -> &str {
    "ApiRule"
  }

  fn meta(&self) -> &ObjectMeta {
    &self.meta
  }

  fn meta_mut(&mut self) -> &mut ObjectMeta {
    &mut self.meta
  }
}

fn build_runner(client: Arc<FakeClient>, rule: &ObjectHandle<ApiRule>) -> Runner<FakeClient> {
  let mut runner = Runner::new(client, [with_logger(Logger::new(&rule.key().to_string()))]);
  let business_rule = rule.clone();
  runner.add_handlers([
    finalizer_handler(rule.clone(), FINALIZER).boxed(),
    deletion_handler(rule.clone(), FINALIZER).boxed(),
    handler_fn(move |_ctx: Context, state: State<FakeClient>| {
      let rule = business_rule.clone();
      async move {
        let host = rule.read().host.clone();
        state.log().info(format!("exposing host {}", host));
        Ok::<(), StateError>(())
      }
    })
    .boxed(),
  ]);
  runner
}

#[tokio::main]
async fn main() -> Result<(), StateError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Finalizer Flow Example ---");

  let rule = ApiRule {
    meta: ObjectMeta::new("default", "orders-api"),
    host: "orders.example.io".to_string(),
  };
  let client = Arc::new(FakeClient::new().with_object(&rule));
  let handle = ObjectHandle::new(rule);
  let runner = build_runner(client.clone(), &handle);

  // Each reconciliation gets at most five seconds.
  let (ctx, _cancel) = Context::with_timeout(&Context::background(), Duration::from_secs(5));

  // First pass: finalizer is missing, gets added, run stops.
  let first = runner.run(&ctx).await?;
  info!(?first, finalizers = ?handle.read().meta().finalizers, "First reconciliation.");
  assert_eq!(first, PipelineResult::Stopped);

  // Second pass: finalizer present, the business handler runs.
  let second = runner.run(&ctx).await?;
  info!(?second, "Second reconciliation.");
  assert_eq!(second, PipelineResult::Completed);

  // Deletion requested: finalizer is removed and the resource deleted.
  handle.write().meta_mut().deletion_timestamp = Some(SystemTime::now());
  let third = runner.run(&ctx).await?;
  info!(?third, stored = client.contains(&handle.key()), "Deletion reconciliation.");
  assert_eq!(third, PipelineResult::Stopped);
  assert!(!client.contains(&handle.key()));
  Ok(())
}
