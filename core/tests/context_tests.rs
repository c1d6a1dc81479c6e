// tests/context_tests.rs
use reconcile_chain::{Context, ContextError};
use std::time::{Duration, Instant};

#[test]
fn test_background_is_never_done() {
  let ctx = Context::background();
  assert!(!ctx.is_done());
  assert_eq!(ctx.err(), None);
  assert_eq!(ctx.deadline(), None);
}

#[test]
fn test_cancel_is_idempotent() {
  let (ctx, cancel) = Context::with_cancel(&Context::background());
  assert!(!cancel.is_cancelled());

  assert!(cancel.cancel());
  assert!(!cancel.cancel());
  assert!(!cancel.clone().cancel());

  assert!(cancel.is_cancelled());
  assert_eq!(ctx.err(), Some(ContextError::Canceled));
}

#[test]
fn test_clones_share_cancellation() {
  let (ctx, cancel) = Context::with_cancel(&Context::background());
  let clone = ctx.clone();
  cancel.cancel();
  assert!(clone.is_done());
  assert!(cancel.context().is_done());
}

#[test]
fn test_parent_cancellation_reaches_children_only_downward() {
  let (parent, cancel_parent) = Context::with_cancel(&Context::background());
  let (child, cancel_child) = Context::with_cancel(&parent);
  let (grandchild, _cancel_grandchild) = Context::with_cancel(&child);

  cancel_child.cancel();
  assert!(child.is_done());
  assert!(grandchild.is_done());
  assert!(!parent.is_done());

  let (sibling, sibling_cancel) = Context::with_cancel(&parent);
  cancel_parent.cancel();
  assert_eq!(sibling.err(), Some(ContextError::Canceled));
  // Cancelled through its parent, not by its own function.
  assert!(!sibling_cancel.is_cancelled());
}

#[test]
fn test_zero_timeout_is_immediately_exceeded() {
  let (ctx, _cancel) = Context::with_timeout(&Context::background(), Duration::ZERO);
  assert_eq!(ctx.err(), Some(ContextError::DeadlineExceeded));
}

#[test]
fn test_cancel_takes_precedence_over_expired_deadline() {
  let (ctx, cancel) = Context::with_timeout(&Context::background(), Duration::ZERO);
  cancel.cancel();
  assert_eq!(ctx.err(), Some(ContextError::Canceled));
}

#[test]
fn test_child_inherits_earlier_parent_deadline() {
  let soon = Instant::now() + Duration::from_secs(5);
  let later = soon + Duration::from_secs(60);

  let (parent, _p) = Context::with_deadline(&Context::background(), soon);
  let (child, _c) = Context::with_deadline(&parent, later);
  assert_eq!(child.deadline(), Some(soon));

  let (plain_child, _pc) = Context::with_cancel(&parent);
  assert_eq!(plain_child.deadline(), Some(soon));

  let (tighter, _t) = Context::with_timeout(&parent, Duration::from_millis(1));
  assert!(tighter.deadline().unwrap() < soon);
}

#[test]
fn test_unrepresentable_timeout_means_no_deadline() {
  let (ctx, _cancel) = Context::with_timeout(&Context::background(), Duration::MAX);
  assert_eq!(ctx.deadline(), None);
  assert!(!ctx.is_done());
}

#[test]
fn test_context_error_messages() {
  assert_eq!(ContextError::Canceled.to_string(), "context canceled");
  assert_eq!(ContextError::DeadlineExceeded.to_string(), "context deadline exceeded");
}
