// reconcile_chain/src/core/context.rs

//! Defines `Context`, the cancellable value handed to every handler and client
//! call, together with the `CancelFunc` that cancels it.
//!
//! A context observes its own cancellation, the cancellation of any ancestor,
//! and the earliest deadline along its ancestry. Checking it never blocks.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Reason a context is done, mirroring the two ways it can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
  #[error("context canceled")]
  Canceled,
  #[error("context deadline exceeded")]
  DeadlineExceeded,
}

struct ContextInner {
  cancelled: AtomicBool,
  deadline: Option<Instant>,
  parent: Option<Context>,
}

/// A cheap-to-clone cancellation scope.
///
/// Clones share the same cancellation flag. Child scopes are created with
/// [`Context::with_cancel`], [`Context::with_deadline`] or [`Context::with_timeout`].
#[derive(Clone)]
pub struct Context {
  inner: Arc<ContextInner>,
}

impl Context {
  /// The root context: never cancelled, no deadline.
  pub fn background() -> Self {
    Self::derive(None, None)
  }

  fn derive(parent: Option<&Context>, deadline: Option<Instant>) -> Self {
    let inherited = parent.and_then(Context::deadline);
    let deadline = match (inherited, deadline) {
      (Some(a), Some(b)) => Some(a.min(b)),
      (a, b) => a.or(b),
    };
    Context {
      inner: Arc::new(ContextInner {
        cancelled: AtomicBool::new(false),
        deadline,
        parent: parent.cloned(),
      }),
    }
  }

  /// Derives a child that is done when `parent` is done or when the returned
  /// `CancelFunc` fires, whichever comes first.
  pub fn with_cancel(parent: &Context) -> (Context, CancelFunc) {
    let ctx = Self::derive(Some(parent), None);
    let cancel = CancelFunc { ctx: ctx.clone() };
    (ctx, cancel)
  }

  /// Like [`Context::with_cancel`], additionally done once `deadline` passes.
  /// A parent's earlier deadline still wins.
  pub fn with_deadline(parent: &Context, deadline: Instant) -> (Context, CancelFunc) {
    let ctx = Self::derive(Some(parent), Some(deadline));
    let cancel = CancelFunc { ctx: ctx.clone() };
    (ctx, cancel)
  }

  /// Deadline of `now + timeout`. A timeout too large to represent yields no
  /// deadline of its own.
  pub fn with_timeout(parent: &Context, timeout: Duration) -> (Context, CancelFunc) {
    match Instant::now().checked_add(timeout) {
      Some(deadline) => Self::with_deadline(parent, deadline),
      None => Self::with_cancel(parent),
    }
  }

  pub fn deadline(&self) -> Option<Instant> {
    self.inner.deadline
  }

  /// Returns why the context is done, or `None` while it is still live.
  /// Cancellation takes precedence over an expired deadline.
  pub fn err(&self) -> Option<ContextError> {
    if self.cancelled_in_chain() {
      return Some(ContextError::Canceled);
    }
    match self.inner.deadline {
      Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
      _ => None,
    }
  }

  /// Non-blocking check used at handler boundaries.
  pub fn is_done(&self) -> bool {
    self.err().is_some()
  }

  fn cancelled_in_chain(&self) -> bool {
    let mut current = Some(self);
    while let Some(ctx) = current {
      if ctx.inner.cancelled.load(Ordering::Acquire) {
        return true;
      }
      current = ctx.inner.parent.as_ref();
    }
    false
  }
}

impl Default for Context {
  fn default() -> Self {
    Self::background()
  }
}

impl fmt::Debug for Context {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Context")
      .field("deadline", &self.inner.deadline)
      .field("has_parent", &self.inner.parent.is_some())
      .field("err", &self.err())
      .finish()
  }
}

/// Cancels the context it was created with. Safe to call any number of times
/// from any thread; only the first call has an effect.
#[derive(Clone, Debug)]
pub struct CancelFunc {
  ctx: Context,
}

impl CancelFunc {
  /// Returns `true` for the call that actually cancelled the context.
  pub fn cancel(&self) -> bool {
    !self.ctx.inner.cancelled.swap(true, Ordering::AcqRel)
  }

  /// Whether this function has fired. Unlike [`Context::is_done`] this ignores
  /// ancestors and deadlines.
  pub fn is_cancelled(&self) -> bool {
    self.ctx.inner.cancelled.load(Ordering::Acquire)
  }

  pub fn context(&self) -> &Context {
    &self.ctx
  }
}
