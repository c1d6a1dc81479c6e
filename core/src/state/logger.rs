// reconcile_chain/src/state/logger.rs

use std::fmt::Display;
use tracing::{debug, error, info, info_span, warn, Span};

/// Leveled logging handle injected into `State`.
///
/// Every event is emitted inside the wrapped span, so a subscriber sees it
/// with the span's fields (for example the name of the resource being
/// reconciled) no matter which handler logged it.
#[derive(Debug, Clone)]
pub struct Logger {
  span: Span,
}

impl Logger {
  /// A logger whose events carry `name` on a `reconcile` span.
  pub fn new(name: &str) -> Self {
    Self {
      span: info_span!("reconcile", name = %name),
    }
  }

  pub fn from_span(span: Span) -> Self {
    Self { span }
  }

  pub fn span(&self) -> &Span {
    &self.span
  }

  pub fn info(&self, msg: impl Display) {
    self.span.in_scope(|| info!("{}", msg));
  }

  pub fn debug(&self, msg: impl Display) {
    self.span.in_scope(|| debug!("{}", msg));
  }

  pub fn warn(&self, msg: impl Display) {
    self.span.in_scope(|| warn!("{}", msg));
  }

  pub fn error(&self, msg: impl Display) {
    self.span.in_scope(|| error!("{}", msg));
  }
}

impl Default for Logger {
  /// A logger over a disabled span; events still reach the subscriber, just
  /// without span fields.
  fn default() -> Self {
    Self::from_span(Span::none())
  }
}
