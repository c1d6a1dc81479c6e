// reconcile_chain/src/state/options.rs

//! Functional options applied to a `State<C>` when a `Runner` is built.
//! Options run in the order given, so a later option overwrites what an
//! earlier one set.

use super::{Logger, State};

/// A setter applied once to the state under construction.
pub type StateOption<C> = Box<dyn FnOnce(&mut State<C>) + Send>;

/// Sets the logger handle handed to every handler.
pub fn with_logger<C>(log: Logger) -> StateOption<C> {
  Box::new(move |s: &mut State<C>| {
    s.log = log;
  })
}
