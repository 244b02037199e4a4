//! Observation hook for forward action application.
//!
//! Tracing is purely observational: implementations see every action the planner
//! commits, together with the state it is applied to, and must not influence the
//! planning run.

use crate::{Action, State};

/// Receives a notification each time an action is applied forward.
pub trait ApplyTrace {
    fn applying(&self, action: &Action, state: &State);
}

/// Trace that ignores every notification. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl ApplyTrace for NoTrace {
    fn applying(&self, _action: &Action, _state: &State) {}
}

/// Trace that writes one `info` line per applied action through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl ApplyTrace for LogTrace {
    fn applying(&self, action: &Action, state: &State) {
        log::info!("applying {} to state {}", action, state);
    }
}
