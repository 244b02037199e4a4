//! # strips
//!
//! A small classical planner on the STRIPS model. Given an initial state, a goal
//! state and a source of ground actions (each with precondition, add and delete
//! sets of facts), it searches backwards from the goal for an ordered sequence of
//! actions reaching it.
//!
//! The planner does not guarantee optimal plans, nor termination on arbitrary
//! domains. See the [`planner`] module for its known limitations.

pub mod action;
pub mod domain;
mod error;
pub mod generator;
pub mod heuristic;
pub mod planner;
mod property;
mod state;
pub mod trace;

pub use action::{Action, Direction};
pub use error::{Result, StripsError};
pub use generator::{ActionGenerator, ActionLibrary};
pub use heuristic::Heuristic;
pub use planner::{Plan, Planner, PlannerConfig, Target, DEFAULT_EFFICIENCY_LIMIT};
pub use property::Property;
pub use state::State;
pub use trace::{ApplyTrace, LogTrace, NoTrace};
