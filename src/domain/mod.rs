//! # Monkey and Bananas
//!
//! The classic planning puzzle: an agent (the monkey) must get hold of a target
//! (the bananas) hanging out of reach. It can walk, push a box around, climb on
//! the box, and grab the target once standing on the box right under it.
//!
//! [`MonkeyDomain`] is an [`ActionGenerator`] enumerating every ground action of
//! the puzzle over a fixed set of positions.
//!
//! ```
//! use strips::domain::{agent_at_level, agent_has, element_at, Element, Level, MonkeyDomain};
//! use strips::{Heuristic, Planner, State};
//!
//! let initial = State::from_iter([
//!     element_at(Element::Box, 1),
//!     element_at(Element::Agent, 1),
//!     element_at(Element::Target, 2),
//!     agent_at_level(Level::Ground, 1),
//! ]);
//! let goal = State::from_iter([agent_has(Element::Target)]);
//!
//! let heuristic = Heuristic::new(initial.clone(), MonkeyDomain::default());
//! let plan = Planner::new(initial.clone(), goal.clone(), heuristic).get_plan().unwrap();
//!
//! assert!(plan.achieves(&initial, &goal));
//! ```

mod actions;
mod facts;

pub use actions::{change_level, grab_target, move_element, push_box};
pub use facts::{agent_at_level, agent_has, element_at, Element, Level};

use crate::{Action, ActionGenerator, Result, State, StripsError};

/// Generates the ground actions of the puzzle over a set of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonkeyDomain {
    positions: Vec<usize>,
}

impl MonkeyDomain {
    /// Creates a domain over the given positions.
    ///
    /// Duplicate positions are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StripsError::InvalidDomain` if no position is given.
    pub fn new(positions: impl IntoIterator<Item = usize>) -> Result<Self> {
        let mut unique = Vec::new();
        for position in positions {
            if !unique.contains(&position) {
                unique.push(position);
            }
        }
        if unique.is_empty() {
            return Err(StripsError::InvalidDomain(
                "at least one position is required".to_string(),
            ));
        }
        Ok(Self { positions: unique })
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Positions `1`, `2` and `3`.
impl Default for MonkeyDomain {
    fn default() -> Self {
        Self {
            positions: vec![1, 2, 3],
        }
    }
}

impl ActionGenerator for MonkeyDomain {
    fn enumerate_actions(&self, state: &State) -> Vec<Action> {
        let mut actions = Vec::new();

        for &from in &self.positions {
            for &to in &self.positions {
                if from != to {
                    actions.push(move_element(Element::Agent, from, to));
                    actions.push(push_box(from, to));
                }
            }
        }

        for &position in &self.positions {
            for level in [Level::Top, Level::Ground] {
                actions.push(change_level(position, level));
            }
        }

        // the target can only be grabbed where the state puts it
        for &position in &self.positions {
            if state.contains(&element_at(Element::Target, position)) {
                actions.push(grab_target(position));
            }
        }

        actions
    }
}
