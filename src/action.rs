//! # Action Module
//!
//! This module provides the planning operator of the STRIPS model.
//!
//! ## What is a STRIPS action?
//!
//! An action is a ground operator (all of its parameters already fixed, e.g.
//! "push box from 1 to 2") described by three fact sets:
//!
//! * `precondition`: facts that must hold for the action to fire
//! * `add`: facts asserted once the action has fired
//! * `delete`: facts retracted once the action has fired
//!
//! Besides forward application, an action can be *regressed* against a state to
//! compute a hypothetical predecessor. The heuristic uses regression to estimate
//! how far an action's prerequisites are from the initial state.
//!
//! ## Basic Usage
//!
//! ```
//! use strips::{Action, Direction, Property, State};
//!
//! let has_axe = Property::new("has_axe");
//! let near_tree = Property::new("near_tree");
//! let has_wood = Property::new("has_wood");
//!
//! let chop_wood = Action::new("chop_wood", 2)
//!     .requires(has_axe.clone())
//!     .requires(near_tree.clone())
//!     .adds(has_wood.clone())
//!     .deletes(near_tree.clone());
//!
//! let current = State::from_iter([has_axe.clone(), near_tree.clone()]);
//! assert!(chop_wood.can_apply(&current, Direction::Forward));
//!
//! let next = chop_wood.apply(&current, Direction::Forward).unwrap();
//! assert!(next.contains(&has_wood));
//! assert!(!next.contains(&near_tree));
//! ```
//!
//! ## Regression
//!
//! ```
//! use strips::{Action, Direction, Property, State};
//!
//! let chop_wood = Action::new("chop_wood", 2)
//!     .requires(Property::new("has_axe"))
//!     .adds(Property::new("has_wood"));
//!
//! // Could chopping wood have produced a state where we hold wood?
//! let target = State::from_iter([Property::new("has_wood")]);
//! let before = chop_wood.apply(&target, Direction::Reverse).unwrap();
//! assert!(before.contains(&Property::new("has_axe")));
//! assert!(!before.contains(&Property::new("has_wood")));
//! ```

use crate::trace::{ApplyTrace, NoTrace};
use crate::{Property, State};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Direction in which an action is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Fire the action: `(state ∪ add) \ delete`.
    Forward,
    /// Regress the action: `(state ∪ delete ∪ precondition) \ add`.
    Reverse,
}

/// A named, weighted STRIPS operator.
///
/// The fact sets are fixed once the action is built: the builder methods consume
/// the action and there is no way to reach the sets mutably afterwards. Two actions
/// are equal iff their names match.
///
/// # Examples
///
/// ```
/// use strips::{Action, Property};
///
/// let climb = Action::new("climb box at 2", 3)
///     .with_precondition([Property::new("box at 2"), Property::new("agent at 2")])
///     .adds(Property::new("agent on top at 2"))
///     .deletes(Property::new("agent on ground"));
///
/// assert_eq!(climb.name(), "climb box at 2");
/// assert_eq!(climb.weight(), 3);
/// assert_eq!(climb.precondition().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Action {
    name: String,
    weight: u32,
    precondition: State,
    add: State,
    delete: State,
}

impl Action {
    /// Creates an action with empty precondition, add and delete sets.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifies the action; equality and hashing use it
    /// * `weight` - Static priority, used by the heuristic to break ties
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            precondition: State::new(),
            add: State::new(),
            delete: State::new(),
        }
    }

    /// Adds one fact to the precondition set.
    pub fn requires(self, property: Property) -> Self {
        self.with_precondition([property])
    }

    /// Adds one fact to the add set.
    pub fn adds(self, property: Property) -> Self {
        self.with_add([property])
    }

    /// Adds one fact to the delete set.
    pub fn deletes(self, property: Property) -> Self {
        self.with_delete([property])
    }

    pub fn with_precondition(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.precondition = extend(self.precondition, properties);
        self
    }

    pub fn with_add(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.add = extend(self.add, properties);
        self
    }

    pub fn with_delete(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.delete = extend(self.delete, properties);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn precondition(&self) -> &State {
        &self.precondition
    }

    pub fn add(&self) -> &State {
        &self.add
    }

    pub fn delete(&self) -> &State {
        &self.delete
    }

    /// Checks whether at least one fact of the add set belongs to `goal`.
    pub fn asserts_any(&self, goal: &State) -> bool {
        self.add.intersects(goal)
    }

    /// Checks if this action can be applied to `state` in the given direction.
    ///
    /// * `Forward`: every precondition fact holds in `state`.
    /// * `Reverse`: at least one add fact holds in `state`. This is deliberately
    ///   weaker than forward containment; it asks whether the action could have
    ///   produced part of `state`, not whether `state` is exactly its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use strips::{Action, Direction, Property, State};
    ///
    /// let action = Action::new("open_door", 1)
    ///     .requires(Property::new("has_key"))
    ///     .adds(Property::new("door_open"))
    ///     .adds(Property::new("light_on"));
    ///
    /// let state = State::from_iter([Property::new("door_open")]);
    /// assert!(action.can_apply(&state, Direction::Reverse));
    /// assert!(!action.can_apply(&state, Direction::Forward));
    /// ```
    pub fn can_apply(&self, state: &State, direction: Direction) -> bool {
        match direction {
            Direction::Forward => state.contains_all(&self.precondition),
            Direction::Reverse => self.add.intersects(state),
        }
    }

    /// Applies this action to `state`, returning the resulting state.
    ///
    /// Returns `None` when [`can_apply`](Self::can_apply) fails for `direction`.
    /// The input state is never modified.
    ///
    /// The reverse result is an approximation used for scoring only: re-applying
    /// the action forward to it does not necessarily give back `state` when the
    /// add or delete sets overlap unrelated facts.
    pub fn apply(&self, state: &State, direction: Direction) -> Option<State> {
        self.apply_traced(state, direction, &NoTrace)
    }

    /// Same as [`apply`](Self::apply), notifying `trace` before a forward application.
    pub fn apply_traced(
        &self,
        state: &State,
        direction: Direction,
        trace: &dyn ApplyTrace,
    ) -> Option<State> {
        if !self.can_apply(state, direction) {
            return None;
        }

        let next = match direction {
            Direction::Forward => {
                trace.applying(self, state);
                state.union(&self.add).difference(&self.delete)
            }
            Direction::Reverse => state
                .union(&self.delete)
                .union(&self.precondition)
                .difference(&self.add),
        };
        Some(next)
    }
}

fn extend(state: State, properties: impl IntoIterator<Item = Property>) -> State {
    state.into_iter().chain(properties).collect()
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Action {}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
