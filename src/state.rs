//! # State Module
//!
//! This module provides the [`State`] structure: an unordered set of
//! [`Property`] facts describing one snapshot of the world.
//!
//! ## What is State in STRIPS?
//!
//! A state is used in several ways by the planner:
//!
//! - **World State**: the facts that hold right now
//! - **Goal State**: the facts that must hold when the plan is done
//! - **Action sets**: the precondition, add and delete sets of an action
//!
//! States are never mutated in place. Every set operation returns a new `State`,
//! so a state handed out earlier stays a valid historical reference.
//!
//! ## Basic Usage
//!
//! ```
//! use strips::{Property, State};
//!
//! let current: State = [Property::new("has_axe"), Property::new("near_tree")]
//!     .into_iter()
//!     .collect();
//! let goal = State::from_iter([Property::new("has_wood")]);
//!
//! assert!(!current.contains_all(&goal));
//!
//! let next = current.union(&goal);
//! assert!(next.contains_all(&goal));
//! assert_eq!(current.len(), 2); // the earlier snapshot is untouched
//! ```

use crate::Property;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// A set of properties with membership-only semantics.
///
/// Duplicates collapse by property identity (the description). Iteration follows
/// the lexicographic order of descriptions, which gives the planner a canonical,
/// reproducible order for goal facts.
///
/// # Examples
///
/// ```
/// use strips::{Property, State};
///
/// let state = State::from_iter([
///     Property::weighted("box at 1", 3),
///     Property::weighted("box at 1", 3),
///     Property::weighted("agent at 1", 2),
/// ]);
///
/// assert_eq!(state.len(), 2);
/// assert!(state.contains(&Property::new("box at 1")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct State {
    properties: BTreeSet<Property>,
}

impl State {
    /// Creates a new empty state.
    pub fn new() -> Self {
        Self {
            properties: BTreeSet::new(),
        }
    }

    /// Gets the underlying property set.
    pub fn properties(&self) -> &BTreeSet<Property> {
        &self.properties
    }

    pub fn contains(&self, property: &Property) -> bool {
        self.properties.contains(property)
    }

    /// Checks whether every property of `other` holds in this state.
    ///
    /// An empty `other` is always contained.
    pub fn contains_all(&self, other: &State) -> bool {
        self.properties.is_superset(&other.properties)
    }

    /// Checks whether at least one property of `other` holds in this state.
    pub fn intersects(&self, other: &State) -> bool {
        !self.properties.is_disjoint(&other.properties)
    }

    /// Returns a new state holding the properties of both states.
    pub fn union(&self, other: &State) -> State {
        self.properties.union(&other.properties).cloned().collect()
    }

    /// Returns a new state holding the properties of `self` that are not in `other`.
    pub fn difference(&self, other: &State) -> State {
        self.properties
            .difference(&other.properties)
            .cloned()
            .collect()
    }

    /// Returns a new state holding the properties present in both states.
    pub fn intersection(&self, other: &State) -> State {
        self.properties
            .intersection(&other.properties)
            .cloned()
            .collect()
    }

    /// Sums the weights of every property in this state.
    ///
    /// The sum is widened to `u64`, so it cannot overflow for any state.
    pub fn total_weight(&self) -> u64 {
        self.properties
            .iter()
            .map(|property| u64::from(property.weight()))
            .sum()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<Property> for State {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl From<Property> for State {
    fn from(property: Property) -> Self {
        State::from_iter([property])
    }
}

impl IntoIterator for State {
    type Item = Property;
    type IntoIter = btree_set::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Property;
    type IntoIter = btree_set::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Formats the state as `{a, b, c}`.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", property)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(names: &[&str]) -> State {
        names.iter().map(|n| Property::new(*n)).collect()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = State::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn test_duplicates_collapse() {
        let state = State::from_iter([
            Property::weighted("a", 1),
            Property::weighted("a", 4),
            Property::new("b"),
        ]);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_contains_all() {
        let current = state(&["a", "b"]);
        assert!(current.contains_all(&state(&["a"])));
        assert!(current.contains_all(&state(&["a", "b"])));
        assert!(current.contains_all(&State::new()));
        assert!(!current.contains_all(&state(&["a", "c"])));
    }

    #[test]
    fn test_intersects() {
        let current = state(&["a", "b"]);
        assert!(current.intersects(&state(&["b", "z"])));
        assert!(!current.intersects(&state(&["y", "z"])));
        assert!(!current.intersects(&State::new()));
    }

    #[test]
    fn test_set_algebra_returns_new_states() {
        let left = state(&["a", "b"]);
        let right = state(&["b", "c"]);

        assert_eq!(left.union(&right), state(&["a", "b", "c"]));
        assert_eq!(left.difference(&right), state(&["a"]));
        assert_eq!(left.intersection(&right), state(&["b"]));
        assert_eq!(left, state(&["a", "b"]));
    }

    #[test]
    fn test_total_weight() {
        let state = State::from_iter([
            Property::weighted("a", 1),
            Property::weighted("b", 2),
            Property::weighted("c", 3),
        ]);
        assert_eq!(state.total_weight(), 6);
    }

    #[test]
    fn test_total_weight_of_max_weights() {
        let state = State::from_iter([
            Property::weighted("a", u32::MAX),
            Property::weighted("b", u32::MAX),
            Property::weighted("c", 1),
        ]);
        assert_eq!(state.total_weight(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_equal_property_sets_are_equal_states() {
        assert_eq!(state(&["b", "a"]), state(&["a", "b"]));
    }

    #[test]
    fn test_display_is_sorted() {
        assert_eq!(state(&["c", "a", "b"]).to_string(), "{a, b, c}");
        assert_eq!(State::new().to_string(), "{}");
    }

    #[test]
    fn test_default() {
        let state: State = Default::default();
        assert!(state.is_empty());
    }
}
