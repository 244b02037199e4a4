//! Sources of ground actions.
//!
//! The planning core never inspects domain semantics. It asks an
//! [`ActionGenerator`] for every ground action that is meaningful from a given
//! state and only looks at the returned actions' fact sets and weights.

use crate::{Action, State};

/// Enumerates the ground actions available from a state.
///
/// Any `Fn(&State) -> Vec<Action>` closure is a generator:
///
/// ```
/// use strips::{Action, ActionGenerator, Property, State};
///
/// let generator = |state: &State| {
///     if state.contains(&Property::new("has_key")) {
///         vec![Action::new("open_door", 1).adds(Property::new("door_open"))]
///     } else {
///         vec![]
///     }
/// };
///
/// assert!(generator.enumerate_actions(&State::new()).is_empty());
/// ```
pub trait ActionGenerator {
    fn enumerate_actions(&self, state: &State) -> Vec<Action>;
}

impl<F> ActionGenerator for F
where
    F: Fn(&State) -> Vec<Action>,
{
    fn enumerate_actions(&self, state: &State) -> Vec<Action> {
        self(state)
    }
}

/// A fixed library of ground actions, offered regardless of the state.
#[derive(Debug, Clone, Default)]
pub struct ActionLibrary {
    actions: Vec<Action>,
}

impl ActionLibrary {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl FromIterator<Action> for ActionLibrary {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ActionGenerator for ActionLibrary {
    fn enumerate_actions(&self, _state: &State) -> Vec<Action> {
        self.actions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Property;

    #[test]
    fn test_library_ignores_state() {
        let library: ActionLibrary = [Action::new("a", 1), Action::new("b", 2)]
            .into_iter()
            .collect();
        let empty = library.enumerate_actions(&State::new());
        let full = library.enumerate_actions(&State::from_iter([Property::new("x")]));
        assert_eq!(empty, full);
        assert_eq!(library.actions().len(), 2);
    }

    #[test]
    fn test_closure_generator_sees_state() {
        let generator = |state: &State| {
            state
                .iter()
                .map(|p| Action::new(format!("use {}", p), 0))
                .collect::<Vec<_>>()
        };
        let state = State::from_iter([Property::new("x"), Property::new("y")]);
        let names: Vec<_> = generator
            .enumerate_actions(&state)
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, ["use x", "use y"]);
    }
}
