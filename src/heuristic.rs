//! # Heuristic Module
//!
//! The heuristic decides which action the planner should try for an unmet fact.
//!
//! For a target fact it:
//! 1. asks the [`ActionGenerator`] for every ground action meaningful in the current state
//! 2. keeps the actions whose add set asserts the target (first occurrence per name)
//! 3. ranks them, best first, by the *regression weight* and then by the action's own weight
//!
//! The regression weight of an action is computed by regressing the action against
//! the target, intersecting the resulting pseudo-predecessor with the initial state,
//! and summing the weights of the shared facts. Actions whose prerequisites already
//! look like the start of the problem score higher.

use crate::action::Direction;
use crate::{Action, ActionGenerator, Property, State};
use std::cmp::Reverse;
use std::collections::HashSet;

/// Ranks candidate actions by their estimated distance to the initial state.
///
/// The heuristic keeps no state besides the problem's initial state and its
/// action generator, so repeated calls with the same inputs give the same ordering.
///
/// # Examples
///
/// ```
/// use strips::{Action, ActionLibrary, Heuristic, Property, State};
///
/// let start = Property::weighted("start", 5);
/// let goal = Property::new("goal");
///
/// let from_start = Action::new("from_start", 1).requires(start.clone()).adds(goal.clone());
/// let from_nowhere = Action::new("from_nowhere", 9)
///     .requires(Property::new("elsewhere"))
///     .adds(goal.clone());
///
/// let initial = State::from_iter([start]);
/// let heuristic = Heuristic::new(initial.clone(), ActionLibrary::new(vec![from_nowhere, from_start]));
///
/// let ranked = heuristic.choose_actions(&initial, &State::from(goal));
/// assert_eq!(ranked[0].name(), "from_start");
/// ```
#[derive(Debug, Clone)]
pub struct Heuristic<G> {
    initial_state: State,
    generator: G,
}

impl<G: ActionGenerator> Heuristic<G> {
    /// Binds a heuristic to the initial state of a problem.
    pub fn new(initial_state: State, generator: G) -> Self {
        Self {
            initial_state,
            generator,
        }
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Returns the actions that could assert a fact of `goal`, best first.
    ///
    /// Candidates are sorted in descending order of
    /// `(regression_weight, action weight)`. The sort is stable, so candidates tied
    /// on both keys keep the order in which the generator produced them.
    ///
    /// An empty result means no action can produce the goal.
    pub fn choose_actions(&self, state: &State, goal: &State) -> Vec<Action> {
        let mut seen = HashSet::new();
        let mut scored: Vec<_> = self
            .generator
            .enumerate_actions(state)
            .into_iter()
            .filter(|action| action.asserts_any(goal))
            .filter(|action| seen.insert(action.name().to_owned()))
            .map(|action| ((self.regression_weight(&action, goal), action.weight()), action))
            .collect();

        scored.sort_by_key(|(score, _)| Reverse(*score));
        scored.into_iter().map(|(_, action)| action).collect()
    }

    /// Weight of the facts shared by the initial state and the state obtained by
    /// regressing `action` against `target`. Zero when the action cannot be regressed.
    pub fn regression_weight(&self, action: &Action, target: &State) -> u64 {
        action
            .apply(target, Direction::Reverse)
            .map(|previous| previous.intersection(&self.initial_state).total_weight())
            .unwrap_or(0)
    }
}

/// Orders properties by ascending weight.
///
/// Used to queue an action's preconditions so that the lightest facts are
/// attempted first. Equal weights keep the state's lexicographic order.
pub fn sort_properties(properties: &State) -> Vec<Property> {
    let mut sorted: Vec<Property> = properties.iter().cloned().collect();
    sorted.sort_by_key(Property::weight);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionLibrary;
    use std::cell::Cell;

    fn p(name: &str, weight: u32) -> Property {
        Property::weighted(name, weight)
    }

    fn names(actions: &[Action]) -> Vec<&str> {
        actions.iter().map(Action::name).collect()
    }

    #[test]
    fn test_filters_actions_that_cannot_assert_goal() {
        let goal = p("goal", 0);
        let useful = Action::new("useful", 1).adds(goal.clone());
        let useless = Action::new("useless", 5).adds(p("other", 0));
        let heuristic = Heuristic::new(State::new(), ActionLibrary::new(vec![useless, useful]));

        let ranked = heuristic.choose_actions(&State::new(), &State::from(goal));
        assert_eq!(names(&ranked), ["useful"]);
    }

    #[test]
    fn test_deduplicates_by_name() {
        let goal = p("goal", 0);
        let first = Action::new("twin", 1).adds(goal.clone());
        let second = Action::new("twin", 7).adds(goal.clone());
        let heuristic = Heuristic::new(State::new(), ActionLibrary::new(vec![first, second]));

        let ranked = heuristic.choose_actions(&State::new(), &State::from(goal));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].weight(), 1);
    }

    #[test]
    fn test_ranks_by_regression_weight_first() {
        let goal = p("goal", 0);
        let initial = State::from_iter([p("near", 3), p("far", 1)]);

        let near = Action::new("near", 1).requires(p("near", 3)).adds(goal.clone());
        let far = Action::new("far", 10).requires(p("far", 1)).adds(goal.clone());
        let unknown = Action::new("unknown", 50).requires(p("missing", 9)).adds(goal.clone());
        let heuristic = Heuristic::new(initial.clone(), ActionLibrary::new(vec![unknown, far, near]));

        let ranked = heuristic.choose_actions(&initial, &State::from(goal));
        assert_eq!(names(&ranked), ["near", "far", "unknown"]);
    }

    #[test]
    fn test_action_weight_breaks_ties() {
        let goal = p("goal", 0);
        let light = Action::new("light", 1).adds(goal.clone());
        let heavy = Action::new("heavy", 4).adds(goal.clone());
        let heuristic = Heuristic::new(State::new(), ActionLibrary::new(vec![light, heavy]));

        let ranked = heuristic.choose_actions(&State::new(), &State::from(goal));
        assert_eq!(names(&ranked), ["heavy", "light"]);
    }

    #[test]
    fn test_full_ties_keep_generator_order() {
        let goal = p("goal", 0);
        let actions = vec![
            Action::new("b", 1).adds(goal.clone()),
            Action::new("a", 1).adds(goal.clone()),
            Action::new("c", 1).adds(goal.clone()),
        ];
        let heuristic = Heuristic::new(State::new(), ActionLibrary::new(actions));

        let ranked = heuristic.choose_actions(&State::new(), &State::from(goal));
        assert_eq!(names(&ranked), ["b", "a", "c"]);
    }

    #[test]
    fn test_regression_weight() {
        let initial = State::from_iter([p("pre", 2), p("gone", 5), p("unused", 100)]);
        let action = Action::new("act", 1)
            .requires(p("pre", 2))
            .adds(p("goal", 0))
            .deletes(p("gone", 5));
        let heuristic = Heuristic::new(initial, ActionLibrary::default());

        assert_eq!(heuristic.regression_weight(&action, &State::from(p("goal", 0))), 7);
        assert_eq!(heuristic.regression_weight(&action, &State::from(p("nope", 0))), 0);
    }

    #[test]
    fn test_ranks_heavy_preconditions_without_overflow() {
        let goal = p("goal", 0);
        let huge = [p("huge_a", u32::MAX), p("huge_b", u32::MAX)];
        let initial = State::from_iter(huge.iter().cloned().chain([p("small", 7)]));

        let both_huge = Action::new("both_huge", 1)
            .with_precondition(huge.iter().cloned())
            .adds(goal.clone());
        let one_huge = Action::new("one_huge", 1)
            .requires(huge[0].clone())
            .adds(goal.clone());
        let small = Action::new("small", 9).requires(p("small", 7)).adds(goal.clone());
        let heuristic = Heuristic::new(
            initial.clone(),
            ActionLibrary::new(vec![small, one_huge, both_huge.clone()]),
        );

        assert_eq!(
            heuristic.regression_weight(&both_huge, &State::from(goal.clone())),
            2 * u64::from(u32::MAX)
        );
        let ranked = heuristic.choose_actions(&initial, &State::from(goal));
        assert_eq!(names(&ranked), ["both_huge", "one_huge", "small"]);
    }

    #[test]
    fn test_choose_actions_is_deterministic() {
        let goal = p("goal", 0);
        let initial = State::from_iter([p("x", 1), p("y", 1)]);
        let actions: Vec<_> = (0..8)
            .map(|i| {
                Action::new(format!("act{}", i), i % 3)
                    .requires(if i % 2 == 0 { p("x", 1) } else { p("y", 1) })
                    .adds(goal.clone())
            })
            .collect();
        let heuristic = Heuristic::new(initial.clone(), ActionLibrary::new(actions));

        let first = heuristic.choose_actions(&initial, &State::from(goal.clone()));
        for _ in 0..5 {
            let again = heuristic.choose_actions(&initial, &State::from(goal.clone()));
            assert_eq!(names(&first), names(&again));
        }
    }

    #[test]
    fn test_generator_receives_current_state() {
        let calls = Cell::new(0);
        let generator = |state: &State| {
            calls.set(calls.get() + 1);
            assert!(state.contains(&p("current", 0)));
            Vec::<Action>::new()
        };
        let heuristic = Heuristic::new(State::new(), generator);

        let ranked = heuristic.choose_actions(&State::from(p("current", 0)), &State::from(p("goal", 0)));
        assert!(ranked.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_sort_properties_ascending() {
        let properties = State::from_iter([p("heavy", 3), p("light", 0), p("mid", 2), p("also_light", 0)]);
        let sorted = sort_properties(&properties);
        let names: Vec<_> = sorted.iter().map(Property::description).collect();
        assert_eq!(names, ["also_light", "light", "mid", "heavy"]);
    }
}
