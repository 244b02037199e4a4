//! # Planner Module
//!
//! The planner is the backward-chaining search loop of the STRIPS system. It is
//! responsible for:
//! - Resolving unmet goal facts into sub-goals and actions
//! - Applying queued actions to the evolving world state
//! - Assembling the final [`Plan`]
//!
//! ## Overview
//!
//! The planner keeps a *worklist* of targets, each one either a fact to make true
//! or an action waiting to be applied. Starting from the goal facts it repeatedly
//! takes the front target:
//!
//! 1. An action is applied to the current state if its precondition holds, and
//!    silently dropped otherwise.
//! 2. A fact that already holds is skipped.
//! 3. Any other fact is handed to the [`Heuristic`]; the best candidate action is
//!    pushed to the front of the worklist, preceded by its own precondition facts
//!    ordered by ascending weight.
//!
//! Planning fails as soon as a fact has no candidate action at all.
//!
//! ## Known limitations
//!
//! The planner is not guaranteed to terminate and does not detect cycles: a domain
//! with circular prerequisite chains can keep it looping. Once the iteration count
//! passes the efficiency limit the heuristic ranking is replaced by a random
//! ordering, which reduces that risk without removing it. An action queued early
//! can also become inapplicable because of intervening work; it is then discarded
//! and never retried, so the returned plan is not guaranteed to reach the goal.
//! [`PlannerConfig::with_max_iterations`] bounds a run when that matters.
//!
//! ## Basic Usage
//!
//! ```
//! use strips::{Action, ActionLibrary, Heuristic, Planner, Property, State};
//!
//! let has_money = Property::weighted("has_money", 1);
//! let has_ingredients = Property::weighted("has_ingredients", 2);
//! let has_meal = Property::new("has_meal");
//!
//! let buy = Action::new("get_ingredients", 1)
//!     .requires(has_money.clone())
//!     .adds(has_ingredients.clone());
//! let cook = Action::new("cook_meal", 2)
//!     .requires(has_ingredients.clone())
//!     .adds(has_meal.clone());
//!
//! let initial = State::from_iter([has_money]);
//! let goal = State::from_iter([has_meal]);
//!
//! let heuristic = Heuristic::new(initial.clone(), ActionLibrary::new(vec![cook, buy]));
//! let planner = Planner::new(initial, goal, heuristic);
//!
//! let plan = planner.get_plan().unwrap();
//! assert_eq!(plan.names(), ["get_ingredients", "cook_meal"]);
//! ```

use crate::action::Direction;
use crate::heuristic::sort_properties;
use crate::trace::{ApplyTrace, NoTrace};
use crate::{Action, ActionGenerator, Heuristic, Property, Result, State, StripsError};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::fmt;

/// Iteration count after which candidate actions are shuffled.
pub const DEFAULT_EFFICIENCY_LIMIT: usize = 10;

/// An entry of the planner's worklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A fact that must hold.
    Fact(Property),
    /// An action waiting for its precondition to be resolved.
    Action(Action),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Fact(property) => write!(f, "fact `{}`", property),
            Target::Action(action) => write!(f, "action `{}`", action),
        }
    }
}

/// Tuning knobs of a planning run.
///
/// # Examples
///
/// ```
/// use strips::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_efficiency_limit(25)
///     .with_seed(7);
///
/// assert_eq!(config.efficiency_limit, 25);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.max_iterations, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Once the iteration counter exceeds this value, candidates are shuffled
    /// instead of taken in heuristic order.
    pub efficiency_limit: usize,
    /// Seed for the shuffle. `None` seeds from entropy on every run.
    pub seed: Option<u64>,
    /// Fails the run with [`StripsError::SearchExhausted`] past this many iterations.
    /// `None` never stops the search.
    pub max_iterations: Option<usize>,
}

impl PlannerConfig {
    pub fn with_efficiency_limit(mut self, efficiency_limit: usize) -> Self {
        self.efficiency_limit = efficiency_limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            efficiency_limit: DEFAULT_EFFICIENCY_LIMIT,
            seed: None,
            max_iterations: None,
        }
    }
}

/// Candidate ordering of one planning run once it passes the efficiency limit.
///
/// Up to the limit candidates keep the heuristic order. Past it they are
/// shuffled, and a warning is logged the first time only.
#[derive(Debug)]
struct Fallback {
    limit: usize,
    rng: SmallRng,
    warnings: usize,
}

impl Fallback {
    fn new(config: &PlannerConfig) -> Self {
        Self {
            limit: config.efficiency_limit,
            rng: config.rng(),
            warnings: 0,
        }
    }

    fn arrange(&mut self, iteration: usize, candidates: &mut [Action]) {
        if iteration <= self.limit {
            return;
        }
        if self.warnings == 0 {
            log::warn!(
                "Heuristic is not finding efficient solutions; shuffling candidates after {} iterations",
                self.limit
            );
            self.warnings += 1;
        }
        candidates.shuffle(&mut self.rng);
    }
}

/// The ordered sequence of actions produced by a successful planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    actions: Vec<Action>,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(Action::name).collect()
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// Replays the plan forward from `initial`.
    ///
    /// Returns the final state, or `None` if some step is not applicable when its
    /// turn comes.
    pub fn simulate(&self, initial: &State) -> Option<State> {
        self.actions
            .iter()
            .try_fold(initial.clone(), |state, action| {
                action.apply(&state, Direction::Forward)
            })
    }

    /// Checks that replaying the plan from `initial` ends in a state satisfying `goal`.
    pub fn achieves(&self, initial: &State, goal: &State) -> bool {
        self.simulate(initial)
            .is_some_and(|last| last.contains_all(goal))
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// One numbered step per line.
impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, action) in self.actions.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, action)?;
        }
        Ok(())
    }
}

/// Backward-chaining STRIPS planner for one problem.
///
/// A planner is bound to a single initial/goal pair. Every call to
/// [`get_plan`](Self::get_plan) runs an independent search with its own worklist,
/// world state and random generator.
pub struct Planner<G> {
    initial_state: State,
    goal: State,
    heuristic: Heuristic<G>,
    config: PlannerConfig,
    trace: Box<dyn ApplyTrace + Send + Sync>,
}

impl<G: ActionGenerator> Planner<G> {
    /// Creates a planner with the default configuration and no tracing.
    ///
    /// # Arguments
    ///
    /// * `initial_state` - The world state the plan starts from
    /// * `goal` - The facts the plan must make true
    /// * `heuristic` - Candidate ranking, bound to the same initial state
    pub fn new(initial_state: State, goal: State, heuristic: Heuristic<G>) -> Self {
        Self {
            initial_state,
            goal,
            heuristic,
            config: PlannerConfig::default(),
            trace: Box::new(NoTrace),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Attaches a trace notified of every action the planner commits.
    pub fn with_trace(mut self, trace: impl ApplyTrace + Send + Sync + 'static) -> Self {
        self.trace = Box::new(trace);
        self
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    pub fn heuristic(&self) -> &Heuristic<G> {
        &self.heuristic
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Searches for a plan reaching the goal from the initial state.
    ///
    /// # Returns
    ///
    /// * `Ok(Plan)` - The actions actually applied, in order (empty if the goal
    ///   already holds)
    /// * `Err(StripsError::NoPlanFound)` - Some fact has no action able to assert it;
    ///   no partial plan is returned
    /// * `Err(StripsError::SearchExhausted)` - Only with a configured iteration cap
    ///
    /// # Examples
    ///
    /// ```
    /// use strips::{Action, ActionLibrary, Heuristic, Planner, Property, State, StripsError};
    ///
    /// let cook = Action::new("cook_meal", 1)
    ///     .requires(Property::new("has_ingredients"))
    ///     .adds(Property::new("has_food"));
    ///
    /// // Nothing produces ingredients
    /// let initial = State::new();
    /// let goal = State::from_iter([Property::new("has_food")]);
    /// let heuristic = Heuristic::new(initial.clone(), ActionLibrary::new(vec![cook]));
    ///
    /// let result = Planner::new(initial, goal, heuristic).get_plan();
    /// assert!(matches!(result, Err(StripsError::NoPlanFound(_))));
    /// ```
    pub fn get_plan(&self) -> Result<Plan> {
        let mut fallback = Fallback::new(&self.config);
        let mut state = self.initial_state.clone();
        let mut plan = Vec::new();
        let mut targets: VecDeque<Target> = self.goal.iter().cloned().map(Target::Fact).collect();

        let mut iteration_counter = 0;

        while let Some(target) = targets.pop_front() {
            iteration_counter += 1;
            if let Some(max_iterations) = self.config.max_iterations {
                if iteration_counter > max_iterations {
                    log::info!("Giving up after {} iterations", max_iterations);
                    return Err(StripsError::SearchExhausted(max_iterations));
                }
            }
            log::debug!("Iteration {}: {}", iteration_counter, target);

            let fact = match target {
                Target::Action(action) => {
                    match action.apply_traced(&state, Direction::Forward, self.trace.as_ref()) {
                        Some(next) => {
                            state = next;
                            plan.push(action);
                        }
                        None => log::debug!("Discarding {}: precondition no longer holds", action),
                    }
                    continue;
                }
                Target::Fact(fact) => fact,
            };

            if state.contains(&fact) {
                continue;
            }

            let mut candidates = self
                .heuristic
                .choose_actions(&state, &State::from(fact.clone()));

            fallback.arrange(iteration_counter, &mut candidates);

            let Some(action) = candidates.into_iter().next() else {
                log::info!("No action asserts `{}`", fact);
                return Err(StripsError::NoPlanFound(fact.to_string()));
            };

            let precondition = sort_properties(action.precondition());
            targets.push_front(Target::Action(action));
            for property in precondition.into_iter().rev() {
                targets.push_front(Target::Fact(property));
            }
        }

        log::info!(
            "Plan found with {} actions after {} iterations",
            plan.len(),
            iteration_counter
        );
        Ok(Plan::new(plan))
    }
}
