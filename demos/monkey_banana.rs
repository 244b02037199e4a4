//! Solves the monkey-and-bananas puzzle and prints the plan.
//!
//! Run with `RUST_LOG=info cargo run --example monkey_banana` to see every applied
//! action, or `RUST_LOG=debug` for the full planner trace.

use std::error::Error;

use strips::domain::{agent_at_level, agent_has, element_at, Element, Level, MonkeyDomain};
use strips::{Heuristic, LogTrace, Planner, PlannerConfig, State};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let domain = MonkeyDomain::new([1, 2, 3])?;

    let initial = State::from_iter([
        element_at(Element::Box, 1),
        element_at(Element::Agent, 1),
        element_at(Element::Target, 2),
        agent_at_level(Level::Ground, 1),
    ]);
    let goal = State::from_iter([agent_has(Element::Target)]);

    println!("Initial state: {}", initial);
    println!("Goal: {}", goal);

    let heuristic = Heuristic::new(initial.clone(), domain);
    let planner = Planner::new(initial.clone(), goal.clone(), heuristic)
        .with_config(PlannerConfig::default())
        .with_trace(LogTrace);

    match planner.get_plan() {
        Ok(plan) => {
            println!("Plan with {} actions:", plan.len());
            print!("{}", plan);
            if let Some(last) = plan.simulate(&initial) {
                println!("Final state: {}", last);
            }
        }
        Err(e) => eprintln!("Planning failed: {}", e),
    }

    Ok(())
}
