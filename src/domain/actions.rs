//! Ground actions of the monkey-and-bananas world.

use super::facts::{agent_at_level, agent_has, element_at, Element, Level};
use crate::Action;

/// Moves `element` on its own from one position to another.
///
/// The agent can only walk while on the ground.
pub fn move_element(element: Element, from: usize, to: usize) -> Action {
    let action = Action::new(format!("move {} from {} to {}", element, from, to), 2)
        .requires(element_at(element, from))
        .adds(element_at(element, to))
        .deletes(element_at(element, from));

    match element {
        Element::Agent => action.requires(agent_at_level(Level::Ground, from)),
        _ => action,
    }
}

/// The agent pushes the box, both ending at `to`.
pub fn push_box(from: usize, to: usize) -> Action {
    Action::new(format!("push box from {} to {}", from, to), 1)
        .with_precondition([
            element_at(Element::Box, from),
            element_at(Element::Agent, from),
            agent_at_level(Level::Ground, from),
        ])
        .with_add([element_at(Element::Box, to), element_at(Element::Agent, to)])
        .with_delete([
            element_at(Element::Box, from),
            element_at(Element::Agent, from),
        ])
}

/// The agent climbs onto, or down from, the box standing at `position`.
pub fn change_level(position: usize, to_level: Level) -> Action {
    let from_level = to_level.opposite();
    let name = match to_level {
        Level::Top => format!("agent climbs onto box at {}", position),
        Level::Ground => format!("agent climbs down from box at {}", position),
    };
    Action::new(name, 3)
        .with_precondition([
            element_at(Element::Box, position),
            element_at(Element::Agent, position),
            agent_at_level(from_level, position),
        ])
        .adds(agent_at_level(to_level, position))
        .deletes(agent_at_level(from_level, position))
}

/// Standing on the box under the target, the agent takes it.
pub fn grab_target(position: usize) -> Action {
    Action::new(format!("agent grabs target at {}", position), 4)
        .with_precondition([
            element_at(Element::Box, position),
            element_at(Element::Agent, position),
            element_at(Element::Target, position),
            agent_at_level(Level::Top, position),
        ])
        .adds(agent_has(Element::Target))
}
