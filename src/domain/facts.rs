//! Facts of the monkey-and-bananas world.
//!
//! Weights follow the cost of getting a fact back once lost: the box is the
//! hardest thing to move, then the agent, then the target.

use crate::Property;
use std::fmt;

/// Objects that can occupy a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Agent,
    Box,
    Target,
}

impl Element {
    /// Weight of the fact placing this element somewhere.
    pub fn position_weight(self) -> u32 {
        match self {
            Element::Target => 1,
            Element::Agent => 2,
            Element::Box => 3,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Agent => "agent",
            Element::Box => "box",
            Element::Target => "target",
        };
        write!(f, "{}", name)
    }
}

/// Vertical level of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Ground,
    Top,
}

impl Level {
    pub fn opposite(self) -> Level {
        match self {
            Level::Ground => Level::Top,
            Level::Top => Level::Ground,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Ground => write!(f, "ground"),
            Level::Top => write!(f, "top"),
        }
    }
}

/// `element` is at horizontal `position`.
pub fn element_at(element: Element, position: usize) -> Property {
    Property::weighted(
        format!("{} at {}", element, position),
        element.position_weight(),
    )
}

/// The agent is at `level`.
///
/// Being on the ground is the same fact wherever the agent stands, so `position`
/// is only part of the fact's identity for [`Level::Top`].
pub fn agent_at_level(level: Level, position: usize) -> Property {
    match level {
        Level::Ground => Property::new("agent on ground"),
        Level::Top => Property::new(format!("agent on top at {}", position)),
    }
}

/// The agent holds `element`.
pub fn agent_has(element: Element) -> Property {
    Property::new(format!("agent has {}", element))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_weights() {
        assert_eq!(element_at(Element::Target, 1).weight(), 1);
        assert_eq!(element_at(Element::Agent, 1).weight(), 2);
        assert_eq!(element_at(Element::Box, 1).weight(), 3);
    }

    #[test]
    fn test_ground_ignores_position() {
        assert_eq!(
            agent_at_level(Level::Ground, 1),
            agent_at_level(Level::Ground, 3)
        );
        assert_ne!(agent_at_level(Level::Top, 1), agent_at_level(Level::Top, 3));
        assert_eq!(agent_at_level(Level::Top, 2).weight(), 0);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(element_at(Element::Box, 2).description(), "box at 2");
        assert_eq!(agent_at_level(Level::Top, 2).description(), "agent on top at 2");
        assert_eq!(agent_has(Element::Target).description(), "agent has target");
    }

    #[test]
    fn test_opposite_level() {
        assert_eq!(Level::Ground.opposite(), Level::Top);
        assert_eq!(Level::Top.opposite(), Level::Ground);
    }
}
