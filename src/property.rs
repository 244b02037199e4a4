//! # Property Module
//!
//! A [`Property`] is an atomic, named fact that either holds in a world state or
//! does not. Its description doubles as its identity: two properties with the same
//! description are the same fact, whatever weight they were built with.
//!
//! ```
//! use strips::Property;
//!
//! let on_ground = Property::weighted("agent on ground", 0);
//! let same_fact = Property::weighted("agent on ground", 7);
//! assert_eq!(on_ground, same_fact);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An atomic fact with a static, non-negative weight.
///
/// The weight plays no part in equality, hashing or ordering. It is only read by
/// the heuristic, both to score regressed states and to order sub-goals.
#[derive(Debug, Clone)]
pub struct Property {
    description: String,
    weight: u32,
}

impl Property {
    /// Creates a property with weight `0`.
    pub fn new(description: impl Into<String>) -> Self {
        Self::weighted(description, 0)
    }

    /// Creates a property with an explicit weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use strips::Property;
    ///
    /// let box_at_1 = Property::weighted("box at 1", 3);
    /// assert_eq!(box_at_1.description(), "box at 1");
    /// assert_eq!(box_at_1.weight(), 3);
    /// ```
    pub fn weighted(description: impl Into<String>, weight: u32) -> Self {
        Self {
            description: description.into(),
            weight,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
    }
}

impl PartialOrd for Property {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Property {
    fn cmp(&self, other: &Self) -> Ordering {
        self.description.cmp(&other.description)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
