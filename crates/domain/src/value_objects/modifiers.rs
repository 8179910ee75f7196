//! Named modifier value objects: team rules, affinity groups, abilities
//!
//! These are catalog entries compared by value - the same rule listed twice in an
//! input sequence is one rule. They carry no invariants beyond their data, so fields
//! are public; any combination of values is a valid modifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A faction-level rule attached to a team type (e.g., "Keeper Increase")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRule {
    pub name: String,
    /// Rule-book effect text, if any
    pub effect: Option<String>,
}

impl TeamRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }
}

impl fmt::Display for TeamRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A named affinity attached to a sponsor (e.g., "Alpha Simians")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffinityGroup {
    pub name: String,
}

impl AffinityGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for AffinityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A special ability a component grants its unit (e.g., "Grappling Claw")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    /// Rule-book effect text, if any
    pub effect: Option<String>,
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_compare_by_value() {
        assert_eq!(TeamRule::new("Keeper Increase"), TeamRule::new("Keeper Increase"));
        assert_ne!(
            Ability::new("Grappling Claw"),
            Ability::new("Grappling Claw").with_effect("Reroll grab tests")
        );
        assert_eq!(AffinityGroup::new("Alpha Simians"), AffinityGroup::new("Alpha Simians"));
    }
}
