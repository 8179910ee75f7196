//! AttributeBundle - stat payload carried by a component
//!
//! # Simple Data Struct
//!
//! This is a data-carrying struct with no invariants to protect. All fields are public
//! because there's no invalid state that can be constructed - any combination of values
//! is valid. The composition engine stores it untouched; only the match engine (out of
//! scope here) interprets the numbers.

use serde::{Deserialize, Serialize};

/// Stat payload contributed by a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBundle {
    pub speed: u8,
    pub strength: u8,
    pub armour: u8,
    pub skill: u8,
}

impl AttributeBundle {
    pub fn new(speed: u8, strength: u8, armour: u8, skill: u8) -> Self {
        Self {
            speed,
            strength,
            armour,
            skill,
        }
    }
}
