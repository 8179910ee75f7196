//! Board role and component placement enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The role a unit can fill on the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamPosition {
    Striker,
    Jack,
    Guard,
    Keeper,
}

impl fmt::Display for TeamPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Striker => write!(f, "Striker"),
            Self::Jack => write!(f, "Jack"),
            Self::Guard => write!(f, "Guard"),
            Self::Keeper => write!(f, "Keeper"),
        }
    }
}

impl FromStr for TeamPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Striker" => Ok(Self::Striker),
            "Jack" => Ok(Self::Jack),
            "Guard" => Ok(Self::Guard),
            "Keeper" => Ok(Self::Keeper),
            _ => Err(DomainError::validation(format!(
                "Unknown team position: {}",
                s
            ))),
        }
    }
}

/// Where on the chassis a component mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentLocation {
    Head,
    Torso,
    Arms,
    Legs,
}

impl fmt::Display for ComponentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => write!(f, "Head"),
            Self::Torso => write!(f, "Torso"),
            Self::Arms => write!(f, "Arms"),
            Self::Legs => write!(f, "Legs"),
        }
    }
}

impl FromStr for ComponentLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Head" => Ok(Self::Head),
            "Torso" => Ok(Self::Torso),
            "Arms" => Ok(Self::Arms),
            "Legs" => Ok(Self::Legs),
            _ => Err(DomainError::validation(format!(
                "Unknown component location: {}",
                s
            ))),
        }
    }
}
