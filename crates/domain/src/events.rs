//! Update events returned from aggregate mutations
//!
//! Roster mutations report what changed as a structured value, so callers building
//! editors or audit logs on top of the model get their trail without re-deriving it
//! from before/after snapshots.

use serde::{Deserialize, Serialize};

use crate::entities::Unit;

/// What a roster mutation did
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RosterUpdate {
    /// A unit was placed at a previously empty slot
    PlayerAdded { position: u32 },
    /// A unit was removed from a slot; carries the evicted unit
    PlayerRemoved { position: u32, unit: Unit },
}

impl RosterUpdate {
    /// The slot the update concerns.
    pub fn position(&self) -> u32 {
        match self {
            Self::PlayerAdded { position } => *position,
            Self::PlayerRemoved { position, .. } => *position,
        }
    }
}
