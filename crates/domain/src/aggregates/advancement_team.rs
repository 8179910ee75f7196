//! AdvancementTeam aggregate - a roster built up over a league season
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the slot map is only reachable through guarded operations
//! - **Valid by construction**: `new()` takes pre-validated types
//! - **Fixed bindings**: the team type and calculator are bound at construction and
//!   never reassigned
//!
//! # Invariants
//!
//! - A slot, once occupied, is never silently overwritten: placing at an occupied
//!   position is rejected and leaves the roster unchanged
//! - Slot indices are non-negative
//! - Removing from an empty slot is a no-op, not an error

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregates::PlayerSlots;
use crate::entities::{TeamType, Unit};
use crate::error::DomainError;
use crate::events::RosterUpdate;
use crate::ids::RosterId;
use crate::valoration::{AdvancementTeamValoration, TeamValorationCalculator};

/// A mutable roster: numbered board slots filled with units over time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancementTeam {
    id: RosterId,
    /// Faction rule set; shared descriptor, never reassigned
    team_type: TeamType,
    /// Scoring rule bound for this roster's lifetime
    calculator: AdvancementTeamValoration,
    players: PlayerSlots,
    created_at: DateTime<Utc>,
}

impl AdvancementTeam {
    /// Create an empty roster bound to a team type and a calculator.
    ///
    /// The clock is injected: pass `Utc::now()` at the call site.
    pub fn new(
        team_type: TeamType,
        calculator: AdvancementTeamValoration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RosterId::new(),
            team_type,
            calculator,
            players: PlayerSlots::new(),
            created_at: now,
        }
    }

    /// Returns the roster's unique identifier.
    #[inline]
    pub fn id(&self) -> RosterId {
        self.id
    }

    /// Returns the bound faction rule set.
    #[inline]
    pub fn team_type(&self) -> &TeamType {
        &self.team_type
    }

    /// Returns the bound calculator.
    #[inline]
    pub fn calculator(&self) -> &AdvancementTeamValoration {
        &self.calculator
    }

    /// Read-only view of the slot map; roster mutation is never observable
    /// through a previously returned view.
    #[inline]
    pub fn players(&self) -> &PlayerSlots {
        &self.players
    }

    /// When the roster was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Place `unit` at `position`.
    ///
    /// # Errors
    ///
    /// - `DomainError::NegativePosition` if `position < 0`
    /// - `DomainError::PositionOccupied` if the slot already holds a unit
    ///
    /// A rejected call leaves the roster unchanged.
    pub fn add_player(&mut self, unit: Unit, position: i32) -> Result<RosterUpdate, DomainError> {
        let index = self.players.place(unit, position)?;
        Ok(RosterUpdate::PlayerAdded { position: index })
    }

    /// Remove the unit at `position`, if any.
    ///
    /// Removing from an empty slot is a no-op returning `None`.
    pub fn remove_player(&mut self, position: i32) -> Option<RosterUpdate> {
        self.players
            .clear(position)
            .map(|(index, unit)| RosterUpdate::PlayerRemoved {
                position: index,
                unit,
            })
    }

    /// Score the roster's current composition with the bound calculator.
    pub fn valoration(&self) -> Result<u32, DomainError> {
        self.calculator.valoration(self)
    }
}
