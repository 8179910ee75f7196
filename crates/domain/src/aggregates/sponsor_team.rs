//! SponsorTeam aggregate - a sponsor-backed match-day team
//!
//! Beyond its player slots, a sponsor team declares six priced resources: coaching
//! dice, sabotage cards, special-move cards, cheerleaders, wagers, and medi-bots.
//! A count starts *undeclared* and is set through builder methods or setters; the
//! bound calculator treats an undeclared count as a state rejection rather than
//! pricing a default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregates::PlayerSlots;
use crate::entities::{Sponsor, Unit};
use crate::error::DomainError;
use crate::events::RosterUpdate;
use crate::ids::RosterId;
use crate::valoration::{SponsorTeamValoration, TeamValorationCalculator};

/// The six sponsor resources; `None` means the team has not declared that count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ResourceLedger {
    coaching_dice: Option<u32>,
    sabotage_cards: Option<u32>,
    special_move_cards: Option<u32>,
    cheerleaders: Option<u32>,
    wagers: Option<u32>,
    medi_bots: Option<u32>,
}

/// A sponsor-backed team: resources plus player slots, scored by a bound calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorTeam {
    id: RosterId,
    /// Owning backer; shared descriptor, never reassigned
    sponsor: Sponsor,
    /// Scoring rule bound for this team's lifetime
    calculator: SponsorTeamValoration,
    resources: ResourceLedger,
    players: PlayerSlots,
    created_at: DateTime<Utc>,
}

impl SponsorTeam {
    /// Create a team with no placed units and every resource count undeclared.
    ///
    /// The clock is injected: pass `Utc::now()` at the call site.
    pub fn new(sponsor: Sponsor, calculator: SponsorTeamValoration, now: DateTime<Utc>) -> Self {
        Self {
            id: RosterId::new(),
            sponsor,
            calculator,
            resources: ResourceLedger::default(),
            players: PlayerSlots::new(),
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the team's unique identifier.
    #[inline]
    pub fn id(&self) -> RosterId {
        self.id
    }

    /// Returns the owning sponsor.
    #[inline]
    pub fn sponsor(&self) -> &Sponsor {
        &self.sponsor
    }

    /// Returns the bound calculator.
    #[inline]
    pub fn calculator(&self) -> &SponsorTeamValoration {
        &self.calculator
    }

    /// Read-only view of the slot map.
    #[inline]
    pub fn players(&self) -> &PlayerSlots {
        &self.players
    }

    /// When the team was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Declared coaching dice count, if any.
    #[inline]
    pub fn coaching_dice(&self) -> Option<u32> {
        self.resources.coaching_dice
    }

    /// Declared sabotage card count, if any.
    #[inline]
    pub fn sabotage_cards(&self) -> Option<u32> {
        self.resources.sabotage_cards
    }

    /// Declared special-move card count, if any.
    #[inline]
    pub fn special_move_cards(&self) -> Option<u32> {
        self.resources.special_move_cards
    }

    /// Declared cheerleader count, if any.
    #[inline]
    pub fn cheerleaders(&self) -> Option<u32> {
        self.resources.cheerleaders
    }

    /// Declared wager count, if any.
    #[inline]
    pub fn wagers(&self) -> Option<u32> {
        self.resources.wagers
    }

    /// Declared medi-bot count, if any.
    #[inline]
    pub fn medi_bots(&self) -> Option<u32> {
        self.resources.medi_bots
    }

    // =========================================================================
    // Builder Methods (for declaring resources)
    // =========================================================================

    /// Declare the coaching dice count.
    pub fn with_coaching_dice(mut self, count: u32) -> Self {
        self.resources.coaching_dice = Some(count);
        self
    }

    /// Declare the sabotage card count.
    pub fn with_sabotage_cards(mut self, count: u32) -> Self {
        self.resources.sabotage_cards = Some(count);
        self
    }

    /// Declare the special-move card count.
    pub fn with_special_move_cards(mut self, count: u32) -> Self {
        self.resources.special_move_cards = Some(count);
        self
    }

    /// Declare the cheerleader count.
    pub fn with_cheerleaders(mut self, count: u32) -> Self {
        self.resources.cheerleaders = Some(count);
        self
    }

    /// Declare the wager count.
    pub fn with_wagers(mut self, count: u32) -> Self {
        self.resources.wagers = Some(count);
        self
    }

    /// Declare the medi-bot count.
    pub fn with_medi_bots(mut self, count: u32) -> Self {
        self.resources.medi_bots = Some(count);
        self
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Place `unit` at `position`; same contract as the advancement roster.
    ///
    /// # Errors
    ///
    /// - `DomainError::NegativePosition` if `position < 0`
    /// - `DomainError::PositionOccupied` if the slot already holds a unit
    pub fn add_player(&mut self, unit: Unit, position: i32) -> Result<RosterUpdate, DomainError> {
        let index = self.players.place(unit, position)?;
        Ok(RosterUpdate::PlayerAdded { position: index })
    }

    /// Remove the unit at `position`; an empty slot is a no-op returning `None`.
    pub fn remove_player(&mut self, position: i32) -> Option<RosterUpdate> {
        self.players
            .clear(position)
            .map(|(index, unit)| RosterUpdate::PlayerRemoved {
                position: index,
                unit,
            })
    }

    /// Score the team's current composition with the bound calculator.
    pub fn valoration(&self) -> Result<u32, DomainError> {
        self.calculator.valoration(self)
    }
}
