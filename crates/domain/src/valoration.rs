//! Valoration calculators - investment scoring for matchmaking
//!
//! Every calculator follows the same shape: a weighted linear combination of the
//! team's declared resource counts plus the summed cost of all placed units. The
//! weights are fixed per calculator instance, so different rule editions can price
//! the same resources differently. Calculators are pure: they never mutate their
//! input, and two calls without intervening mutation return the same score.

use serde::{Deserialize, Serialize};

use crate::aggregates::{AdvancementTeam, SponsorTeam};
use crate::error::DomainError;

/// Shared contract for every calculator variant.
///
/// `Team` names the team kind the variant prices; the score is a pure function of
/// the team's current composition.
pub trait TeamValorationCalculator {
    type Team;

    /// Compute the team's valoration score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingResource` if the team cannot report a resource
    /// count the formula needs. Calculators never substitute defaults.
    fn valoration(&self, team: &Self::Team) -> Result<u32, DomainError>;
}

/// Per-edition prices for the six sponsor resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValorationWeights {
    pub coaching_dice: u32,
    pub sabotage_cards: u32,
    pub special_move_cards: u32,
    pub cheerleaders: u32,
    pub wagers: u32,
    pub medi_bots: u32,
}

/// Calculator for sponsor-backed teams: weighted resources plus unit costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorTeamValoration {
    weights: ValorationWeights,
}

impl SponsorTeamValoration {
    pub fn new(weights: ValorationWeights) -> Self {
        Self { weights }
    }

    /// Returns the weight vector this calculator prices with.
    #[inline]
    pub fn weights(&self) -> &ValorationWeights {
        &self.weights
    }
}

impl TeamValorationCalculator for SponsorTeamValoration {
    type Team = SponsorTeam;

    fn valoration(&self, team: &SponsorTeam) -> Result<u32, DomainError> {
        let w = &self.weights;
        let resources = w.coaching_dice * require(team.coaching_dice(), "coaching dice")?
            + w.sabotage_cards * require(team.sabotage_cards(), "sabotage cards")?
            + w.special_move_cards * require(team.special_move_cards(), "special move cards")?
            + w.cheerleaders * require(team.cheerleaders(), "cheerleaders")?
            + w.wagers * require(team.wagers(), "wagers")?
            + w.medi_bots * require(team.medi_bots(), "medi-bots")?;
        Ok(resources + team.players().total_unit_cost())
    }
}

/// Calculator for plain advancement rosters
///
/// An advancement roster declares no priced resources, so its score is the degenerate
/// form of the shared pattern: the summed cost of all placed units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancementTeamValoration;

impl AdvancementTeamValoration {
    pub fn new() -> Self {
        Self
    }
}

impl TeamValorationCalculator for AdvancementTeamValoration {
    type Team = AdvancementTeam;

    fn valoration(&self, team: &AdvancementTeam) -> Result<u32, DomainError> {
        Ok(team.players().total_unit_cost())
    }
}

fn require(count: Option<u32>, resource: &'static str) -> Result<u32, DomainError> {
    count.ok_or(DomainError::MissingResource { resource })
}
