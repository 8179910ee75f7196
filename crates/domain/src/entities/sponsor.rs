//! Sponsor entity - the owning backer of a team
//!
//! A sponsor has a budget and a set of affinity groups. The budget is an independent
//! input with no computed relationship to the groups.

use serde::{Deserialize, Serialize};

use crate::ids::SponsorId;
use crate::value_objects::{AffinityGroup, DistinctSeq, SponsorName};

/// A team's owning backer: name, budget, deduplicated affinity groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sponsor {
    id: SponsorId,
    name: SponsorName,
    /// Credits available to the sponsor; independent of the affinity groups
    budget: u32,
    affinity_groups: DistinctSeq<AffinityGroup>,
}

impl Sponsor {
    /// Create a new sponsor. Duplicate affinity groups in the input collapse silently.
    pub fn new(
        name: SponsorName,
        budget: u32,
        affinity_groups: impl IntoIterator<Item = AffinityGroup>,
    ) -> Self {
        Self {
            id: SponsorId::new(),
            name,
            budget,
            affinity_groups: DistinctSeq::from_sequence(affinity_groups),
        }
    }

    /// Returns the sponsor's unique identifier.
    #[inline]
    pub fn id(&self) -> SponsorId {
        self.id
    }

    /// Returns the sponsor's name.
    #[inline]
    pub fn name(&self) -> &SponsorName {
        &self.name
    }

    /// Returns the sponsor's budget in credits.
    #[inline]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Returns the deduplicated affinity groups.
    #[inline]
    pub fn affinity_groups(&self) -> &DistinctSeq<AffinityGroup> {
        &self.affinity_groups
    }
}
