//! GravBall domain model: sponsors, team types, component-built units, positional
//! rosters, and the valoration scoring used for matchmaking.
//!
//! Everything here is pure in-memory, single-threaded domain logic. Entities are
//! immutable after construction; rosters are single-owner mutable containers; every
//! failure is a synchronous [`DomainError`] returned to the caller with prior state
//! intact.

extern crate self as gravball_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod valoration;
pub mod value_objects;

// Re-export aggregates
pub use aggregates::{AdvancementTeam, PlayerSlots, SponsorTeam};

// Re-export entities
pub use entities::{Sponsor, TeamType, Unit, UnitComponent};

pub use error::DomainError;
pub use events::RosterUpdate;

// Re-export ID types
pub use ids::{RosterId, SponsorId, TeamTypeId, UnitId};

// Re-export calculators
pub use valoration::{
    AdvancementTeamValoration, SponsorTeamValoration, TeamValorationCalculator, ValorationWeights,
};

// Re-export value objects
pub use value_objects::{
    Ability, AffinityGroup, AttributeBundle, ComponentLocation, ComponentName, DistinctSeq,
    SponsorName, TeamPosition, TeamRule, TeamTypeName, UnitName,
};
