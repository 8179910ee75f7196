//! Aggregates - mutable containers with guarded state transitions

pub mod advancement_team;
pub mod slots;
pub mod sponsor_team;

pub use advancement_team::AdvancementTeam;
pub use slots::PlayerSlots;
pub use sponsor_team::SponsorTeam;
