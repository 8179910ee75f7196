//! Entities - domain objects with identity and construction-time invariants

pub mod sponsor;
pub mod team_type;
pub mod unit;
pub mod unit_component;

pub use sponsor::Sponsor;
pub use team_type::TeamType;
pub use unit::Unit;
pub use unit_component::UnitComponent;
