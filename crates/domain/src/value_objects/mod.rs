//! Value objects - immutable domain values compared by value

pub mod attributes;
pub mod distinct;
pub mod modifiers;
pub mod names;
pub mod position;

pub use attributes::AttributeBundle;
pub use distinct::DistinctSeq;
pub use modifiers::{Ability, AffinityGroup, TeamRule};
pub use names::{ComponentName, SponsorName, TeamTypeName, UnitName};
pub use position::{ComponentLocation, TeamPosition};
