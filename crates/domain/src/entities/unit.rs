//! Unit entity - a player miniature assembled from components
//!
//! # Identity
//!
//! Units carry a `UnitId`: two units assembled from identical components are still two
//! different miniatures, and roster slots index them by that identity, never by value.
//!
//! # Invariants
//!
//! - A unit is assembled from at least one component
//! - Derived ability/position views collapse duplicates contributed by several
//!   components

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::UnitComponent;
use crate::error::DomainError;
use crate::ids::UnitId;
use crate::value_objects::{Ability, DistinctSeq, TeamPosition, UnitName};

/// A player miniature assembled from one or more components
#[derive(Debug, Clone)]
pub struct Unit {
    id: UnitId,
    name: UnitName,
    components: Vec<UnitComponent>,
}

impl Unit {
    /// Assemble a new unit from a component list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `components` is empty.
    pub fn new(name: UnitName, components: Vec<UnitComponent>) -> Result<Self, DomainError> {
        if components.is_empty() {
            return Err(DomainError::validation(
                "Unit must be assembled from at least one component",
            ));
        }
        Ok(Self {
            id: UnitId::new(),
            name,
            components,
        })
    }

    /// Returns the unit's unique identifier.
    #[inline]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Returns the unit's name.
    #[inline]
    pub fn name(&self) -> &UnitName {
        &self.name
    }

    /// Returns the components the unit is assembled from.
    #[inline]
    pub fn components(&self) -> &[UnitComponent] {
        &self.components
    }

    /// Total cost in credits: the sum of all component costs.
    pub fn cost(&self) -> u32 {
        self.components.iter().map(UnitComponent::cost).sum()
    }

    /// Every ability granted by any component, duplicates collapsed, first-seen order.
    pub fn abilities(&self) -> DistinctSeq<Ability> {
        self.components
            .iter()
            .flat_map(|component| component.abilities().iter().cloned())
            .collect()
    }

    /// Every board role any component makes the unit eligible for.
    pub fn eligible_positions(&self) -> DistinctSeq<TeamPosition> {
        self.components
            .iter()
            .flat_map(|component| component.positions().iter().copied())
            .collect()
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format that re-establishes the non-empty component invariant on load.
#[derive(Serialize, Deserialize)]
struct UnitWireFormat {
    id: UnitId,
    name: UnitName,
    components: Vec<UnitComponent>,
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = UnitWireFormat {
            id: self.id,
            name: self.name.clone(),
            components: self.components.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = UnitWireFormat::deserialize(deserializer)?;
        if wire.components.is_empty() {
            return Err(DeError::custom(
                "Unit must be assembled from at least one component",
            ));
        }
        Ok(Unit {
            id: wire.id,
            name: wire.name,
            components: wire.components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{AttributeBundle, ComponentLocation, ComponentName};

    fn component(name: &str, cost: u32, abilities: Vec<Ability>) -> UnitComponent {
        UnitComponent::new(
            ComponentName::new(name).expect("valid name"),
            ComponentLocation::Torso,
            cost,
            vec![TeamPosition::Jack],
            AttributeBundle::default(),
            abilities,
        )
    }

    fn create_test_unit() -> Unit {
        Unit::new(
            UnitName::new("Ripper-9").expect("valid name"),
            vec![
                component("Chassis", 20, vec![Ability::new("Stable Frame")]),
                component("Servo Arm", 12, vec![Ability::new("Stable Frame")]),
            ],
        )
        .expect("valid unit")
    }

    mod constructor {
        use super::*;

        #[test]
        fn unit_needs_at_least_one_component() {
            let err = Unit::new(UnitName::new("Ripper-9").expect("valid name"), vec![])
                .expect_err("empty component list");
            assert!(matches!(err, DomainError::Validation(_)));
        }

        #[test]
        fn identity_is_distinct_even_for_equal_builds() {
            let a = create_test_unit();
            let b = create_test_unit();
            assert_ne!(a.id(), b.id());
        }
    }

    mod derived_views {
        use super::*;

        #[test]
        fn cost_sums_component_costs() {
            assert_eq!(create_test_unit().cost(), 32);
        }

        #[test]
        fn abilities_union_collapses_duplicates_across_components() {
            let unit = create_test_unit();
            assert_eq!(unit.abilities().len(), 1);
        }

        #[test]
        fn eligible_positions_union_is_deduplicated() {
            let unit = create_test_unit();
            assert_eq!(unit.eligible_positions().as_slice(), &[TeamPosition::Jack]);
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn round_trip_preserves_identity_and_cost() {
            let unit = create_test_unit();
            let json = serde_json::to_string(&unit).expect("serialize");
            let reloaded: Unit = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(reloaded.id(), unit.id());
            assert_eq!(reloaded.cost(), unit.cost());
        }

        #[test]
        fn empty_component_list_is_rejected_on_load() {
            let unit = create_test_unit();
            let mut json = serde_json::to_value(&unit).expect("serialize");
            json["components"] = serde_json::Value::Array(vec![]);
            let reloaded: Result<Unit, _> = serde_json::from_value(json);
            assert!(reloaded.is_err());
        }
    }
}
