//! UnitComponent entity - a composable fragment of a unit
//!
//! A component contributes a mount location, a cost, a set of eligible board roles,
//! a stat payload, and a set of special abilities. Components are defined once when a
//! template catalog is authored and never mutated; any unit built from a component
//! carries its own copy of the immutable value.
//!
//! # Invariants
//!
//! - `name` is non-empty (enforced by `ComponentName`)
//! - `positions` and `abilities` hold no duplicate values regardless of how many times
//!   the constructor input repeated them (enforced by `DistinctSeq`, re-applied on
//!   deserialization)

use serde::{Deserialize, Serialize};

use crate::value_objects::{
    Ability, AttributeBundle, ComponentLocation, ComponentName, DistinctSeq, TeamPosition,
};

/// A composable unit-defining fragment (equipment/attachment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitComponent {
    name: ComponentName,
    location: ComponentLocation,
    /// Credits this component adds to its unit's cost
    cost: u32,
    /// Board roles a unit carrying this component may fill
    positions: DistinctSeq<TeamPosition>,
    /// Stat payload, opaque to the composition rules
    attributes: AttributeBundle,
    abilities: DistinctSeq<Ability>,
}

impl UnitComponent {
    /// Create a new component.
    ///
    /// Duplicate positions or abilities in the input are collapsed silently; `cost`
    /// and `attributes` are stored as given.
    pub fn new(
        name: ComponentName,
        location: ComponentLocation,
        cost: u32,
        positions: impl IntoIterator<Item = TeamPosition>,
        attributes: AttributeBundle,
        abilities: impl IntoIterator<Item = Ability>,
    ) -> Self {
        Self {
            name,
            location,
            cost,
            positions: DistinctSeq::from_sequence(positions),
            attributes,
            abilities: DistinctSeq::from_sequence(abilities),
        }
    }

    /// Returns the component's name.
    #[inline]
    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Returns where the component mounts.
    #[inline]
    pub fn location(&self) -> ComponentLocation {
        self.location
    }

    /// Returns the component's cost in credits.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns the board roles this component makes its unit eligible for.
    #[inline]
    pub fn positions(&self) -> &DistinctSeq<TeamPosition> {
        &self.positions
    }

    /// Returns the component's stat payload.
    #[inline]
    pub fn attributes(&self) -> &AttributeBundle {
        &self.attributes
    }

    /// Returns the abilities this component grants.
    #[inline]
    pub fn abilities(&self) -> &DistinctSeq<Ability> {
        &self.abilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claw() -> Ability {
        Ability::new("Grappling Claw")
    }

    fn create_component(positions: Vec<TeamPosition>, abilities: Vec<Ability>) -> UnitComponent {
        UnitComponent::new(
            ComponentName::new("Servo Arm").expect("valid name"),
            ComponentLocation::Arms,
            12,
            positions,
            AttributeBundle::new(4, 5, 3, 2),
            abilities,
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn duplicate_abilities_collapse() {
            let component = create_component(vec![], vec![claw(), claw()]);
            assert_eq!(component.abilities().len(), 1);
        }

        #[test]
        fn duplicate_positions_collapse() {
            let component =
                create_component(vec![TeamPosition::Striker, TeamPosition::Striker], vec![]);
            assert_eq!(component.positions().len(), 1);
            assert!(component.positions().contains(&TeamPosition::Striker));
        }

        #[test]
        fn distinct_values_keep_first_seen_order() {
            let component = create_component(
                vec![
                    TeamPosition::Guard,
                    TeamPosition::Striker,
                    TeamPosition::Guard,
                    TeamPosition::Jack,
                ],
                vec![],
            );
            assert_eq!(
                component.positions().as_slice(),
                &[TeamPosition::Guard, TeamPosition::Striker, TeamPosition::Jack]
            );
        }

        #[test]
        fn cost_and_attributes_are_stored_as_given() {
            let component = create_component(vec![], vec![]);
            assert_eq!(component.cost(), 12);
            assert_eq!(component.attributes().strength, 5);
            assert_eq!(component.location(), ComponentLocation::Arms);
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn duplicates_in_a_loaded_document_collapse_again() {
            let component = create_component(vec![TeamPosition::Jack], vec![claw()]);
            let mut json = serde_json::to_value(&component).expect("serialize");

            // Simulate a bulk-load path that smuggled duplicates in.
            let positions = json["positions"].as_array().expect("positions").clone();
            json["positions"] = serde_json::Value::Array(
                positions.iter().chain(positions.iter()).cloned().collect(),
            );

            let reloaded: UnitComponent = serde_json::from_value(json).expect("deserialize");
            assert_eq!(reloaded.positions().len(), 1);
        }
    }
}
