//! PlayerSlots - the guarded position→unit map shared by both team kinds
//!
//! Placement and removal deliberately follow different policies:
//! - placing into an occupied slot is a contract violation (`PositionOccupied`),
//! - clearing an empty slot is a no-op.
//!
//! Positions arrive as `i32` so the non-negativity precondition stays a runtime
//! contract; validated indices are stored as `u32` keys. Every rejected operation
//! leaves the map untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Unit;
use crate::error::DomainError;

/// Sparse positional map of units, keyed by board slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSlots {
    slots: BTreeMap<u32, Unit>,
}

impl PlayerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `unit` at `position`.
    ///
    /// Returns the validated slot index.
    ///
    /// # Errors
    ///
    /// - `DomainError::NegativePosition` if `position < 0`
    /// - `DomainError::PositionOccupied` if the slot already holds a unit
    pub fn place(&mut self, unit: Unit, position: i32) -> Result<u32, DomainError> {
        let index = Self::validate_position(position)?;
        if self.slots.contains_key(&index) {
            return Err(DomainError::PositionOccupied { position: index });
        }
        self.slots.insert(index, unit);
        Ok(index)
    }

    /// Remove and return the unit at `position`, if any.
    ///
    /// Clearing an empty or negative position is a no-op returning `None`.
    pub fn clear(&mut self, position: i32) -> Option<(u32, Unit)> {
        let index = u32::try_from(position).ok()?;
        self.slots.remove(&index).map(|unit| (index, unit))
    }

    /// The unit at `position`, if the slot is occupied.
    pub fn get(&self, position: i32) -> Option<&Unit> {
        let index = u32::try_from(position).ok()?;
        self.slots.get(&index)
    }

    /// Whether `position` currently holds a unit.
    pub fn is_occupied(&self, position: i32) -> bool {
        self.get(position).is_some()
    }

    /// Occupied slots in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Unit)> {
        self.slots.iter().map(|(position, unit)| (*position, unit))
    }

    /// All placed units, ignoring their slot indices.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Summed cost of every placed unit, each counted exactly once.
    pub fn total_unit_cost(&self) -> u32 {
        self.slots.values().map(Unit::cost).sum()
    }

    fn validate_position(position: i32) -> Result<u32, DomainError> {
        u32::try_from(position).map_err(|_| DomainError::NegativePosition { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{
        AttributeBundle, ComponentLocation, ComponentName, TeamPosition, UnitName,
    };
    use crate::UnitComponent;

    fn create_test_unit(name: &str, cost: u32) -> Unit {
        let chassis = UnitComponent::new(
            ComponentName::new("Chassis").expect("valid name"),
            ComponentLocation::Torso,
            cost,
            vec![TeamPosition::Jack],
            AttributeBundle::default(),
            vec![],
        );
        Unit::new(UnitName::new(name).expect("valid name"), vec![chassis]).expect("valid unit")
    }

    mod placement {
        use super::*;

        #[test]
        fn place_then_get_round_trips() {
            let mut slots = PlayerSlots::new();
            let unit = create_test_unit("Ripper-9", 10);
            let id = unit.id();

            assert_eq!(slots.place(unit, 3).expect("empty slot"), 3);
            assert_eq!(slots.get(3).map(Unit::id), Some(id));
            assert_eq!(slots.len(), 1);
        }

        #[test]
        fn negative_position_is_rejected_and_state_unchanged() {
            let mut slots = PlayerSlots::new();
            let err = slots
                .place(create_test_unit("Ripper-9", 10), -1)
                .expect_err("negative position");
            assert_eq!(err, DomainError::NegativePosition { position: -1 });
            assert!(slots.is_empty());
        }

        #[test]
        fn occupied_slot_is_rejected_and_keeps_first_unit() {
            let mut slots = PlayerSlots::new();
            let first = create_test_unit("Ripper-9", 10);
            let first_id = first.id();
            slots.place(first, 3).expect("empty slot");

            let err = slots
                .place(create_test_unit("Crusher-2", 15), 3)
                .expect_err("occupied slot");
            assert_eq!(err, DomainError::PositionOccupied { position: 3 });
            assert_eq!(slots.get(3).map(Unit::id), Some(first_id));
            assert_eq!(slots.len(), 1);
        }

        #[test]
        fn zero_is_a_valid_position() {
            let mut slots = PlayerSlots::new();
            assert_eq!(
                slots.place(create_test_unit("Ripper-9", 10), 0).expect("slot 0"),
                0
            );
        }
    }

    mod removal {
        use super::*;

        #[test]
        fn clear_returns_the_evicted_unit() {
            let mut slots = PlayerSlots::new();
            let unit = create_test_unit("Ripper-9", 10);
            let id = unit.id();
            slots.place(unit, 5).expect("empty slot");

            let (position, evicted) = slots.clear(5).expect("occupied slot");
            assert_eq!(position, 5);
            assert_eq!(evicted.id(), id);
            assert!(slots.is_empty());
        }

        #[test]
        fn clearing_an_empty_slot_is_a_no_op() {
            let mut slots = PlayerSlots::new();
            slots
                .place(create_test_unit("Ripper-9", 10), 1)
                .expect("empty slot");

            assert!(slots.clear(8).is_none());
            assert!(slots.clear(-4).is_none());
            assert_eq!(slots.len(), 1);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn total_unit_cost_ignores_positions() {
            let mut slots = PlayerSlots::new();
            slots
                .place(create_test_unit("Ripper-9", 10), 7)
                .expect("empty slot");
            slots
                .place(create_test_unit("Crusher-2", 25), 2)
                .expect("empty slot");
            assert_eq!(slots.total_unit_cost(), 35);
        }

        #[test]
        fn iter_walks_slots_in_ascending_order() {
            let mut slots = PlayerSlots::new();
            slots
                .place(create_test_unit("Ripper-9", 10), 9)
                .expect("empty slot");
            slots
                .place(create_test_unit("Crusher-2", 25), 4)
                .expect("empty slot");
            let positions: Vec<u32> = slots.iter().map(|(position, _)| position).collect();
            assert_eq!(positions, vec![4, 9]);
        }
    }
}
