//! DistinctSeq - the duplicate-collapsing collection discipline
//!
//! Several catalog collections in this model (team rules, affinity groups, abilities,
//! eligible positions) accept arbitrary input sequences but must behave as sets:
//! each distinct value appears exactly once, in the order it was first seen.
//! Duplicates are collapsed silently - they are never an error.
//!
//! The discipline is re-applied on every deserialization path, so a hand-edited or
//! bulk-loaded document with duplicates collapses again instead of smuggling them in.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered sequence with set semantics: no duplicate values, first-seen order.
///
/// Keyed by value equality (`PartialEq`), not by hash, so insertion order is preserved
/// without any ordering requirement on `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctSeq<T> {
    items: Vec<T>,
}

impl<T: PartialEq> DistinctSeq<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Normalize an input sequence: keep the first occurrence of each value,
    /// drop later duplicates.
    pub fn from_sequence(input: impl IntoIterator<Item = T>) -> Self {
        let mut seq = Self::new();
        for item in input {
            seq.insert(item);
        }
        seq
    }

    /// Append `item` if no equal value is present. Returns whether it was added.
    pub fn insert(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Whether an equal value is present.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Default for DistinctSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for DistinctSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<'a, T> IntoIterator for &'a DistinctSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq + Serialize> Serialize for DistinctSeq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de, T: PartialEq + Deserialize<'de>> Deserialize<'de> for DistinctSeq<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Re-establish the no-duplicates invariant on every load path.
        let raw = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_sequence(raw))
    }
}
