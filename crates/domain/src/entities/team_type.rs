//! TeamType entity - a faction-level rule set
//!
//! Teams of the same type share the same rule catalog. The catalog is a set: a rule
//! listed twice in the input is one rule, silently.

use serde::{Deserialize, Serialize};

use crate::ids::TeamTypeId;
use crate::value_objects::{DistinctSeq, TeamRule, TeamTypeName};

/// A faction-level descriptor: a name plus a deduplicated rule catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamType {
    id: TeamTypeId,
    name: TeamTypeName,
    rules: DistinctSeq<TeamRule>,
}

impl TeamType {
    /// Create a new team type. Duplicate rules in the input collapse silently.
    pub fn new(name: TeamTypeName, rules: impl IntoIterator<Item = TeamRule>) -> Self {
        Self {
            id: TeamTypeId::new(),
            name,
            rules: DistinctSeq::from_sequence(rules),
        }
    }

    /// Returns the team type's unique identifier.
    #[inline]
    pub fn id(&self) -> TeamTypeId {
        self.id
    }

    /// Returns the team type's name.
    #[inline]
    pub fn name(&self) -> &TeamTypeName {
        &self.name
    }

    /// Returns the deduplicated rule catalog.
    #[inline]
    pub fn rules(&self) -> &DistinctSeq<TeamRule> {
        &self.rules
    }
}
