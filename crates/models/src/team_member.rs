use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A team member within one of the company departments.
/// Collection name: `teammember`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Department label, e.g. Media, Events, Outreach. Used as a filter key
    /// by the read path; no referential check against other collections.
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl TeamMember {
    pub const COLLECTION: &'static str = "teammember";

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        if self.role.trim().is_empty() {
            return Err(ModelError::Validation("role required".into()));
        }
        if self.team.trim().is_empty() {
            return Err(ModelError::Validation("team required".into()));
        }
        Ok(())
    }
}
