use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A service offered by the company.
/// Collection name: `service`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Service {
    pub const COLLECTION: &'static str = "service";

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::Validation("title required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(ModelError::Validation("description required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ModelError::Validation("category required".into()));
        }
        Ok(())
    }
}
