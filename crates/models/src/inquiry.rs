use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A client inquiry or booking request.
/// Collection name: `inquiry`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form reference to a service title or category; not checked
    /// against the service collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Desired event date, kept as free-form text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Inquiry {
    pub const COLLECTION: &'static str = "inquiry";

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        if !is_valid_email(&self.email) {
            return Err(ModelError::Validation(
                "email must be a valid email address".into(),
            ));
        }
        Ok(())
    }
}

/// Minimal email-syntax check: one `@` separating a non-empty local part
/// from a domain with an interior dot.
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(i) => i > 0 && i < domain.len() - 1 && !domain.ends_with('.'),
        None => false,
    }
}
