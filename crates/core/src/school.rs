//! School inputs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewSchool {
    /// School name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Name of the contact at the school.
    #[validate(length(min = 1, max = 255))]
    pub contact_name: String,
    /// Postal address.
    #[validate(length(min = 1, max = 255))]
    pub address: String,
}

/// Partial update of a school; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SchoolPatch {
    /// School name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Name of the contact at the school.
    #[validate(length(min = 1, max = 255))]
    pub contact_name: Option<String>,
    /// Postal address.
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
}

impl SchoolPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact_name.is_none() && self.address.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    #[test]
    fn test_patch_from_partial_json() {
        let patch: SchoolPatch = serde_json::from_str(r#"{"address":"1 High St"}"#).unwrap();

        assert_eq!(patch.address.as_deref(), Some("1 High St"));
        assert!(patch.name.is_none());
        assert!(!patch.is_empty());
        assert!(SchoolPatch::default().is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let school = NewSchool {
            name: String::new(),
            contact_name: "Ms Adams".to_string(),
            address: "1 High St".to_string(),
        };
        assert!(validate(&school).is_err());
    }
}
