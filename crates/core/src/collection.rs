//! Collection (pickup/delivery) inputs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewCollection {
    /// Courier or internal collection reference.
    #[validate(length(min = 1, max = 100))]
    pub collection_number: String,
    /// Where the devices are picked up.
    #[validate(length(max = 255))]
    #[serde(default)]
    pub origin: Option<String>,
    /// Where the devices are delivered.
    #[validate(length(max = 255))]
    #[serde(default)]
    pub destination: Option<String>,
}

/// Partial update of a collection.
///
/// `origin` and `destination` are nullable: `null` clears them, an absent key
/// leaves them alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CollectionPatch {
    /// Collection reference.
    #[validate(length(min = 1, max = 100))]
    pub collection_number: Option<String>,
    /// Pickup location.
    #[validate(length(max = 255))]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub origin: Option<Option<String>>,
    /// Delivery location.
    #[validate(length(max = 255))]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub destination: Option<Option<String>>,
}

impl CollectionPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.collection_number.is_none() && self.origin.is_none() && self.destination.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_differs_from_absent() {
        let cleared: CollectionPatch = serde_json::from_str(r#"{"origin":null}"#).unwrap();
        assert_eq!(cleared.origin, Some(None));
        assert_eq!(cleared.destination, None);

        let untouched: CollectionPatch = serde_json::from_str("{}").unwrap();
        assert!(untouched.is_empty());
    }
}
