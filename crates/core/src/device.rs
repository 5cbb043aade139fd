//! Device catalog inputs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a device model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewDevice {
    /// Manufacturer, e.g. "Lenovo".
    #[validate(length(min = 1, max = 255))]
    pub manufacturer: String,
    /// Model name, e.g. "300e Gen 2".
    #[validate(length(min = 1, max = 255))]
    pub model: String,
}

/// Partial update of a device model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DevicePatch {
    /// Manufacturer.
    #[validate(length(min = 1, max = 255))]
    pub manufacturer: Option<String>,
    /// Model name.
    #[validate(length(min = 1, max = 255))]
    pub model: Option<String>,
}

impl DevicePatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.manufacturer.is_none() && self.model.is_none()
    }
}
