//! Note inputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Longest note accepted, in characters.
pub const MAX_NOTE_LENGTH: u64 = 2000;

/// Payload for adding a note to a repair. The creator comes from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewNote {
    /// Repair the note belongs to.
    pub repair_id: Uuid,
    /// Note body.
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// Partial update of a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NotePatch {
    /// Note body.
    #[validate(length(min = 1, max = 2000))]
    pub text: Option<String>,
}

impl NotePatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    #[test]
    fn test_length_bounds() {
        let note = |len: u64| NewNote {
            repair_id: Uuid::new_v4(),
            text: "x".repeat(usize::try_from(len).unwrap()),
        };

        assert!(validate(&note(1)).is_ok());
        assert!(validate(&note(MAX_NOTE_LENGTH)).is_ok());
        assert!(validate(&note(MAX_NOTE_LENGTH + 1)).is_err());
        assert!(validate(&note(0)).is_err());
    }
}
