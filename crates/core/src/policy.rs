//! Delete policy.
//!
//! Deleting most entities is switched off until the product owners decide
//! otherwise; each entity has its own switch.

use repairdesk_shared::{AppError, AppResult, PolicyConfig};

/// Entities exposed through the CRUD surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A school.
    School,
    /// A device catalog entry.
    Device,
    /// A pickup/delivery collection.
    Collection,
    /// A repair ticket.
    Repair,
    /// A note on a repair.
    Note,
}

impl Entity {
    /// Every entity, in display order.
    pub const ALL: [Self; 5] = [
        Self::School,
        Self::Device,
        Self::Collection,
        Self::Repair,
        Self::Note,
    ];

    /// Looks an entity up by its plural name.
    #[must_use]
    pub fn from_plural(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entity| entity.plural() == name)
    }

    /// Capitalized singular name, used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::School => "School",
            Self::Device => "Device",
            Self::Collection => "Collection",
            Self::Repair => "Repair",
            Self::Note => "Note",
        }
    }

    /// Lowercase plural, used in paths and client events.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::School => "schools",
            Self::Device => "devices",
            Self::Collection => "collections",
            Self::Repair => "repairs",
            Self::Note => "notes",
        }
    }
}

/// Which entities may be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DeletePolicy {
    /// Schools.
    pub schools: bool,
    /// Devices.
    pub devices: bool,
    /// Collections.
    pub collections: bool,
    /// Repairs.
    pub repairs: bool,
    /// Notes.
    pub notes: bool,
}

impl Default for DeletePolicy {
    fn default() -> Self {
        Self::from(&PolicyConfig::default())
    }
}

impl From<&PolicyConfig> for DeletePolicy {
    fn from(config: &PolicyConfig) -> Self {
        Self {
            schools: config.delete_schools,
            devices: config.delete_devices,
            collections: config.delete_collections,
            repairs: config.delete_repairs,
            notes: config.delete_notes,
        }
    }
}

impl DeletePolicy {
    /// A policy that allows every delete.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            schools: true,
            devices: true,
            collections: true,
            repairs: true,
            notes: true,
        }
    }

    /// Returns true if rows of `entity` may be deleted.
    #[must_use]
    pub const fn allows(&self, entity: Entity) -> bool {
        match entity {
            Entity::School => self.schools,
            Entity::Device => self.devices,
            Entity::Collection => self.collections,
            Entity::Repair => self.repairs,
            Entity::Note => self.notes,
        }
    }

    /// Fails with `Forbidden` when deleting `entity` is switched off.
    pub fn ensure_delete_allowed(&self, entity: Entity) -> AppResult<()> {
        if self.allows(entity) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "Deleting {} is disabled",
                entity.plural()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_plural() {
        assert_eq!(Entity::from_plural("repairs"), Some(Entity::Repair));
        assert_eq!(Entity::from_plural("Repairs"), None);
        assert_eq!(Entity::from_plural("users"), None);
    }

    #[test]
    fn test_default_only_allows_notes() {
        let policy = DeletePolicy::default();

        assert!(policy.allows(Entity::Note));
        for entity in [
            Entity::School,
            Entity::Device,
            Entity::Collection,
            Entity::Repair,
        ] {
            assert!(!policy.allows(entity), "{entity:?} should be disabled");
        }
    }

    #[test]
    fn test_disabled_delete_is_forbidden() {
        let err = DeletePolicy::default()
            .ensure_delete_allowed(Entity::School)
            .unwrap_err();

        assert_eq!(err.status_code(), 403);
        assert_eq!(err.message(), "Deleting schools is disabled");
    }

    #[test]
    fn test_from_config() {
        let config = PolicyConfig {
            delete_schools: true,
            delete_notes: false,
            ..PolicyConfig::default()
        };
        let policy = DeletePolicy::from(&config);

        assert!(policy.allows(Entity::School));
        assert!(!policy.allows(Entity::Note));
        assert!(DeletePolicy::permissive().ensure_delete_allowed(Entity::Repair).is_ok());
    }
}
