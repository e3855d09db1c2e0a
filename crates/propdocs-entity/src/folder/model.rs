//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use propdocs_core::types::FolderId;

/// The fixed, protected root folders every document store starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemFolder {
    /// Per-property document folders.
    Properties,
    /// Per-person (owner, tenant, vendor) document folders.
    People,
    /// Documents not tied to a single record.
    Shared,
    /// Soft-deleted files.
    Trash,
}

impl SystemFolder {
    /// All system folders in display order.
    pub const ALL: [SystemFolder; 4] = [
        SystemFolder::Properties,
        SystemFolder::People,
        SystemFolder::Shared,
        SystemFolder::Trash,
    ];

    /// Display name of the folder.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::People => "People",
            Self::Shared => "Global/Shared",
            Self::Trash => "Trash",
        }
    }
}

/// Kind of property-management record a folder can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A managed property.
    Property,
    /// A property owner.
    Owner,
    /// A tenant.
    Tenant,
    /// A service vendor.
    Vendor,
}

/// Link from a folder to a record elsewhere in the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedEntity {
    /// Record kind.
    pub kind: EntityKind,
    /// Record identifier in its own module.
    pub id: String,
}

/// A folder in the document hierarchy.
///
/// The folder's path is not stored; it is derived from the live parent
/// chain by the folder store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for root folders).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Linked property/person record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_entity: Option<AssociatedEntity>,
    /// Protected folders cannot be renamed or deleted.
    #[serde(default)]
    pub protected: bool,
    /// Set on the fixed system roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemFolder>,
}

impl Folder {
    /// Create a regular, unprotected folder.
    pub fn new(name: impl Into<String>, parent_id: Option<FolderId>) -> Self {
        Self {
            id: FolderId::new(),
            name: name.into(),
            parent_id,
            created_at: Utc::now(),
            associated_entity: None,
            protected: false,
            system: None,
        }
    }

    /// Create one of the protected system roots.
    pub fn system(kind: SystemFolder) -> Self {
        Self {
            protected: true,
            system: Some(kind),
            ..Self::new(kind.name(), None)
        }
    }

    /// Link the folder to a property-management record.
    pub fn with_entity(mut self, kind: EntityKind, id: impl Into<String>) -> Self {
        self.associated_entity = Some(AssociatedEntity {
            kind,
            id: id.into(),
        });
        self
    }

    /// Whether this folder receives soft-deleted files.
    pub fn is_trash(&self) -> bool {
        self.system == Some(SystemFolder::Trash)
    }

    /// Whether the tree view offers rename/delete/new-subfolder actions.
    pub fn has_context_menu(&self) -> bool {
        !self.is_trash()
    }

    /// Whether the folder may be renamed or deleted.
    pub fn is_mutable(&self) -> bool {
        !self.protected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_folders_are_protected_roots() {
        for kind in SystemFolder::ALL {
            let folder = Folder::system(kind);
            assert_eq!(folder.parent_id, None);
            assert!(folder.protected);
            assert!(!folder.is_mutable());
            assert_eq!(folder.system, Some(kind));
            assert_eq!(folder.is_trash(), kind == SystemFolder::Trash);
        }
    }

    #[test]
    fn test_trash_has_no_context_menu() {
        assert!(!Folder::system(SystemFolder::Trash).has_context_menu());
        assert!(Folder::system(SystemFolder::People).has_context_menu());
        assert!(Folder::new("Leases", None).has_context_menu());
    }

    #[test]
    fn test_with_entity() {
        let parent = FolderId::new();
        let folder = Folder::new("123 Main St", Some(parent)).with_entity(EntityKind::Property, "p-1");
        assert_eq!(folder.parent_id, Some(parent));
        assert_eq!(
            folder.associated_entity,
            Some(AssociatedEntity {
                kind: EntityKind::Property,
                id: "p-1".to_string()
            })
        );
    }
}
