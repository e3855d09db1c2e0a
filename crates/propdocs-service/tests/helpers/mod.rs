//! Shared test helpers for service integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use propdocs_core::config::StoreConfig;
use propdocs_core::types::{FolderId, TagId};
use propdocs_entity::folder::SystemFolder;
use propdocs_service::{DocumentManager, MemoryNotifier};
use propdocs_store::{seed, DocumentStore};

/// Test session with a notification buffer.
pub struct TestApp {
    /// The manager under test.
    pub manager: DocumentManager,
    /// Captures every toast the manager emits.
    pub notifier: Arc<MemoryNotifier>,
}

impl TestApp {
    /// A session holding only the system roots.
    pub fn empty() -> Self {
        Self::with_store(DocumentStore::new())
    }

    /// A session loaded with the demo portfolio.
    pub fn seeded() -> Self {
        Self::with_store(seed::demo().expect("Failed to seed demo data"))
    }

    fn with_store(store: DocumentStore) -> Self {
        let notifier = Arc::new(MemoryNotifier::new());
        let manager = DocumentManager::new(store, StoreConfig::default(), notifier.clone());
        Self { manager, notifier }
    }

    /// ID of a system root.
    pub fn root(&self, kind: SystemFolder) -> FolderId {
        self.manager
            .folders()
            .system_folder(kind)
            .expect("system root")
            .id
    }

    /// ID of the folder at `path`.
    pub fn folder(&self, path: &str) -> FolderId {
        self.manager
            .folders()
            .find_by_path(path)
            .unwrap_or_else(|| panic!("no folder at {path}"))
            .id
    }

    /// ID of the tag named `name`.
    pub fn tag(&self, name: &str) -> TagId {
        self.manager
            .tags()
            .find_by_name(name)
            .unwrap_or_else(|| panic!("no tag named {name}"))
            .id
    }

    /// Titles of the toasts emitted since the last call.
    pub fn toasts(&self) -> Vec<String> {
        self.notifier.drain().into_iter().map(|n| n.title).collect()
    }
}
