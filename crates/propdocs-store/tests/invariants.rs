//! Structural invariants of the stores under random operation sequences.

use std::collections::HashSet;

use proptest::prelude::*;

use propdocs_core::types::FolderId;
use propdocs_entity::file::RawUpload;
use propdocs_entity::folder::SystemFolder;
use propdocs_store::{DocumentStore, fold_name};

#[derive(Debug, Clone)]
enum Op {
    CreateFolder { parent: usize, name: u16 },
    CreateNamed { parent: Option<usize>, name: usize },
    RenameFolder { target: usize, name: usize },
    DeleteFolder { target: usize },
    Upload { folder: usize, count: u8 },
    DeleteFile { target: usize },
    RestoreFile { target: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<usize>(), any::<u16>()).prop_map(|(parent, name)| Op::CreateFolder { parent, name }),
        1 => any::<usize>().prop_map(|target| Op::DeleteFolder { target }),
        2 => (prop::option::of(any::<usize>()), any::<usize>())
            .prop_map(|(parent, name)| Op::CreateNamed { parent, name }),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(target, name)| Op::RenameFolder { target, name }),
        3 => (any::<usize>(), 1u8..4).prop_map(|(folder, count)| Op::Upload { folder, count }),
        2 => any::<usize>().prop_map(|target| Op::DeleteFile { target }),
        1 => any::<usize>().prop_map(|target| Op::RestoreFile { target }),
    ]
}

/// Names chosen to collide with each other and with the `Global/Shared` root.
const NAMES: [&str; 6] = ["Global", "Shared", "shared", "Élan", "élan", "G"];

fn pick_folder(store: &DocumentStore, index: usize) -> FolderId {
    let all = store.folders.all();
    all[index % all.len()].id
}

/// Applies an operation the way the service layer would, ignoring rejections.
fn apply(store: &mut DocumentStore, op: &Op) {
    let trash = store.folders.trash_id().expect("trash");
    match op {
        Op::CreateFolder { parent, name } => {
            let parent = pick_folder(store, *parent);
            let _ = store.folders.create_folder(&format!("f{name}"), Some(parent));
        }
        Op::CreateNamed { parent, name } => {
            let parent = parent.map(|p| pick_folder(store, p));
            let _ = store.folders.create_folder(NAMES[name % NAMES.len()], parent);
        }
        Op::RenameFolder { target, name } => {
            let target = pick_folder(store, *target);
            let _ = store.folders.rename_folder(target, NAMES[name % NAMES.len()]);
        }
        Op::DeleteFolder { target } => {
            let target = pick_folder(store, *target);
            if let Ok(removed) = store.folders.remove_subtree(target) {
                store.files.move_to_trash(&removed, trash);
            }
        }
        Op::Upload { folder, count } => {
            let folder = pick_folder(store, *folder);
            if folder == trash {
                return;
            }
            let raw = (0..*count)
                .map(|i| RawUpload::new(format!("doc-{i}.pdf"), 10, "application/pdf"))
                .collect();
            store.files.upload_files(raw, folder, &[]);
        }
        Op::DeleteFile { target } => {
            if store.files.is_empty() {
                return;
            }
            let id = store.files.all()[target % store.files.len()].id;
            store.files.delete_file(id, trash).expect("delete");
        }
        Op::RestoreFile { target } => {
            if store.files.is_empty() {
                return;
            }
            let id = store.files.all()[target % store.files.len()].id;
            let fallback = store
                .folders
                .system_folder(SystemFolder::Shared)
                .expect("shared root")
                .id;
            let folders = &store.folders;
            store
                .files
                .restore_file(id, |f| folders.contains(f), fallback)
                .expect("restore");
        }
    }
}

proptest! {
    #[test]
    fn children_partition_the_folder_collection(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = DocumentStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let mut seen = HashSet::new();
        let mut total = 0;
        let parents = std::iter::once(None)
            .chain(store.folders.all().iter().map(|f| Some(f.id)));
        for parent in parents {
            for child in store.folders.get_children(parent) {
                prop_assert_eq!(child.parent_id, parent);
                prop_assert!(seen.insert(child.id), "folder listed under two parents");
                total += 1;
            }
        }
        prop_assert_eq!(total, store.folders.len());
    }

    #[test]
    fn derived_paths_stay_unique(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = DocumentStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let mut paths = HashSet::new();
        for folder in store.folders.all() {
            let path = store.folders.path(folder.id).expect("live folder has a path");
            prop_assert!(paths.insert(fold_name(&path)), "duplicate path {}", path);
            prop_assert_eq!(store.folders.find_by_path(&path).map(|f| f.id), Some(folder.id));
        }
    }

    #[test]
    fn deleted_files_live_in_trash(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = DocumentStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let trash = store.folders.trash_id().expect("trash");
        for file in store.files.all() {
            if file.is_deleted() {
                prop_assert_eq!(file.folder_id, trash);
            } else {
                prop_assert!(store.folders.contains(file.folder_id));
                prop_assert_ne!(file.folder_id, trash);
            }
        }
    }

    #[test]
    fn delete_file_twice_equals_once(ops in prop::collection::vec(op_strategy(), 1..30), pick in any::<usize>()) {
        let mut store = DocumentStore::new();
        let shared = store
            .folders
            .system_folder(SystemFolder::Shared)
            .expect("shared root")
            .id;
        store.files.upload_files(vec![RawUpload::new("seed.pdf", 1, "application/pdf")], shared, &[]);
        for op in &ops {
            apply(&mut store, op);
        }

        let trash = store.folders.trash_id().expect("trash");
        let id = store.files.all()[pick % store.files.len()].id;

        store.files.delete_file(id, trash).expect("first delete");
        let once = snapshot(&store, id);
        store.files.delete_file(id, trash).expect("second delete");
        let twice = snapshot(&store, id);
        prop_assert_eq!(once, twice);
    }
}

fn snapshot(store: &DocumentStore, id: propdocs_core::types::FileId) -> String {
    format!("{:?}", store.files.get(id).expect("file"))
}
