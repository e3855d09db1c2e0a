//! Folder tree rendering with per-node expansion state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use propdocs_core::types::FolderId;
use propdocs_store::FolderStore;

/// One visible line of the folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Nesting depth; roots are 0.
    pub depth: usize,
    /// Whether an expand toggle is shown.
    pub has_children: bool,
    /// Whether the children are currently shown.
    pub expanded: bool,
    /// Protected folders cannot be renamed or deleted.
    pub protected: bool,
    /// Whether the row offers a context menu (every folder except Trash).
    pub context_menu: bool,
}

/// Expansion state of the folder tree.
///
/// Folders start collapsed. The set only holds IDs; it is pruned when
/// folders are removed so stale entries never accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeView {
    expanded: BTreeSet<FolderId>,
}

impl TreeView {
    /// Creates a fully collapsed view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the children of `id`.
    pub fn expand(&mut self, id: FolderId) {
        self.expanded.insert(id);
    }

    /// Hides the children of `id`.
    pub fn collapse(&mut self, id: FolderId) {
        self.expanded.remove(&id);
    }

    /// Flips the expansion of `id`. Returns the new state.
    pub fn toggle(&mut self, id: FolderId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: FolderId) -> bool {
        self.expanded.contains(&id)
    }

    /// Expands every ancestor of `id` so that it becomes visible.
    pub fn expand_to(&mut self, folders: &FolderStore, id: FolderId) {
        let chain = folders.get_breadcrumb(id);
        if let Some((_, ancestors)) = chain.split_last() {
            self.expanded.extend(ancestors.iter().map(|f| f.id));
        }
    }

    /// Forgets expansion entries for removed folders.
    pub fn prune(&mut self, removed: &[FolderId]) {
        self.expanded.retain(|id| !removed.contains(id));
    }

    /// Visible rows in pre-order: roots in insertion order, children listed
    /// only under expanded parents.
    pub fn rows(&self, folders: &FolderStore) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<(FolderId, usize)> = folders
            .get_children(None)
            .iter()
            .rev()
            .map(|f| (f.id, 0))
            .collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(folder) = folders.get(id) else {
                continue;
            };
            // Depth can never exceed the folder count without a parent cycle.
            if depth > folders.len() {
                continue;
            }
            let expanded = self.is_expanded(id);

            rows.push(TreeRow {
                id,
                name: folder.name.clone(),
                depth,
                has_children: folders.has_children(id),
                expanded,
                protected: folder.protected,
                context_menu: folder.has_context_menu(),
            });

            if expanded {
                let children = folders.get_children(Some(id));
                stack.extend(children.iter().rev().map(|f| (f.id, depth + 1)));
            }
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propdocs_entity::folder::SystemFolder;

    fn sample() -> (FolderStore, FolderId, FolderId, FolderId) {
        let mut store = FolderStore::with_system_roots();
        let props = store.system_folder(SystemFolder::Properties).unwrap().id;
        let main = store.create_folder("123 Main St", Some(props)).unwrap().id;
        let leases = store.create_folder("Leases", Some(main)).unwrap().id;
        (store, props, main, leases)
    }

    #[test]
    fn test_collapsed_shows_roots_only() {
        let (store, ..) = sample();
        let names: Vec<String> = TreeView::new().rows(&store).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Properties", "People", "Global/Shared", "Trash"]);
    }

    #[test]
    fn test_expanded_rows_are_preorder_with_depth() {
        let (store, props, main, _) = sample();
        let mut view = TreeView::new();
        view.expand(props);
        view.expand(main);

        let rows: Vec<(String, usize)> = view
            .rows(&store)
            .into_iter()
            .map(|r| (r.name, r.depth))
            .collect();
        assert_eq!(
            rows[..4],
            [
                ("Properties".to_string(), 0),
                ("123 Main St".to_string(), 1),
                ("Leases".to_string(), 2),
                ("People".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_trash_row_has_no_context_menu() {
        let (store, ..) = sample();
        let rows = TreeView::new().rows(&store);
        let trash = rows.iter().find(|r| r.name == "Trash").unwrap();
        assert!(!trash.context_menu);
        assert!(trash.protected);
        assert!(rows.iter().filter(|r| r.name != "Trash").all(|r| r.context_menu));
    }

    #[test]
    fn test_toggle_expand_to_and_prune() {
        let (store, props, main, leases) = sample();
        let mut view = TreeView::new();
        assert!(view.toggle(props));
        assert!(!view.toggle(props));

        view.expand_to(&store, leases);
        assert!(view.is_expanded(props));
        assert!(view.is_expanded(main));
        assert!(!view.is_expanded(leases));

        view.prune(&[main]);
        assert!(!view.is_expanded(main));
        assert!(view.is_expanded(props));
    }

    #[test]
    fn test_expansion_state_serializes_as_id_list() {
        let (store, props, main, _) = sample();
        let mut view = TreeView::new();
        view.expand_to(&store, main);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["expanded"], serde_json::json!([props.to_string()]));

        let restored: TreeView = serde_json::from_value(json).unwrap();
        assert_eq!(restored.rows(&store), view.rows(&store));
    }
}
