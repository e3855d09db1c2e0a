//! Tag creation and deletion.

use serde::Serialize;
use tracing::{debug, info};

use propdocs_core::result::AppResult;
use propdocs_core::types::TagId;
use propdocs_entity::tag::{Tag, TagColor};

use crate::file::TagFilter;
use crate::manager::DocumentManager;
use crate::notification::NotificationFormatter;

/// Outcome of deleting a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDeletion {
    /// The removed tag.
    pub tag: Tag,
    /// Number of files the tag was detached from.
    pub detached: usize,
}

impl DocumentManager {
    /// Creates a tag with a random palette color.
    pub fn add_tag(&mut self, name: &str) -> AppResult<Tag> {
        let tag = self
            .store
            .tags
            .add_tag(name)
            .inspect_err(|e| debug!(tag_name = name, error = %e, "Rejected tag creation"))?;
        self.tag_created(&tag);
        Ok(tag)
    }

    /// Creates a tag with an explicit color.
    pub fn add_tag_with_color(&mut self, name: &str, color: TagColor) -> AppResult<Tag> {
        let tag = self
            .store
            .tags
            .add_tag_with_color(name, color)
            .inspect_err(|e| debug!(tag_name = name, error = %e, "Rejected tag creation"))?;
        self.tag_created(&tag);
        Ok(tag)
    }

    /// Deletes a tag and detaches it from every file.
    ///
    /// An active tag filter on the deleted tag falls back to all tags.
    pub fn delete_tag(&mut self, id: TagId) -> AppResult<TagDeletion> {
        let tag = self
            .store
            .tags
            .delete_tag(id)
            .inspect_err(|e| debug!(tag_id = %id, error = %e, "Rejected tag deletion"))?;
        let detached = self.store.files.detach_tag(id);

        if self.view.filter.tag == TagFilter::Tag(id) {
            self.view.filter.tag = TagFilter::All;
        }

        info!(tag_id = %id, name = %tag.name, detached, "Tag deleted");
        self.notify(NotificationFormatter::tag_deleted(&tag.name, detached));
        Ok(TagDeletion { tag, detached })
    }

    fn tag_created(&self, tag: &Tag) {
        info!(tag_id = %tag.id, name = %tag.name, color = %tag.color, "Tag created");
        self.notify(NotificationFormatter::tag_created(&tag.name));
    }
}
