//! In-memory tag registry.

use rand::seq::SliceRandom;

use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::types::TagId;
use propdocs_entity::tag::{Tag, TagColor};

use crate::same_name;

/// Flat collection of tags.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a tag by ID.
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Whether a tag with this ID exists.
    pub fn contains(&self, id: TagId) -> bool {
        self.get(id).is_some()
    }

    /// Finds a tag by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Tag> {
        let name = name.trim();
        self.tags.iter().find(|t| same_name(&t.name, name))
    }

    /// All tags in creation order.
    pub fn all(&self) -> &[Tag] {
        &self.tags
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Creates a tag with a color picked at random from the palette.
    pub fn add_tag(&mut self, name: &str) -> AppResult<Tag> {
        let color = TagColor::PALETTE
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(TagColor::Blue);
        self.add_tag_with_color(name, color)
    }

    /// Creates a tag with an explicit color.
    pub fn add_tag_with_color(&mut self, name: &str, color: TagColor) -> AppResult<Tag> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Tag name cannot be empty"));
        }
        if self.find_by_name(name).is_some() {
            return Err(AppError::conflict(format!("Tag '{name}' already exists")));
        }

        let tag = Tag::new(name, color);
        self.tags.push(tag.clone());
        Ok(tag)
    }

    /// Removes a tag. Detaching it from files is the caller's job.
    pub fn delete_tag(&mut self, id: TagId) -> AppResult<Tag> {
        let index = self
            .tags
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("Tag {id} not found")))?;
        Ok(self.tags.remove(index))
    }

    /// Returns the first ID in `ids` that is not registered, if any.
    pub fn first_unknown(&self, ids: &[TagId]) -> Option<TagId> {
        ids.iter().copied().find(|id| !self.contains(*id))
    }
}
