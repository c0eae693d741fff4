//! List Model
//!
//! Authoritative in-memory list for the session. Every mutation is applied
//! in memory and then written through to the store in full.

use thiserror::Error;

use crate::models::{Item, ItemId};
use crate::store::{StorageBackend, Store, StoreError};

/// Rejected list mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("text is empty after trimming")]
    Empty,
    #[error("no item {0}")]
    NotFound(ItemId),
    #[error("item {0} is being edited")]
    Editing(ItemId),
}

#[derive(Debug, Clone)]
struct Entry {
    id: ItemId,
    item: Item,
    editing: bool,
}

/// Ordered item list backed by a `Store`
pub struct ListModel<B: StorageBackend> {
    entries: Vec<Entry>,
    next_id: u32,
    store: Store<B>,
    save_error: Option<StoreError>,
}

impl<B: StorageBackend> ListModel<B> {
    /// Seed the model from whatever the store holds
    pub fn load(store: Store<B>) -> Self {
        let items = store.load();
        let mut model = Self {
            entries: Vec::with_capacity(items.len()),
            next_id: 1,
            store,
            save_error: None,
        };
        for item in items {
            model.push(item);
        }
        model
    }

    fn push(&mut self, item: Item) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry { id, item, editing: false });
        id
    }

    fn position(&self, id: ItemId) -> Result<usize, ListError> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ListError::NotFound(id))
    }

    /// Position of an entry that accepts toggle/remove gestures
    fn idle_position(&self, id: ItemId) -> Result<usize, ListError> {
        let index = self.position(id)?;
        if self.entries[index].editing {
            return Err(ListError::Editing(id));
        }
        Ok(index)
    }

    /// Write the full list; failures are kept for the caller to surface
    fn persist(&mut self) {
        match self.store.save(self.all()) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                log::error!("Could not save list, keeping changes in memory: {}", e);
                self.save_error = Some(e);
            }
        }
    }

    /// Append a new item. Blank text is rejected without touching storage.
    pub fn add(&mut self, text: &str) -> Result<ItemId, ListError> {
        let text = Item::normalize(text).ok_or(ListError::Empty)?;
        let id = self.push(Item::new(text));
        log::info!("Added item {}", id);
        self.persist();
        Ok(id)
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle_completed(&mut self, id: ItemId) -> Result<bool, ListError> {
        let index = self.idle_position(id)?;
        let item = &mut self.entries[index].item;
        item.completed = !item.completed;
        let completed = item.completed;
        log::info!("Item {} completed={}", id, completed);
        self.persist();
        Ok(completed)
    }

    /// Delete an item, returning it
    pub fn remove(&mut self, id: ItemId) -> Result<Item, ListError> {
        let index = self.idle_position(id)?;
        let entry = self.entries.remove(index);
        log::info!("Removed item {}", id);
        self.persist();
        Ok(entry.item)
    }

    /// Replace an item's text with `text.trim()`.
    ///
    /// Blank text leaves the item unchanged and is not persisted.
    pub fn update_text(&mut self, id: ItemId, text: &str) -> Result<(), ListError> {
        let index = self.position(id)?;
        let text = Item::normalize(text).ok_or(ListError::Empty)?;
        self.entries[index].item.text = text;
        log::info!("Updated text of item {}", id);
        self.persist();
        Ok(())
    }

    /// Mark an item as in (or out of) edit mode. Not persisted.
    ///
    /// This flag is the only record of edit mode; toggle and remove check it.
    pub fn set_editing(&mut self, id: ItemId, editing: bool) -> Result<(), ListError> {
        let index = self.position(id)?;
        self.entries[index].editing = editing;
        Ok(())
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.entries.iter().any(|entry| entry.id == id && entry.editing)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.entries.iter().find(|entry| entry.id == id).map(|entry| &entry.item)
    }

    /// Items in display order
    pub fn all(&self) -> impl Iterator<Item = &Item> + '_ {
        self.entries.iter().map(|entry| &entry.item)
    }

    /// `(id, item, editing)` in display order
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item, bool)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.item, entry.editing))
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<ItemId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent persistence failure, if the last save failed
    #[cfg(test)]
    pub fn save_error(&self) -> Option<&StoreError> {
        self.save_error.as_ref()
    }

    pub fn take_save_error(&mut self) -> Option<StoreError> {
        self.save_error.take()
    }
}
