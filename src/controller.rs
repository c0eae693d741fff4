//! Interaction Controller
//!
//! Routes gestures from the presentation layer to the list model and keeps
//! the per-item edit-mode state machine:
//!
//! ```text
//! VIEWING --edit trigger--> EDITING --edit trigger | focus lost--> VIEWING
//! ```
//!
//! Primary and secondary row gestures are ignored while an item is EDITING.

use std::collections::HashMap;

use crate::list_model::{ListError, ListModel};
use crate::models::ItemId;
use crate::render::{Renderer, Row};
use crate::store::StorageBackend;

/// Edit-mode state of a single item, read from the model's editing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing,
}

/// Text buffers of an item in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditBuffer {
    /// Text when editing began, restored on a blank commit
    original: String,
    /// Latest text typed into the editable region
    draft: String,
}

/// What the view should do after entering edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCue {
    pub focus: bool,
    pub select_all: bool,
}

/// Result of an edit-trigger or focus-lost gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Began(EditCue),
    /// Left edit mode and saved the draft
    Committed,
    /// Left edit mode with a blank draft; prior text kept
    Reverted,
    Ignored,
}

/// Result of a secondary (context) activation on a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryOutcome {
    pub removed: bool,
    /// The platform context menu must not open
    pub suppress_default: bool,
}

pub struct InteractionController<B: StorageBackend> {
    model: ListModel<B>,
    renderer: Renderer,
    buffers: HashMap<ItemId, EditBuffer>,
    notice: Option<String>,
}

impl<B: StorageBackend> InteractionController<B> {
    pub fn new(model: ListModel<B>, renderer: Renderer) -> Self {
        let mut controller = Self {
            model,
            renderer,
            buffers: HashMap::new(),
            notice: None,
        };
        controller.sync_notice();
        controller
    }

    #[cfg(test)]
    pub fn model(&self) -> &ListModel<B> {
        &self.model
    }

    pub fn edit_state(&self, id: ItemId) -> EditState {
        if self.model.is_editing(id) {
            EditState::Editing
        } else {
            EditState::Viewing
        }
    }

    /// Current rows, hints included when the list is empty
    pub fn rows(&self) -> Vec<Row> {
        self.renderer.project(&self.model)
    }

    /// Pending non-fatal notice about a failed save
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Refresh the notice after a write attempt
    fn sync_notice(&mut self) {
        self.notice = self
            .model
            .take_save_error()
            .map(|e| format!("{}: {}", self.renderer.labels().save_failed, e));
    }

    /// Add-trigger activated with the current input text.
    ///
    /// Returns the new item when the input should be cleared.
    pub fn add(&mut self, input: &str) -> Option<ItemId> {
        match self.model.add(input) {
            Ok(id) => {
                self.sync_notice();
                Some(id)
            }
            Err(e) => {
                log::debug!("Add ignored: {}", e);
                None
            }
        }
    }

    /// Primary activation on a row toggles completion
    pub fn row_primary(&mut self, id: ItemId) -> bool {
        match self.model.toggle_completed(id) {
            Ok(_) => {
                self.sync_notice();
                true
            }
            Err(e) => {
                log::debug!("Toggle ignored: {}", e);
                false
            }
        }
    }

    /// Secondary activation on a row deletes it
    pub fn row_secondary(&mut self, id: ItemId) -> SecondaryOutcome {
        let removed = match self.model.remove(id) {
            Ok(_) => {
                self.buffers.remove(&id);
                self.sync_notice();
                true
            }
            Err(e) => {
                log::debug!("Delete ignored: {}", e);
                false
            }
        };
        SecondaryOutcome {
            removed,
            suppress_default: true,
        }
    }

    /// Edit trigger toggles between entering edit mode and committing
    pub fn edit_trigger(&mut self, id: ItemId) -> EditOutcome {
        match self.edit_state(id) {
            EditState::Viewing => self.begin_edit(id),
            EditState::Editing => self.commit_edit(id),
        }
    }

    /// The editable region lost focus; commits like the edit trigger would
    pub fn edit_focus_lost(&mut self, id: ItemId) -> EditOutcome {
        match self.edit_state(id) {
            EditState::Editing => self.commit_edit(id),
            EditState::Viewing => EditOutcome::Ignored,
        }
    }

    /// Keystrokes in the editable region; kept in the draft only
    pub fn edit_input(&mut self, id: ItemId, text: &str) {
        if let Some(buffer) = self.buffers.get_mut(&id) {
            buffer.draft = text.to_string();
        }
    }

    fn begin_edit(&mut self, id: ItemId) -> EditOutcome {
        let Some(original) = self.model.get(id).map(|item| item.text.clone()) else {
            return EditOutcome::Ignored;
        };
        if self.model.set_editing(id, true).is_err() {
            return EditOutcome::Ignored;
        }
        log::debug!("Item {} entered edit mode", id);
        self.buffers.insert(
            id,
            EditBuffer {
                draft: original.clone(),
                original,
            },
        );
        EditOutcome::Began(EditCue {
            focus: true,
            select_all: true,
        })
    }

    fn commit_edit(&mut self, id: ItemId) -> EditOutcome {
        if self.model.set_editing(id, false).is_err() {
            self.buffers.remove(&id);
            return EditOutcome::Ignored;
        }
        let Some(EditBuffer { original, draft }) = self.buffers.remove(&id) else {
            return EditOutcome::Ignored;
        };
        log::debug!("Item {} left edit mode", id);
        match self.model.update_text(id, &draft) {
            Ok(()) => {
                self.sync_notice();
                EditOutcome::Committed
            }
            Err(ListError::Empty) => {
                log::debug!("Blank edit of item {} reverted to '{}'", id, original);
                EditOutcome::Reverted
            }
            Err(e) => {
                log::warn!("Edit commit failed: {}", e);
                EditOutcome::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::render::ItemRow;
    use crate::store::{MemoryStorage, Store};

    fn controller() -> (InteractionController<MemoryStorage>, MemoryStorage) {
        let backend = MemoryStorage::default();
        let model = ListModel::load(Store::new(backend.clone(), "todos"));
        let controller = InteractionController::new(model, Renderer::new(Locale::English.labels()));
        (controller, backend)
    }

    fn item_rows(controller: &InteractionController<MemoryStorage>) -> Vec<ItemRow> {
        controller
            .rows()
            .into_iter()
            .filter_map(|row| match row {
                Row::Item(row) => Some(row),
                Row::Hint(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_add_and_blank_add() {
        let (mut c, backend) = controller();
        assert!(c.add("   ").is_none());
        assert_eq!(backend.writes(), 0);
        assert!(c.add("a").is_some());
        assert_eq!(item_rows(&c).len(), 1);
    }

    #[test]
    fn test_primary_toggles_secondary_removes() {
        let (mut c, _) = controller();
        let id = c.add("a").unwrap();

        assert!(c.row_primary(id));
        assert!(item_rows(&c)[0].completed);

        let outcome = c.row_secondary(id);
        assert!(outcome.removed);
        assert!(outcome.suppress_default);
        assert!(c.rows().iter().all(Row::is_hint));
    }

    #[test]
    fn test_secondary_on_hint_or_missing_still_suppresses() {
        let (mut c, _) = controller();
        let id = c.add("a").unwrap();
        c.row_secondary(id);
        let outcome = c.row_secondary(id);
        assert!(!outcome.removed);
        assert!(outcome.suppress_default);
    }

    #[test]
    fn test_edit_cycle() {
        let (mut c, backend) = controller();
        let id = c.add("old").unwrap();

        let outcome = c.edit_trigger(id);
        assert_eq!(outcome, EditOutcome::Began(EditCue { focus: true, select_all: true }));
        assert_eq!(item_rows(&c)[0].trigger_label, "Done");
        assert!(item_rows(&c)[0].editing);

        let writes = backend.writes();
        c.edit_input(id, "ne");
        c.edit_input(id, "new");
        assert_eq!(backend.writes(), writes);

        assert_eq!(c.edit_trigger(id), EditOutcome::Committed);
        assert_eq!(c.edit_state(id), EditState::Viewing);
        let row = &item_rows(&c)[0];
        assert_eq!(row.text, "new");
        assert_eq!(row.trigger_label, "Edit");
        assert_eq!(backend.writes(), writes + 1);
    }

    #[test]
    fn test_focus_lost_commits() {
        let (mut c, backend) = controller();
        let id = c.add("old").unwrap();
        c.edit_trigger(id);
        c.edit_input(id, " typed ");

        assert_eq!(c.edit_focus_lost(id), EditOutcome::Committed);
        assert_eq!(backend.get("todos").unwrap(), r#"[{"text":"typed","completed":false}]"#);
        assert_eq!(c.edit_focus_lost(id), EditOutcome::Ignored);
    }

    #[test]
    fn test_gestures_suppressed_while_editing() {
        let (mut c, backend) = controller();
        let id = c.add("a").unwrap();
        c.edit_trigger(id);
        let writes = backend.writes();

        assert!(!c.row_primary(id));
        assert!(!c.row_secondary(id).removed);
        assert_eq!(item_rows(&c).len(), 1);
        assert!(!item_rows(&c)[0].completed);
        assert_eq!(backend.writes(), writes);
    }

    #[test]
    fn test_blank_commit_reverts() {
        let (mut c, backend) = controller();
        let id = c.add("keep me").unwrap();
        c.edit_trigger(id);
        c.edit_input(id, "   ");
        let writes = backend.writes();

        assert_eq!(c.edit_trigger(id), EditOutcome::Reverted);
        assert_eq!(c.edit_state(id), EditState::Viewing);
        assert_eq!(item_rows(&c)[0].text, "keep me");
        assert_eq!(backend.writes(), writes);
        assert!(c.row_primary(id));
    }

    #[test]
    fn test_edit_is_per_item() {
        let (mut c, _) = controller();
        let a = c.add("a").unwrap();
        let b = c.add("b").unwrap();
        c.edit_trigger(a);

        assert!(c.row_primary(b));
        c.edit_input(b, "ignored");
        assert_eq!(c.edit_state(b), EditState::Viewing);
        assert_eq!(c.edit_trigger(a), EditOutcome::Committed);
    }

    #[test]
    fn test_edit_state_follows_model_flag() {
        let (mut c, _) = controller();
        let id = c.add("a").unwrap();
        assert_eq!(c.edit_state(id), EditState::Viewing);
        assert!(!c.model().is_editing(id));

        c.edit_trigger(id);
        assert_eq!(c.edit_state(id), EditState::Editing);
        assert!(c.model().is_editing(id));

        c.edit_focus_lost(id);
        assert_eq!(c.edit_state(id), EditState::Viewing);
        assert!(!c.model().is_editing(id));
        assert!(c.buffers.is_empty());
    }

    #[test]
    fn test_save_failure_notice() {
        let (mut c, backend) = controller();
        backend.set_fail_writes(true);

        let id = c.add("a").unwrap();
        let notice = c.notice().unwrap().to_string();
        assert!(notice.starts_with("Changes could not be saved"));
        assert_eq!(item_rows(&c)[0].text, "a");

        backend.set_fail_writes(false);
        c.row_primary(id);
        assert!(c.notice().is_none());

        backend.set_fail_writes(true);
        c.row_primary(id);
        c.dismiss_notice();
        assert!(c.notice().is_none());
    }
}
