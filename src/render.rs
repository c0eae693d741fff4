//! Row Projection
//!
//! Pure projection of the list into display rows. Nothing here is read back
//! into the model.

use crate::config::{HintText, Labels};
use crate::list_model::ListModel;
use crate::models::{Item, ItemId};
use crate::store::StorageBackend;

/// A real list entry as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    pub editing: bool,
    pub trigger_label: &'static str,
}

/// Instructional placeholder shown only for an empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintRow {
    pub before: &'static str,
    pub emphasis: &'static str,
    pub after: &'static str,
}

impl From<&HintText> for HintRow {
    fn from(hint: &HintText) -> Self {
        Self {
            before: hint.before,
            emphasis: hint.emphasis,
            after: hint.after,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Item(ItemRow),
    Hint(HintRow),
}

impl Row {
    pub fn is_hint(&self) -> bool {
        matches!(self, Row::Hint(_))
    }

    /// Key for keyed list rendering; changes whenever the row's content does
    pub fn key(&self) -> (Option<ItemId>, String, bool, bool) {
        match self {
            Row::Item(row) => (Some(row.id), row.text.clone(), row.completed, row.editing),
            Row::Hint(hint) => (None, format!("{}{}{}", hint.before, hint.emphasis, hint.after), false, false),
        }
    }
}

/// Builds rows using the configured labels
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    labels: Labels,
}

impl Renderer {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// One row per item, in order. `(id, item, editing)` as yielded by `ListModel::iter`.
    pub fn render<'a>(&self, items: impl IntoIterator<Item = (ItemId, &'a Item, bool)>) -> Vec<Row> {
        items
            .into_iter()
            .map(|(id, item, editing)| {
                Row::Item(ItemRow {
                    id,
                    text: item.text.clone(),
                    completed: item.completed,
                    editing,
                    trigger_label: if editing { self.labels.commit } else { self.labels.edit },
                })
            })
            .collect()
    }

    /// The fixed hint sequence
    pub fn render_empty_state(&self) -> Vec<Row> {
        self.labels.hints.iter().map(|hint| Row::Hint(hint.into())).collect()
    }

    /// Hints only when there is no real row; otherwise strip every hint
    pub fn reconcile_hints(&self, mut rows: Vec<Row>) -> Vec<Row> {
        if rows.iter().all(Row::is_hint) {
            return self.render_empty_state();
        }
        rows.retain(|row| !row.is_hint());
        rows
    }

    /// Render followed by hint reconciliation
    pub fn project<B: StorageBackend>(&self, model: &ListModel<B>) -> Vec<Row> {
        self.reconcile_hints(self.render(model.iter()))
    }
}
