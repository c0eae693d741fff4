//! Application Context
//!
//! Shared handle to the interaction controller, provided via Leptos Context API.
//! Every gesture goes through here so the projected rows are refreshed once
//! the controller has finished with it.

use leptos::prelude::*;

use crate::config::Labels;
use crate::controller::{EditCue, EditOutcome, InteractionController};
use crate::models::ItemId;
use crate::render::Row;
use crate::store::LocalStorage;

pub type Controller = InteractionController<LocalStorage>;

#[derive(Clone, Copy)]
pub struct TodoContext {
    controller: StoredValue<Controller>,
    /// Projected rows - read
    pub rows: ReadSignal<Vec<Row>>,
    /// Projected rows - write
    set_rows: WriteSignal<Vec<Row>>,
    /// Save-failure notice - read
    pub notice: ReadSignal<Option<String>>,
    /// Save-failure notice - write
    set_notice: WriteSignal<Option<String>>,
    /// Focus/selection request for a row that just entered edit mode
    cue: RwSignal<Option<(ItemId, EditCue)>>,
    pub labels: Labels,
}

impl TodoContext {
    pub fn new(controller: Controller, labels: Labels) -> Self {
        let (rows, set_rows) = signal(controller.rows());
        let (notice, set_notice) = signal(controller.notice().map(str::to_string));
        Self {
            controller: StoredValue::new(controller),
            rows,
            set_rows,
            notice,
            set_notice,
            cue: RwSignal::new(None),
            labels,
        }
    }

    /// Run a gesture against the controller without re-projecting
    fn run<R>(&self, gesture: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        let mut result = None;
        self.controller.update_value(|controller| result = Some(gesture(controller)));
        result
    }

    /// Run a gesture, then re-project rows and the notice
    fn dispatch<R>(&self, gesture: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        let result = self.run(gesture);
        self.refresh();
        result
    }

    fn refresh(&self) {
        self.controller.with_value(|controller| {
            self.set_rows.set(controller.rows());
            self.set_notice.set(controller.notice().map(str::to_string));
        });
    }

    /// Add-trigger; returns true when the input should be cleared
    pub fn add(&self, text: &str) -> bool {
        self.dispatch(|c| c.add(text)).flatten().is_some()
    }

    pub fn primary(&self, id: ItemId) {
        self.dispatch(|c| c.row_primary(id));
    }

    /// Secondary activation; returns true when the default menu must be suppressed
    pub fn secondary(&self, id: ItemId) -> bool {
        let Some(outcome) = self.run(|c| c.row_secondary(id)) else {
            return true;
        };
        if outcome.removed {
            self.refresh();
        }
        outcome.suppress_default
    }

    pub fn edit_trigger(&self, id: ItemId) {
        let outcome = self.run(|c| c.edit_trigger(id));
        if let Some(EditOutcome::Began(cue)) = outcome {
            self.cue.set(Some((id, cue)));
        }
        self.refresh();
    }

    /// Typing only updates the draft; the row is not re-rendered
    pub fn edit_input(&self, id: ItemId, text: &str) {
        self.run(|c| c.edit_input(id, text));
    }

    pub fn focus_lost(&self, id: ItemId) {
        if let Some(EditOutcome::Ignored) | None = self.run(|c| c.edit_focus_lost(id)) {
            return;
        }
        self.refresh();
    }

    pub fn dismiss_notice(&self) {
        self.dispatch(|c| c.dismiss_notice());
    }

    /// Take the pending edit cue if it belongs to `id`
    pub fn take_cue(&self, id: ItemId) -> Option<EditCue> {
        match self.cue.get_untracked() {
            Some((cue_id, cue)) if cue_id == id => {
                self.cue.set(None);
                Some(cue)
            }
            _ => None,
        }
    }
}
