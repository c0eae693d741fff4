//! Todo List Component
//!
//! Keyed list of projected rows: items, or the hint rows when empty.

use leptos::prelude::*;

use crate::components::{HintItem, TodoRow};
use crate::context::TodoContext;
use crate::render::Row;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    view! {
        <ul id="todo-list" class="todo-list" on:contextmenu=|ev| ev.prevent_default()>
            <For
                each=move || ctx.rows.get()
                // Content is part of the key so any change re-creates the row
                key=|row| row.key()
                children=move |row| match row {
                    Row::Item(row) => view! { <TodoRow row=row /> }.into_any(),
                    Row::Hint(hint) => view! { <HintItem hint=hint /> }.into_any(),
                }
            />
        </ul>
    }
}
