//! Todo Row Component
//!
//! One list row. Click toggles completion, right-click deletes, and the edit
//! button switches the text into a contenteditable region.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::render::{HintRow, ItemRow};

/// Select everything inside `node`
fn select_contents(node: &web_sys::Node) {
    if let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) {
        let _ = selection.select_all_children(node);
    }
}

#[component]
pub fn TodoRow(row: ItemRow) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let id = row.id;
    let editing = row.editing;
    let text_ref = NodeRef::<leptos::html::Span>::new();

    // Honour the focus/select request once the editable span is mounted
    Effect::new(move |_| {
        let Some(span) = text_ref.get() else { return };
        if let Some(cue) = ctx.take_cue(id) {
            if cue.focus {
                let _ = span.focus();
            }
            if cue.select_all {
                select_contents(&span);
            }
        }
    });

    view! {
        <li
            class="todo-item"
            class:completed=row.completed
            class:editing=editing
            on:click=move |_| ctx.primary(id)
            on:contextmenu=move |ev| {
                if ctx.secondary(id) {
                    ev.prevent_default();
                }
            }
        >
            <span
                class="todo-text"
                node_ref=text_ref
                contenteditable=if editing { "true" } else { "false" }
                on:input=move |ev| {
                    let text = event_target::<web_sys::HtmlElement>(&ev).text_content().unwrap_or_default();
                    ctx.edit_input(id, &text);
                }
                on:blur=move |_| ctx.focus_lost(id)
                on:keydown=move |ev| {
                    if editing && ev.key() == "Enter" {
                        ev.prevent_default();
                        ctx.edit_trigger(id);
                    }
                }
            >
                {row.text}
            </span>

            // Keep focus in the editable span so pressing the button commits
            <button
                class="edit-button"
                on:mousedown=|ev| ev.prevent_default()
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.edit_trigger(id);
                }
            >
                {row.trigger_label}
            </button>
        </li>
    }
}

/// Non-interactive instructional row
#[component]
pub fn HintItem(hint: HintRow) -> impl IntoView {
    view! {
        <li class="tutorial">
            {hint.before}
            {(!hint.emphasis.is_empty()).then(|| view! { <strong>{hint.emphasis}</strong> })}
            {hint.after}
        </li>
    }
}
