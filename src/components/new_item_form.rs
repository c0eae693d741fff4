//! New Item Form Component
//!
//! Text input plus add button.

use leptos::prelude::*;

use crate::context::TodoContext;

/// Form for appending new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                id="todo-input"
                type="text"
                placeholder=ctx.labels.placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="add-button" type="submit">{ctx.labels.add}</button>
        </form>
    }
}
