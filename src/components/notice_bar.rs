//! Notice Bar Component
//!
//! Non-fatal notice shown while the list cannot be saved.

use leptos::prelude::*;

use crate::context::TodoContext;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice-bar" role="status">
                <span class="notice-text">{message}</span>
                <button class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
