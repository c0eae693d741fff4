//! Todo App
//!
//! Root component: wires config, storage, model, renderer and controller
//! together and provides them to the components below.

use leptos::prelude::*;

use crate::components::{NewItemForm, NoticeBar, TodoList};
use crate::config::{Locale, WidgetConfig};
use crate::context::TodoContext;
use crate::controller::InteractionController;
use crate::list_model::ListModel;
use crate::render::Renderer;
use crate::store::{LocalStorage, Store};

/// Locale from `navigator.language`, English when unknown
fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|tag| Locale::from_language_tag(&tag))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::with_locale(browser_locale());
    let labels = config.labels();
    log::info!("Starting with storage key '{}' and locale {:?}", config.storage_key, config.locale);

    let model = ListModel::load(Store::new(LocalStorage, config.storage_key.clone()));
    let controller = InteractionController::new(model, Renderer::new(labels));

    provide_context(TodoContext::new(controller, labels));

    view! {
        <main class="todo-app">
            <h1>{labels.title}</h1>
            <NoticeBar />
            <TodoList />
            <NewItemForm />
        </main>
    }
}
