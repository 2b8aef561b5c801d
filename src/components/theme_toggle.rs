use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Light/dark switch; the body attribute follows the store
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_ui_store();

    let toggle = move |_| {
        store.theme().update(|t| *t = t.toggled());
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            style:background=move || store.theme().get().toggle_background()
            on:click=toggle
        >
            {move || store.theme().get().toggle_label()}
        </button>
    }
}
