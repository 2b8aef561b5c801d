//! Dynamic Item List Panel
//!
//! Add rows, click a row to drop it, or fade out the last one.

use leptos::prelude::*;

use crate::config::DemoConfig;
use crate::items::{fade_out_last, ItemList, ListEntry};
use crate::scheduler::BrowserScheduler;
use crate::store::{notify_error, notify_success, use_notifier, use_ui_store, UiStateStoreFields};

/// Current wall-clock time, e.g. `3:04:05 PM`
fn local_time(locale: &str) -> String {
    js_sys::Date::new_0().to_locale_time_string(locale).into()
}

#[component]
pub fn ItemListPanel() -> impl IntoView {
    let store = use_ui_store();
    let notifier = use_notifier();
    let config = expect_context::<DemoConfig>();
    let locale = StoredValue::new(config.locale.clone());
    let fade_ms = config.item_fade_ms;

    let add_item = move |_| {
        let added_at = locale.with_value(|l| local_time(l));
        let label = store.items().write().add(&added_at).label.clone();
        log::debug!("[ITEMS] added {:?}", label);
        notify_success(notifier, "New item added!");
    };

    let remove_last = move |_| {
        let outcome = fade_out_last(
            &BrowserScheduler,
            fade_ms,
            move |edit: &mut dyn FnMut(&mut ItemList)| edit(&mut *store.items().write()),
            move || notify_success(notifier, "Last item removed!"),
        );
        if let Err(err) = outcome {
            notify_error(notifier, &err.to_string());
        }
    };

    view! {
        <div class="demo-card">
            <h3>"Dynamic List"</h3>
            <div class="input-row">
                <button on:click=add_item>"Add Item"</button>
                <button on:click=remove_last>"Remove Last Item"</button>
            </div>
            <ul id="itemList" class="item-list">
                <For
                    each=move || store.items().with(|list| list.entries().to_vec())
                    key=|entry| (entry.id, entry.removing)
                    children=move |entry| view! { <ItemRow entry=entry /> }
                />
            </ul>
        </div>
    }
}

/// One list row; clicking removes it
#[component]
fn ItemRow(entry: ListEntry) -> impl IntoView {
    let store = use_ui_store();
    let notifier = use_notifier();
    let (hovered, set_hovered) = signal(false);
    let id = entry.id;

    let remove = move |_| {
        let removed = store.items().write().remove(id);
        if removed {
            log::debug!("[ITEMS] removed #{}", id);
            notify_success(notifier, "Item removed!");
        }
    };

    view! {
        <li
            class="list-item"
            style:transform=move || if hovered.get() { "translateX(10px)" } else { "translateX(0)" }
            style:animation=if entry.removing { "fadeOut 0.3s ease-out forwards" } else { "none" }
            on:click=remove
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            {entry.label}
        </li>
    }
}
