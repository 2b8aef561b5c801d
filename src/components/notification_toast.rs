use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Fixed-position toast for the current notification
#[component]
pub fn NotificationToast() -> impl IntoView {
    let store = use_ui_store();

    view! {
        {move || store.notification().get().map(|n| {
            let class = n.class();
            let background = n.kind.background();
            let animation = n.animation();
            let message = n.message;
            view! {
                <div class=class style:background=background style:animation=animation>
                    {message}
                </div>
            }
        })}
    }
}
