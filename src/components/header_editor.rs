//! Editable Header
//!
//! Prompts for replacement text and recolours the header.

use leptos::prelude::*;

use crate::palette;
use crate::store::{notify_success, use_notifier};

const INITIAL_HEADER: &str = "Welcome to DOM Manipulation!";

/// Blocking `window.prompt`; `None` on cancel or when no window is available
fn prompt(message: &str, default: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message_and_default(message, default) {
        Ok(answer) => answer,
        Err(err) => {
            log::warn!("[HEADER] prompt failed: {:?}", err);
            None
        }
    }
}

#[component]
pub fn HeaderEditor() -> impl IntoView {
    let notifier = use_notifier();
    let (header, set_header) = signal(INITIAL_HEADER.to_string());
    let (color, set_color) = signal::<Option<&'static str>>(None);

    let change_header = move |_| {
        let Some(text) = prompt("Enter new header text:", &header.get_untracked()) else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }
        set_header.set(text);
        set_color.set(Some(palette::random_color()));
        notify_success(notifier, "Header updated!");
    };

    view! {
        <div class="demo-card">
            <h3 id="dynamicHeader" style:color=move || color.get().unwrap_or("inherit")>
                {move || header.get()}
            </h3>
            <button on:click=change_header>"Change Header Text"</button>
        </div>
    }
}
