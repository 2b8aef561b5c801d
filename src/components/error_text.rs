use leptos::prelude::*;

/// Inline validation message in a result container
#[component]
pub fn ErrorText(#[prop(into)] message: String) -> impl IntoView {
    view! { <span class="error-text" style="color: red;">{message}</span> }
}
