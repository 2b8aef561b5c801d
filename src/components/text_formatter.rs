use leptos::prelude::*;

use crate::components::ErrorText;
use crate::text::{format_text, TextReport};

/// Shows a line of text through several string transformations
#[component]
pub fn TextFormatter() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (result, set_result) = signal::<Option<Result<TextReport, String>>>(None);

    let format = move |_| {
        let raw = text.get();
        log::debug!("[TEXT] formatting {} chars", raw.chars().count());
        set_result.set(Some(format_text(&raw).map_err(|e| e.to_string())));
    };

    view! {
        <div class="demo-card">
            <h3>"Text Formatter"</h3>
            <div class="input-row">
                <input
                    type="text"
                    id="textInput"
                    placeholder="Type something..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <button on:click=format>"Format Text"</button>
            </div>
            <div id="textResult" class="result">
                {move || result.get().map(|r| match r {
                    Ok(report) => view! {
                        <div style="background: #e3f2fd; padding: 1rem; border-radius: 4px;">
                            <strong>"Original:"</strong> " \"" {report.original} "\"" <br />
                            <strong>"Uppercase:"</strong> " " {report.upper} <br />
                            <strong>"Lowercase:"</strong> " " {report.lower} <br />
                            <strong>"Capitalized:"</strong> " " {report.capitalized} <br />
                            <strong>"Reversed:"</strong> " " {report.reversed} <br />
                            <strong>"Word Count:"</strong> " " {report.word_count} " words"
                        </div>
                    }.into_any(),
                    Err(message) => view! { <ErrorText message=message /> }.into_any(),
                })}
            </div>
        </div>
    }
}
