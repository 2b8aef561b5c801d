use leptos::prelude::*;

use crate::classify::{classify_number, NumberReport};
use crate::components::ErrorText;

/// Positive / negative / zero, with parity for integers
#[component]
pub fn NumberChecker() -> impl IntoView {
    let (number, set_number) = signal(String::new());
    let (result, set_result) = signal::<Option<Result<NumberReport, String>>>(None);

    let check = move |_| {
        let raw = number.get();
        log::debug!("[NUMBER] checking {:?}", raw);
        set_result.set(Some(classify_number(&raw).map_err(|e| e.to_string())));
    };

    view! {
        <div class="demo-card">
            <h3>"Number Type Checker"</h3>
            <div class="input-row">
                <input
                    type="number"
                    id="userNumber"
                    step="any"
                    placeholder="Enter a number"
                    prop:value=move || number.get()
                    on:input=move |ev| set_number.set(event_target_value(&ev))
                />
                <button on:click=check>"Check Number"</button>
            </div>
            <div id="numberResult" class="result">
                {move || result.get().map(|r| match r {
                    Ok(report) => view! {
                        <span style="color: #2c3e50;">
                            {report.sign.emoji()} " The number "
                            <strong>{report.display_value()}</strong> " is "
                            <strong>{report.description()}</strong>
                        </span>
                    }.into_any(),
                    Err(message) => view! { <ErrorText message=message /> }.into_any(),
                })}
            </div>
        </div>
    }
}
