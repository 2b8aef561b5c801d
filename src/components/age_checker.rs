//! Age Checker Panel
//!
//! Reads an age and shows its category, or a validation message.

use leptos::prelude::*;

use crate::classify::{classify_age, AgeReport};
use crate::components::ErrorText;

#[component]
pub fn AgeChecker() -> impl IntoView {
    let (age, set_age) = signal(String::new());
    let (result, set_result) = signal::<Option<Result<AgeReport, String>>>(None);

    let check = move |_| {
        let raw = age.get();
        log::debug!("[AGE] checking {:?}", raw);
        set_result.set(Some(classify_age(&raw).map_err(|e| e.to_string())));
    };

    view! {
        <div class="demo-card">
            <h3>"Age Category Checker"</h3>
            <div class="input-row">
                <input
                    type="number"
                    id="userAge"
                    placeholder="Enter your age"
                    prop:value=move || age.get()
                    on:input=move |ev| set_age.set(event_target_value(&ev))
                />
                <button on:click=check>"Check Age"</button>
            </div>
            <div id="ageResult" class="result">
                {move || result.get().map(|r| match r {
                    Ok(report) => view! {
                        <span style={format!("color: {}; font-weight: bold;", report.category.color())}>
                            "At " {report.age} " years old, you are a "
                            <strong>{report.category.label()}</strong>
                        </span>
                    }.into_any(),
                    Err(message) => view! { <ErrorText message=message /> }.into_any(),
                })}
            </div>
        </div>
    }
}
