//! Price Calculator Panel
//!
//! Price + tax rate in, USD breakdown out.

use leptos::prelude::*;

use crate::components::ErrorText;
use crate::pricing::{calculate_total, format_usd, TaxBreakdown};

#[component]
pub fn PriceCalculator() -> impl IntoView {
    let (price, set_price) = signal(String::new());
    let (rate, set_rate) = signal(String::new());
    let (result, set_result) = signal::<Option<Result<TaxBreakdown, String>>>(None);

    let calculate = move |_| {
        let (p, r) = (price.get(), rate.get());
        log::debug!("[PRICE] price={:?} rate={:?}", p, r);
        set_result.set(Some(calculate_total(&p, &r).map_err(|e| e.to_string())));
    };

    view! {
        <div class="demo-card">
            <h3>"Price Calculator"</h3>
            <div class="input-row">
                <input
                    type="number"
                    id="price"
                    step="0.01"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    id="taxRate"
                    step="0.1"
                    placeholder="Tax rate (%)"
                    prop:value=move || rate.get()
                    on:input=move |ev| set_rate.set(event_target_value(&ev))
                />
                <button on:click=calculate>"Calculate Total"</button>
            </div>
            <div id="totalResult" class="result">
                {move || result.get().map(|r| match r {
                    Ok(b) => view! {
                        <div style="background: #e8f5e8; padding: 1rem; border-radius: 4px;">
                            <strong>"Price:"</strong> " " {format_usd(b.price)} <br />
                            <strong>"Tax (" {b.rate_label()} "%):"</strong> " " {format_usd(b.tax)} <br />
                            <strong style="font-size: 1.2em; color: #27ae60;">
                                "Total: " {format_usd(b.total)}
                            </strong>
                        </div>
                    }.into_any(),
                    Err(message) => view! { <ErrorText message=message /> }.into_any(),
                })}
            </div>
        </div>
    }
}
