//! Countdown Panel
//!
//! Renders the frames of a [`CountdownSequencer`]. Pressing start again
//! restarts from the top.

use leptos::prelude::*;

use crate::config::DemoConfig;
use crate::countdown::{CountdownFrame, CountdownSequencer};
use crate::scheduler::BrowserScheduler;

#[component]
pub fn CountdownPanel() -> impl IntoView {
    let config = expect_context::<DemoConfig>();
    let sequencer = StoredValue::new_local(CountdownSequencer::new(BrowserScheduler, config.countdown()));
    let (frame, set_frame) = signal::<Option<CountdownFrame>>(None);

    let start = move |_| {
        sequencer.with_value(|seq| {
            log::debug!("[COUNTDOWN] start pressed in state {:?}", seq.state());
            seq.start(move |f| set_frame.set(Some(f)));
        });
    };

    view! {
        <div class="demo-card">
            <h3>"Countdown Timer"</h3>
            <button on:click=start>"Start Countdown"</button>
            <div id="countdownResult" class="result">
                {move || frame.get().map(|f| match f {
                    CountdownFrame::Completed => view! {
                        <div style="text-align: center; color: #27ae60; font-weight: bold;">
                            {f.text()}
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div
                            style="text-align: center; font-size: 1.5em; color: #e74c3c;"
                            class:pulse=f.pulses()
                        >
                            {f.text()}
                        </div>
                    }.into_any(),
                })}
            </div>
        </div>
    }
}
