use leptos::prelude::*;

use crate::config::DemoConfig;
use crate::palette;
use crate::scheduler::BrowserScheduler;

/// Click to recolour; the box pulses briefly on each click
#[component]
pub fn ColorBox() -> impl IntoView {
    let pulse_ms = expect_context::<DemoConfig>().color_pulse_ms;
    let (background, set_background) = signal::<Option<&'static str>>(None);
    let (caption, set_caption) = signal("Click me to change color!");
    let (scaled, set_scaled) = signal(false);

    let recolor = move |_| {
        let next = palette::random_color();
        log::debug!("[COLOR] box -> {}", next);
        set_background.set(Some(next));
        set_caption.set("Color changed! Click me again!");
        palette::pulse(&BrowserScheduler, pulse_ms, move |on| set_scaled.set(on));
    };

    view! {
        <div
            id="colorBox"
            class="color-box"
            style:background-color=move || background.get().unwrap_or("#ecf0f1")
            style:transform=move || if scaled.get() { "scale(1.05)" } else { "scale(1)" }
            on:click=recolor
        >
            <p>{move || caption.get()}</p>
        </div>
    }
}
