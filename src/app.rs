//! Basics Demo App
//!
//! Main page component: four sections of independent demo panels plus the
//! notification toast.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AgeChecker, ColorBox, CountdownPanel, GradeReportPanel, HeaderEditor, ItemListPanel,
    MultiplicationTablePanel, NotificationToast, NumberChecker, PriceCalculator, TextFormatter,
    ThemeToggle,
};
use crate::config::DemoConfig;
use crate::notification::Notifier;
use crate::scheduler::BrowserScheduler;
use crate::store::{UiState, UiStateStoreFields, UiStore};
use crate::theme;

#[component]
pub fn App(config: DemoConfig) -> impl IntoView {
    // State
    let store: UiStore = Store::new(UiState::default());
    let notifier = Notifier::new(BrowserScheduler, config.notifications(), move |n| {
        store.notification().set(n)
    });

    // Provide context to all children
    provide_context(store);
    provide_context(StoredValue::new_local(notifier));
    provide_context(config);

    // Mirror the theme onto <body data-theme>
    Effect::new(move |_| {
        let current = store.theme().get();
        log::info!("[APP] theme -> {:?}", current);
        theme::apply_to_body(current);
    });

    view! {
        <div class="container">
            <header class="page-header">
                <h1>"Language Basics Playground"</h1>
                <ThemeToggle />
            </header>

            <section class="demo-section">
                <h2>"🎯 Part 1: Basics"</h2>
                <AgeChecker />
                <NumberChecker />
            </section>

            <section class="demo-section">
                <h2>"❤️ Part 2: Functions"</h2>
                <PriceCalculator />
                <TextFormatter />
            </section>

            <section class="demo-section">
                <h2>"🔁 Part 3: Loops"</h2>
                <MultiplicationTablePanel />
                <GradeReportPanel />
                <CountdownPanel />
            </section>

            <section class="demo-section">
                <h2>"🌐 Part 4: DOM Manipulation"</h2>
                <HeaderEditor />
                <ColorBox />
                <ItemListPanel />
            </section>
        </div>

        <NotificationToast />
    }
}
