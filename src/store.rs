//! Page-Wide UI State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Created once by
//! `App` at page load and handed to panels through context; it lives until
//! the page unloads.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::items::ItemList;
use crate::notification::{Notification, Notifier};
use crate::scheduler::BrowserScheduler;
use crate::theme::Theme;

/// State shared across panels, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub theme: Theme,
    /// Backing model of the dynamic list
    pub items: ItemList,
    /// The visible toast, if any
    pub notification: Option<Notification>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Browser-backed notifier, stored locally since it holds `Rc`s
pub type PageNotifier = StoredValue<Notifier<BrowserScheduler>, LocalStorage>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Get the notifier from context
pub fn use_notifier() -> PageNotifier {
    expect_context::<PageNotifier>()
}

/// Show a success toast
pub fn notify_success(notifier: PageNotifier, message: &str) {
    notifier.with_value(|n| n.success(message));
}

/// Show an error toast
pub fn notify_error(notifier: PageNotifier, message: &str) {
    notifier.with_value(|n| n.error(message));
}
