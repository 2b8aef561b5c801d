//! UI Components
//!
//! One Leptos component per demo panel.

mod age_checker;
mod color_box;
mod countdown_panel;
mod error_text;
mod grade_report;
mod header_editor;
mod item_list;
mod multiplication_table;
mod notification_toast;
mod number_checker;
mod price_calculator;
mod text_formatter;
mod theme_toggle;

pub use age_checker::AgeChecker;
pub use color_box::ColorBox;
pub use countdown_panel::CountdownPanel;
pub use error_text::ErrorText;
pub use grade_report::GradeReportPanel;
pub use header_editor::HeaderEditor;
pub use item_list::ItemListPanel;
pub use multiplication_table::MultiplicationTablePanel;
pub use notification_toast::NotificationToast;
pub use number_checker::NumberChecker;
pub use price_calculator::PriceCalculator;
pub use text_formatter::TextFormatter;
pub use theme_toggle::ThemeToggle;
