//! Runtime Configuration
//!
//! Timings and sizes for the demo panels. Defaults match the classic page;
//! any subset can be overridden from a JSON block in index.html:
//!
//! ```html
//! <script id="demo-config" type="application/json">{ "countdown_from": 5 }</script>
//! ```

use serde::{Deserialize, Serialize};

use crate::countdown::CountdownTimings;
use crate::error::DemoResult;
use crate::notification::NotificationTimings;

const CONFIG_ELEMENT_ID: &str = "demo-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub countdown_from: u32,
    pub tick_ms: u32,
    pub completion_delay_ms: u32,
    pub notification_ms: u32,
    pub notification_exit_ms: u32,
    pub item_fade_ms: u32,
    pub color_pulse_ms: u32,
    pub table_size: u32,
    /// Locale for item timestamps
    pub locale: String,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            countdown_from: 10,
            tick_ms: 1000,
            completion_delay_ms: 1000,
            notification_ms: 3000,
            notification_exit_ms: 300,
            item_fade_ms: 300,
            color_pulse_ms: 200,
            table_size: 5,
            locale: "en-US".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> DemoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `#demo-config` from the document, falling back to defaults.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .map(|el| el.inner_html());
        Self::from_page(text.as_deref())
    }

    /// Contents of the config script tag; missing, blank or malformed means defaults.
    fn from_page(text: Option<&str>) -> Self {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return Self::default();
        };

        match Self::from_json(text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("[CONFIG] {}; using defaults", err);
                Self::default()
            }
        }
    }

    pub fn countdown(&self) -> CountdownTimings {
        CountdownTimings {
            from: self.countdown_from,
            tick_ms: self.tick_ms,
            completion_delay_ms: self.completion_delay_ms,
        }
    }

    pub fn notifications(&self) -> NotificationTimings {
        NotificationTimings {
            display_ms: self.notification_ms,
            exit_ms: self.notification_exit_ms,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;

    #[test]
    fn test_partial_override() {
        let config = DemoConfig::from_json(r#"{ "countdown_from": 5, "locale": "de-DE" }"#).unwrap();
        assert_eq!(config.countdown_from, 5);
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.tick_ms, 1000);
        assert_eq!(config.table_size, 5);
        assert_eq!(config.countdown().from, 5);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_bad_json() {
        let err = DemoConfig::from_json("{ countdown_from: }").unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));
        assert!(err.to_string().starts_with("invalid demo config"));
    }

    #[test]
    fn test_page_script_fallbacks() {
        assert_eq!(DemoConfig::from_page(None), DemoConfig::default());
        assert_eq!(DemoConfig::from_page(Some("  \n ")), DemoConfig::default());
        assert_eq!(DemoConfig::from_page(Some("{ nope")), DemoConfig::default());

        let config = DemoConfig::from_page(Some("\n  { \"table_size\": 7 }\n"));
        assert_eq!(config.table_size, 7);
    }

    #[test]
    fn test_log_level() {
        let mut config = DemoConfig::default();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
