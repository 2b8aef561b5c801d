//! Light / Dark Theme

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for `data-theme` on `<body>`; light removes the attribute
    pub fn body_attribute(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    /// Toggle button label, naming the theme it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Toggle Dark Mode",
            Theme::Dark => "☀️ Toggle Light Mode",
        }
    }

    pub fn toggle_background(self) -> &'static str {
        match self {
            Theme::Light => "#3498db",
            Theme::Dark => "#f39c12",
        }
    }
}

/// Reflect the theme on the document body.
pub fn apply_to_body(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[THEME] document unavailable");
        return;
    };
    let body = match document.query_selector("body") {
        Ok(Some(body)) => body,
        Ok(None) => {
            log::warn!("[THEME] document has no body");
            return;
        }
        Err(err) => {
            log::warn!("[THEME] body lookup failed: {:?}", err);
            return;
        }
    };
    let result = match theme.body_attribute() {
        Some(value) => body.set_attribute("data-theme", value),
        None => body.remove_attribute("data-theme"),
    };
    if let Err(err) = result {
        log::warn!("[THEME] failed to set data-theme: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.toggled(), Theme::Dark);
        assert_eq!(theme.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_dark_presentation() {
        assert_eq!(Theme::Dark.body_attribute(), Some("dark"));
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Toggle Light Mode");
        assert_eq!(Theme::Light.body_attribute(), None);
        assert_eq!(Theme::Light.toggle_background(), "#3498db");
    }
}
