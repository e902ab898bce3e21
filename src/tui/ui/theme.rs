use crate::config::UiConfig;
use ratatui::style::Color;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(62),
        }
    }
}

impl Theme {
    /// Accepts colour names, `#rrggbb` and 256-colour indices; anything else
    /// keeps the default.
    pub fn from_config(ui: &UiConfig) -> Self {
        match Color::from_str(&ui.border_color) {
            Ok(border) => Self { border },
            Err(_) => {
                tracing::warn!("Unknown border colour {:?}, using default", ui.border_color);
                Self::default()
            }
        }
    }
}
