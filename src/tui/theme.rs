//! Colors for headers and the highlighted line.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ResolvedConfig;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub highlight: Color,
    pub header: Color,
    pub rule: Color,
    pub glyph: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: Color::Cyan,
            header: Color::Yellow,
            rule: Color::DarkGray,
            glyph: Color::DarkGray,
        }
    }
}

/// Parse a color name such as `"cyan"` or `"#ff8800"`, falling back to
/// `fallback` with a warning when the name is unknown.
fn parse_color(name: Option<&str>, fallback: Color) -> Color {
    match name {
        None => fallback,
        Some(name) => Color::from_str(name).unwrap_or_else(|_| {
            warn!("Unknown color {:?}, using {:?}", name, fallback);
            fallback
        }),
    }
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let defaults = Theme::default();
        Self {
            highlight: parse_color(config.highlight_color.as_deref(), defaults.highlight),
            header: parse_color(config.header_color.as_deref(), defaults.header),
            ..defaults
        }
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub fn header_style(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.header);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn rule_style(&self) -> Style {
        Style::default().fg(self.rule)
    }

    pub fn glyph_style(&self) -> Style {
        Style::default().fg(self.glyph)
    }
}
