//! # Pane View
//!
//! Draws the visible window of one pane. Band panes get a jump glyph in
//! front of each row; the current line is emphasised when the pane is
//! highlighted (focused).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::core::pane::{ListPane, jump_glyph};
use crate::tui::component::Component;
use crate::tui::components::fit;
use crate::tui::theme::Theme;

pub struct PaneView<'a> {
    pub pane: &'a ListPane,
    pub theme: &'a Theme,
    /// Columns on the right edge given to the separator.
    pub separator: u16,
}

impl<'a> PaneView<'a> {
    pub fn new(pane: &'a ListPane, theme: &'a Theme, separator: u16) -> Self {
        Self {
            pane,
            theme,
            separator,
        }
    }
}

impl Component for PaneView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = area.intersection(frame.area());
        let width = area.width.saturating_sub(self.separator);
        let margin = self.pane.margin().min(width);
        let text_width = (width - margin) as usize;
        let buf = frame.buffer_mut();

        for (row, (index, line)) in self.pane.visible_lines().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let y = area.y + row as u16;

            if margin > 0 {
                let glyph = jump_glyph(row).map(String::from).unwrap_or_default();
                buf.set_string(
                    area.x,
                    y,
                    fit(&glyph, margin as usize),
                    self.theme.glyph_style(),
                );
            }

            let style = if self.pane.is_highlighted() && index == self.pane.index() {
                self.theme.highlight_style()
            } else {
                Style::default()
            };
            buf.set_string(area.x + margin, y, fit(line, text_width), style);
        }
    }
}
