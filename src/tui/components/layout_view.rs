//! # Layout View
//!
//! Chrome around the panes of one layout:
//!
//! ```text
//! 1: bands            │2: albums
//! ────────────────────┼───────────────────
//! 1 Air               │Akuma No Uta
//! 2 Boris             │Pink
//! ────────────────────┴───────────────────
//! Boris: 3 albums
//! ```
//!
//! Pane regions come from `Layout::resize`; this only paints them.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::layout::{BOTTOM_MARGIN, Layout, TOP_MARGIN};
use crate::tui::component::Component;
use crate::tui::components::{PaneView, fit};
use crate::tui::theme::Theme;

pub struct LayoutView<'a> {
    pub layout: &'a Layout,
    pub theme: &'a Theme,
}

impl<'a> LayoutView<'a> {
    pub fn new(layout: &'a Layout, theme: &'a Theme) -> Self {
        Self { layout, theme }
    }

    /// Columns where a vertical separator runs (right edge of every pane
    /// but the last).
    fn separators(&self) -> Vec<u16> {
        let panes = self.layout.panes();
        panes
            .iter()
            .take(panes.len().saturating_sub(1))
            .filter(|pane| pane.region().width > 0)
            .map(|pane| pane.region().x + pane.region().width - 1)
            .collect()
    }

    fn draw_rule(&self, frame: &mut Frame, area: Rect, y: u16, crossing: &str) {
        let buf = frame.buffer_mut();
        buf.set_string(
            area.x,
            y,
            "─".repeat(area.width as usize),
            self.theme.rule_style(),
        );
        for x in self.separators() {
            if x < area.right() {
                buf.set_string(x, y, crossing, self.theme.rule_style());
            }
        }
    }
}

impl Component for LayoutView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = area.intersection(frame.area());
        if area.height == 0 || area.width == 0 {
            return;
        }
        let count = self.layout.panes().len();
        let separators = self.separators();

        // Header row.
        for (i, pane) in self.layout.panes().iter().enumerate() {
            let region = pane.region();
            let gap = u16::from(i + 1 < count);
            let header = format!("{}: {}", i + 1, pane.name());
            frame.buffer_mut().set_string(
                region.x,
                area.y,
                fit(&header, region.width.saturating_sub(gap) as usize),
                self.theme.header_style(i == self.layout.focused()),
            );
        }

        if area.height > TOP_MARGIN - 1 {
            self.draw_rule(frame, area, area.y + 1, "┼");
        }

        // Vertical separators through the header and pane rows.
        let pane_bottom = area.bottom().saturating_sub(BOTTOM_MARGIN);
        for &x in &separators {
            if x >= area.right() {
                continue;
            }
            for y in (area.y..pane_bottom).filter(|&y| y != area.y + 1) {
                frame
                    .buffer_mut()
                    .set_string(x, y, "│", self.theme.rule_style());
            }
        }

        for (i, pane) in self.layout.panes().iter().enumerate() {
            let region = pane.region();
            let pane_area = Rect::new(region.x, region.y, region.width, region.height);
            let gap = u16::from(i + 1 < count);
            PaneView::new(pane, self.theme, gap).render(frame, pane_area);
        }

        if area.height >= TOP_MARGIN + BOTTOM_MARGIN {
            self.draw_rule(frame, area, area.bottom() - 2, "┴");
        }
        if area.height >= TOP_MARGIN + 1 {
            frame.buffer_mut().set_string(
                area.x,
                area.bottom() - 1,
                fit(self.layout.status(), area.width as usize),
                ratatui::style::Style::default(),
            );
        }
    }
}
