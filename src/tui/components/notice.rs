//! # Notice Overlay
//!
//! Full-screen notice for a recoverable condition. The screen is cleared,
//! the message is wrapped inside a bordered box, and the same message is
//! repeated on the bottom row where the status line normally sits.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::fit;
use crate::tui::theme::Theme;

pub struct NoticeOverlay<'a> {
    pub message: &'a str,
    pub theme: &'a Theme,
}

impl<'a> NoticeOverlay<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }

    /// Wrapped message lines for a box whose inner width is `width`.
    fn wrapped(&self, width: u16) -> Vec<String> {
        textwrap::wrap(self.message, (width as usize).max(1))
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

impl Component for NoticeOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = area.intersection(frame.area());
        frame.render_widget(Clear, area);
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Box: at most 60 columns, borders + padding take 4.
        let box_width = area.width.min(60);
        let lines = self.wrapped(box_width.saturating_sub(4));
        let box_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(1));

        if box_height >= 3 && box_width >= 5 {
            let [row] = Layout::vertical([Constraint::Length(box_height)])
                .flex(Flex::Center)
                .areas(Rect {
                    height: area.height - 1,
                    ..area
                });
            let [boxed] = Layout::horizontal([Constraint::Length(box_width)])
                .flex(Flex::Center)
                .areas(row);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.rule_style())
                .padding(Padding::horizontal(1));
            let paragraph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, boxed);
        }

        frame.buffer_mut().set_string(
            area.x,
            area.bottom() - 1,
            fit(self.message, area.width as usize),
            self.theme.highlight_style(),
        );
    }
}
