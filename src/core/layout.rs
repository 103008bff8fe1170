//! # Layout
//!
//! A fixed row of panes sharing the terminal width, exactly one focused.
//!
//! ```text
//! row 0          1: bands      │2: albums
//! row 1          ──────────────┼──────────────
//! rows 2..h-2    pane lines    │pane lines
//! row h-2        ──────────────┴──────────────
//! row h-1        status line
//! ```
//!
//! Width partition: every pane gets `width / count` columns and the
//! rightmost pane additionally takes the remainder, so the widths always
//! sum to the terminal width.

use crate::core::condition::Condition;
use crate::core::pane::ListPane;
use crate::core::viewport::Region;

/// Rows above the pane lines: header and rule.
pub const TOP_MARGIN: u16 = 2;
/// Rows below the pane lines: rule and status.
pub const BOTTOM_MARGIN: u16 = 2;

/// Number of list rows that fit in a terminal of `height` rows.
pub fn page_height(height: u16) -> u16 {
    height.saturating_sub(TOP_MARGIN + BOTTOM_MARGIN)
}

#[derive(Debug, Clone)]
pub struct Layout {
    panes: Vec<ListPane>,
    focused: usize,
    width: u16,
    height: u16,
    status: String,
}

impl Layout {
    /// Build a layout over `panes` with `focused` as the active one.
    ///
    /// An out-of-range `focused` falls back to the first pane.
    pub fn new(panes: Vec<ListPane>, focused: usize) -> Self {
        let focused = if focused < panes.len() { focused } else { 0 };
        let mut layout = Self {
            panes,
            focused,
            width: 0,
            height: 0,
            status: String::new(),
        };
        if let Some(pane) = layout.panes.get_mut(focused) {
            pane.highlight(true);
        }
        layout
    }

    pub fn set_focus(&mut self, index: usize) {
        if index >= self.panes.len() {
            return;
        }
        self.panes[self.focused].highlight(false);
        self.focused = index;
        self.panes[self.focused].highlight(true);
    }

    pub fn focus_previous(&mut self) {
        if let Some(index) = self.focused.checked_sub(1) {
            self.set_focus(index);
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focused + 1);
    }

    pub fn scroll(&mut self, delta: isize) -> Result<(), Condition> {
        match self.panes.get_mut(self.focused) {
            Some(pane) => pane.scroll(delta),
            None => Ok(()),
        }
    }

    /// Recompute every pane's region for a terminal of `width` x `height`.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;

        let count = self.panes.len() as u16;
        if count == 0 {
            return;
        }
        let column = width / count;
        let rows = page_height(height);
        for (i, pane) in self.panes.iter_mut().enumerate() {
            let i = i as u16;
            let pane_width = if i + 1 == count {
                width - column * (count - 1)
            } else {
                column
            };
            pane.set_region(Region::new(column * i, TOP_MARGIN, pane_width, rows));
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// `<pane name>: <line>/<total>` for the focused pane.
    pub fn position_summary(&self) -> String {
        match self.focused_pane() {
            Some(pane) if !pane.lines().is_empty() => format!(
                "{}: {}/{}",
                pane.name(),
                pane.index() + 1,
                pane.lines().len()
            ),
            Some(pane) => format!("{}: empty", pane.name()),
            None => String::new(),
        }
    }

    pub fn panes(&self) -> &[ListPane] {
        &self.panes
    }

    pub fn pane_mut(&mut self, index: usize) -> Option<&mut ListPane> {
        self.panes.get_mut(index)
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_pane(&self) -> Option<&ListPane> {
        self.panes.get(self.focused)
    }

    pub fn focused_pane_mut(&mut self) -> Option<&mut ListPane> {
        self.panes.get_mut(self.focused)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pane::ListPane;

    fn lines(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix} {i}")).collect()
    }

    fn two_pane_layout() -> Layout {
        let mut layout = Layout::new(
            vec![
                ListPane::bands(lines("band", 30)),
                ListPane::albums(lines("album", 4)),
            ],
            0,
        );
        layout.resize(81, 24);
        layout
    }

    #[test]
    fn test_new_highlights_focused_pane_only() {
        let layout = two_pane_layout();
        assert!(layout.panes()[0].is_highlighted());
        assert!(!layout.panes()[1].is_highlighted());
    }

    #[test]
    fn test_set_focus_moves_highlight() {
        let mut layout = two_pane_layout();
        layout.set_focus(1);
        assert_eq!(layout.focused(), 1);
        assert!(!layout.panes()[0].is_highlighted());
        assert!(layout.panes()[1].is_highlighted());
    }

    #[test]
    fn test_set_focus_out_of_range_is_noop() {
        let mut layout = two_pane_layout();
        layout.set_focus(7);
        assert_eq!(layout.focused(), 0);
        assert!(layout.panes()[0].is_highlighted());
    }

    #[test]
    fn test_focus_edges_do_not_wrap() {
        let mut layout = two_pane_layout();
        layout.focus_previous();
        assert_eq!(layout.focused(), 0);

        layout.focus_next();
        layout.focus_next();
        assert_eq!(layout.focused(), 1);
    }

    #[test]
    fn test_scroll_routes_to_focused_pane() {
        let mut layout = two_pane_layout();
        layout.set_focus(1);
        layout.scroll(2).unwrap();
        assert_eq!(layout.panes()[1].index(), 2);
        assert_eq!(layout.panes()[0].index(), 0);
    }

    #[test]
    fn test_scroll_condition_propagates() {
        let mut layout = two_pane_layout();
        assert!(matches!(layout.scroll(-1), Err(Condition::TopOfList)));
    }

    #[test]
    fn test_resize_partitions_width() {
        let layout = two_pane_layout();
        let regions: Vec<Region> = layout.panes().iter().map(|p| p.region()).collect();
        assert_eq!(regions[0], Region::new(0, TOP_MARGIN, 40, 20));
        assert_eq!(regions[1], Region::new(40, TOP_MARGIN, 41, 20));
        let total: u16 = regions.iter().map(|r| r.width).sum();
        assert_eq!(total, 81);
    }

    #[test]
    fn test_resize_keeps_panes_consistent() {
        let mut layout = two_pane_layout();
        layout.scroll(25).unwrap();
        for (w, h) in [(20, 6), (200, 60), (3, 4), (80, 24)] {
            layout.resize(w, h);
            for pane in layout.panes() {
                assert!(pane.viewport().is_consistent(), "{w}x{h}: {:?}", pane.viewport());
            }
        }
    }

    #[test]
    fn test_position_summary() {
        let mut layout = two_pane_layout();
        layout.scroll(4).unwrap();
        assert_eq!(layout.position_summary(), "bands: 5/30");

        let empty = Layout::new(vec![ListPane::albums(Vec::new())], 0);
        assert_eq!(empty.position_summary(), "albums: empty");
    }

    #[test]
    fn test_page_height_saturates() {
        assert_eq!(page_height(24), 20);
        assert_eq!(page_height(3), 0);
    }
}
