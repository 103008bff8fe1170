//! # TUI Components
//!
//! Stateless, props-based renderers. Each one borrows the core state it
//! draws and is rebuilt every frame:
//!
//! - `LayoutView`: header row, rules, separators, status line, and the panes
//! - `PaneView`: the visible window of one pane with its highlight
//! - `NoticeOverlay`: full-screen message for recoverable conditions
//!
//! ```text
//! components/
//! ├── mod.rs          (this file, plus text fitting helpers)
//! ├── layout_view.rs
//! ├── pane_view.rs
//! └── notice.rs
//! ```

pub mod layout_view;
pub mod notice;
pub mod pane_view;

pub use layout_view::LayoutView;
pub use notice::NoticeOverlay;
pub use pane_view::PaneView;

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to at most `width` display columns and pad the rest
/// with spaces, so the result is exactly `width` columns wide.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
