//! # Viewport
//!
//! Pure geometry for a scrollable list: which line is highlighted, which
//! line is the first one on screen, and how both move when the user scrolls.
//!
//! ```text
//!   line 0
//!   line 1
//! ┌ offset ─────────┐
//! │ line 2          │
//! │ line 3  ◀ index │  height = 3
//! │ line 4          │
//! └─────────────────┘
//!   line 5           length = 6
//! ```
//!
//! Invariants held after every operation:
//! - `index < length` whenever `length > 0`
//! - `offset <= index < offset + height`
//! - `offset == 0` if `length <= height`
//! - `offset <= length - height` if `length > height`

use std::ops::Range;

/// Why a scroll was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Top,
    End,
}

/// A rectangular screen region in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub index: usize,
    pub offset: usize,
    pub height: usize,
    pub length: usize,
}

impl Viewport {
    pub fn new(length: usize, height: usize) -> Self {
        Self {
            index: 0,
            offset: 0,
            height,
            length,
        }
    }

    /// Number of rows actually used for paging. A zero-height pane still
    /// pages by one line so the window math stays well defined.
    fn page(&self) -> usize {
        self.height.max(1)
    }

    fn max_offset(&self) -> usize {
        self.length.saturating_sub(self.page())
    }

    /// Move the highlighted index by `delta`.
    ///
    /// A single step past either end is refused with the boundary that was
    /// hit and leaves the viewport untouched. Larger jumps clamp silently.
    pub fn scroll(&mut self, delta: isize) -> Result<(), Boundary> {
        if self.length == 0 {
            return match delta {
                -1 => Err(Boundary::Top),
                1 => Err(Boundary::End),
                _ => Ok(()),
            };
        }

        let last = self.length - 1;
        let target = self.index as isize + delta;
        let target = if target < 0 {
            if delta == -1 {
                return Err(Boundary::Top);
            }
            0
        } else if target as usize > last {
            if delta == 1 {
                return Err(Boundary::End);
            }
            last
        } else {
            target as usize
        };

        self.index = target;
        self.follow_index();
        Ok(())
    }

    /// Shift the window a page at a time until the index is visible, then
    /// clamp it so the last page is always full.
    fn follow_index(&mut self) {
        let page = self.page();
        while self.index < self.offset {
            self.offset = self.offset.saturating_sub(page);
        }
        while self.index >= self.offset + page {
            self.offset += page;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Change the pane height (terminal resize) and re-establish the window.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.follow_index();
    }

    /// Indices of the lines currently on screen.
    pub fn visible(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.length);
        self.offset.min(end)..end
    }

    /// Whether every invariant listed in the module docs holds.
    pub fn is_consistent(&self) -> bool {
        if self.length == 0 {
            return self.index == 0 && self.offset == 0;
        }
        let page = self.page();
        self.index < self.length
            && self.offset <= self.index
            && self.index < self.offset + page
            && self.offset <= self.max_offset()
    }
}
