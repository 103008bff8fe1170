//! # Navigation Stack
//!
//! Drill-down history. The top layout is the one drawn and fed input; the
//! stack always holds at least one layout.

use crate::core::layout::Layout;

#[derive(Debug, Clone)]
pub struct NavigationStack {
    layouts: Vec<Layout>,
}

impl NavigationStack {
    pub fn new(root: Layout) -> Self {
        Self {
            layouts: vec![root],
        }
    }

    pub fn push(&mut self, layout: Layout) {
        self.layouts.push(layout);
    }

    /// Remove and return the top layout. The root layout is never popped.
    pub fn pop(&mut self) -> Option<Layout> {
        if self.layouts.len() > 1 {
            self.layouts.pop()
        } else {
            None
        }
    }

    pub fn top(&self) -> &Layout {
        // The root is never popped.
        &self.layouts[self.layouts.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut Layout {
        let last = self.layouts.len() - 1;
        &mut self.layouts[last]
    }

    pub fn depth(&self) -> usize {
        self.layouts.len()
    }
}
