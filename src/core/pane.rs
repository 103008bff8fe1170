//! # List Panes
//!
//! A pane is one scrollable, highlightable column of text bound to a screen
//! region. The variants differ only in what Alt-combinations and Enter do:
//!
//! | Kind     | Alt-<key>                    | Enter                  |
//! |----------|------------------------------|------------------------|
//! | `Bands`  | jump to the visible line     | drill into the band    |
//! | `Albums` | unknown combination          | activation unsupported |

use log::debug;

use crate::core::condition::Condition;
use crate::core::viewport::{Region, Viewport};

/// Direct-jump keys, in on-screen row order.
pub const JUMP_KEYS: &str = "1234567890qwertyuiop";

/// Columns reserved left of each line for the jump glyph and a space.
pub const JUMP_MARGIN: u16 = 2;

/// Position of `key` in [`JUMP_KEYS`].
pub fn jump_position(key: char) -> Option<usize> {
    JUMP_KEYS.chars().position(|c| c == key)
}

/// Glyph shown in front of visible row `row`, if it has one.
pub fn jump_glyph(row: usize) -> Option<char> {
    JUMP_KEYS.chars().nth(row)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKind {
    Bands,
    Albums,
}

/// What the controller should do after Enter on a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Resolve the children of the named band and push a new layout.
    DrillDown(String),
}

#[derive(Debug, Clone)]
pub struct ListPane {
    name: String,
    kind: PaneKind,
    lines: Vec<String>,
    viewport: Viewport,
    region: Region,
    highlighted: bool,
}

impl ListPane {
    pub fn new(name: impl Into<String>, kind: PaneKind) -> Self {
        Self {
            name: name.into(),
            kind,
            lines: Vec::new(),
            viewport: Viewport::default(),
            region: Region::default(),
            highlighted: false,
        }
    }

    pub fn bands(lines: Vec<String>) -> Self {
        let mut pane = Self::new("bands", PaneKind::Bands);
        pane.populate(lines);
        pane
    }

    pub fn albums(lines: Vec<String>) -> Self {
        let mut pane = Self::new("albums", PaneKind::Albums);
        pane.populate(lines);
        pane
    }

    /// Replace the lines and reset the highlight to the top.
    ///
    /// Panes are meant to be populated once, right after construction.
    pub fn populate(&mut self, lines: Vec<String>) {
        self.viewport = Viewport::new(lines.len(), self.viewport.height);
        self.lines = lines;
    }

    pub fn scroll(&mut self, delta: isize) -> Result<(), Condition> {
        self.viewport.scroll(delta)?;
        debug!(
            "{}: index={} offset={}",
            self.name, self.viewport.index, self.viewport.offset
        );
        Ok(())
    }

    /// Toggle emphasis of the current line. Purely visual.
    pub fn highlight(&mut self, enable: bool) {
        self.highlighted = enable;
    }

    pub fn handle_alt_key(&mut self, key: char) -> Result<(), Condition> {
        match (self.kind, jump_position(key)) {
            (PaneKind::Bands, Some(row)) if row < self.viewport.visible().len() => {
                let target = self.viewport.offset + row;
                self.scroll(target as isize - self.viewport.index as isize)
            }
            _ => Err(Condition::UnknownCombination(key)),
        }
    }

    pub fn handle_activate(&self) -> Result<Activation, Condition> {
        match self.kind {
            PaneKind::Bands => self
                .selected()
                .map(|name| Activation::DrillDown(name.to_string()))
                .ok_or(Condition::ActivationUnsupported),
            PaneKind::Albums => Err(Condition::ActivationUnsupported),
        }
    }

    /// Move the pane to a new screen region. Only the height affects
    /// scrolling; the window is re-established around the current index.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        self.viewport.set_height(region.height as usize);
    }

    /// Columns left of the text reserved for jump glyphs.
    pub fn margin(&self) -> u16 {
        match self.kind {
            PaneKind::Bands => JUMP_MARGIN,
            PaneKind::Albums => 0,
        }
    }

    /// `(absolute index, line)` pairs currently on screen.
    pub fn visible_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.viewport
            .visible()
            .map(move |i| (i, self.lines[i].as_str()))
    }

    pub fn selected(&self) -> Option<&str> {
        self.lines.get(self.viewport.index).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PaneKind {
        self.kind
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn index(&self) -> usize {
        self.viewport.index
    }

    pub fn offset(&self) -> usize {
        self.viewport.offset
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}
