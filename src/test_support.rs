//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{BTreeMap, VecDeque};
use std::io;
use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

use crate::catalog::{Catalog, CatalogError};
use crate::tui::Screen;
use crate::tui::event::{InputMode, KeyName};

/// In-memory catalog with switchable failures.
#[derive(Default)]
pub struct FakeCatalog {
    pub library: BTreeMap<String, Vec<String>>,
    pub fail_bands: bool,
    pub fail_albums: bool,
}

impl FakeCatalog {
    pub fn insert(&mut self, band: &str, albums: &[&str]) {
        self.library.insert(
            band.to_string(),
            albums.iter().map(|a| a.to_string()).collect(),
        );
    }
}

impl Catalog for FakeCatalog {
    fn bands(&mut self) -> Result<Vec<String>, CatalogError> {
        if self.fail_bands {
            return Err(CatalogError::Transport("connection refused".into()));
        }
        Ok(self.library.keys().cloned().collect())
    }

    fn albums(&mut self, band: &str) -> Result<Vec<String>, CatalogError> {
        if self.fail_albums {
            return Err(CatalogError::Timeout(Duration::from_secs(5)));
        }
        let mut albums = self
            .library
            .get(band)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownBand(band.to_string()))?;
        albums.sort();
        Ok(albums)
    }
}

/// Two bands; Boris' albums deliberately out of order.
pub fn fake_catalog() -> FakeCatalog {
    let mut catalog = FakeCatalog::default();
    catalog.insert("Air", &["Moon Safari", "Talkie Walkie"]);
    catalog.insert("Boris", &["Smile", "Akuma No Uta", "Pink"]);
    catalog
}

/// A screen that replays a fixed key script against a `TestBackend`.
///
/// `None` entries are empty polls. Running past the end of the script is
/// an `UnexpectedEof` error so a missing quit can't hang a test.
pub struct ScriptedScreen {
    pub terminal: Terminal<TestBackend>,
    pub script: VecDeque<Option<KeyName>>,
    /// Size to switch the backend to when the script reaches `Resize`.
    pub resize_to: Option<(u16, u16)>,
    pub teardowns: usize,
    pub holds: usize,
    pub modes: Vec<InputMode>,
}

impl ScriptedScreen {
    pub fn new(width: u16, height: u16, script: Vec<Option<KeyName>>) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
            script: script.into(),
            resize_to: None,
            teardowns: 0,
            holds: 0,
            modes: Vec::new(),
        }
    }

    /// Everything currently on the test screen, row by row.
    pub fn contents(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Screen for ScriptedScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        let size = self
            .terminal
            .size()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok((size.width, size.height))
    }

    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame)) -> io::Result<()> {
        self.terminal
            .draw(|frame| render(frame))
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(())
    }

    fn next_key(&mut self, mode: InputMode) -> io::Result<Option<KeyName>> {
        self.modes.push(mode);
        let next = self
            .script
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))?;
        if next == Some(KeyName::Resize)
            && let Some((width, height)) = self.resize_to
        {
            self.terminal.backend_mut().resize(width, height);
        }
        Ok(next)
    }

    fn hold(&mut self, _duration: Duration) {
        self.holds += 1;
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.teardowns += 1;
        Ok(())
    }
}
