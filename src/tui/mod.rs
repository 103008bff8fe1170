//! # TUI Adapter
//!
//! The ratatui/crossterm layer: terminal setup and teardown, the event loop,
//! and rendering. Core state lives in `core`; the `Controller` turns key
//! names into changes to it.
//!
//! ## Event loop
//!
//! Each iteration draws the top layout, then waits for a key:
//!
//! - **Blocking** while nothing animates.
//! - **Polling** (one frame delay) while an idle task such as the intro
//!   gallop is installed. An empty poll advances the task by one step.
//!
//! Recoverable conditions are shown on a full-screen notice that is held
//! for a moment and then replaced by the next frame. Quit ends the loop,
//! and the terminal is restored exactly once on every exit path.

pub mod component;
pub mod components;
pub mod controller;
pub mod event;
pub mod gallop;
pub mod keymap;
pub mod theme;
mod ui;

use std::io::{self, stdout};
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use log::{info, warn};
use ratatui::{DefaultTerminal, Frame};

use crate::catalog::Catalog;
use crate::core::condition::Condition;
use crate::core::config::ResolvedConfig;
use crate::tui::controller::Controller;
use crate::tui::event::{InputMode, KeyName};
use crate::tui::gallop::Gallop;
use crate::tui::theme::Theme;

/// Everything the event loop needs from a terminal.
pub trait Screen {
    /// Current size as `(width, height)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame)) -> io::Result<()>;

    /// Next key, or `None` when a poll ran out.
    fn next_key(&mut self, mode: InputMode) -> io::Result<Option<KeyName>>;

    /// Keep the current frame on screen for `duration`.
    fn hold(&mut self, duration: Duration);

    /// Give the terminal back to the shell.
    fn teardown(&mut self) -> io::Result<()>;
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// The real terminal, in raw mode on the alternate screen.
pub struct CrosstermScreen {
    terminal: DefaultTerminal,
    modes: Option<TerminalModeGuard>,
    restored: bool,
}

impl CrosstermScreen {
    pub fn new() -> io::Result<Self> {
        let terminal = ratatui::init();
        let modes = match TerminalModeGuard::new() {
            Ok(guard) => Some(guard),
            Err(e) => {
                ratatui::restore();
                return Err(e);
            }
        };
        Ok(Self {
            terminal,
            modes,
            restored: false,
        })
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(|frame| render(frame))?;
        Ok(())
    }

    fn next_key(&mut self, mode: InputMode) -> io::Result<Option<KeyName>> {
        event::read_key(mode)
    }

    fn hold(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn teardown(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        drop(self.modes.take());
        ratatui::restore();
        info!("Terminal restored");
        Ok(())
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}

/// Run the controller against `screen` until quit or an I/O failure, then
/// tear the screen down. Teardown happens once, whichever way the loop ends.
pub fn event_loop<S: Screen>(
    controller: &mut Controller,
    screen: &mut S,
    theme: &Theme,
    config: &ResolvedConfig,
) -> io::Result<()> {
    let result = drive(controller, screen, theme, config);
    if let Err(e) = &result {
        warn!("Event loop stopped: {}", e);
    }
    let restored = screen.teardown();
    result.and(restored)
}

fn drive<S: Screen>(
    controller: &mut Controller,
    screen: &mut S,
    theme: &Theme,
    config: &ResolvedConfig,
) -> io::Result<()> {
    let (width, height) = screen.size()?;
    controller.set_size(width, height);

    if let Some(condition) = controller.take_startup_notice() {
        show_notice(controller, screen, theme, config.notice, &condition)?;
    }

    while controller.is_running() {
        screen.draw(&mut |frame| ui::draw_ui(frame, controller, theme, None))?;

        let mode = controller.input_mode(config.frame_delay);
        let Some(key) = screen.next_key(mode)? else {
            controller.idle_tick();
            continue;
        };

        if key == KeyName::Resize {
            let (width, height) = screen.size()?;
            controller.set_size(width, height);
        }

        match controller.handle_key(key) {
            Ok(()) => {}
            Err(condition) if condition.is_terminal() => {}
            Err(condition) => show_notice(controller, screen, theme, config.notice, &condition)?,
        }
    }
    Ok(())
}

/// Full-screen notice for `condition`, held for `hold`, after which the
/// status line keeps the message.
fn show_notice<S: Screen>(
    controller: &mut Controller,
    screen: &mut S,
    theme: &Theme,
    hold: Duration,
    condition: &Condition,
) -> io::Result<()> {
    warn!("{}", condition);
    let message = condition.to_string();
    screen.draw(&mut |frame| ui::draw_ui(frame, controller, theme, Some(&message)))?;
    screen.hold(hold);
    controller.dismiss_notice(condition);
    Ok(())
}

/// Start the navigator on the real terminal.
pub fn run(config: &ResolvedConfig, catalog: Box<dyn Catalog>) -> io::Result<()> {
    let theme = Theme::from_config(config);
    let mut controller = Controller::new(catalog);
    if config.intro {
        controller.set_idle_task(Box::new(Gallop::new()));
    }
    let mut screen = CrosstermScreen::new()?;
    event_loop(&mut controller, &mut screen, &theme, config)
}
