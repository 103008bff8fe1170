//! # Controller
//!
//! Owns the navigation stack and the catalog, and turns key names into
//! state changes. Nothing here touches the terminal: the event loop in
//! `tui::run` reads keys, feeds them in, and draws whatever results.
//!
//! Handlers either finish their state change or leave state exactly as it
//! was and return a [`Condition`].

use log::{debug, info, warn};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::catalog::Catalog;
use crate::core::condition::Condition;
use crate::core::layout::{Layout, page_height};
use crate::core::pane::{Activation, ListPane};
use crate::core::stack::NavigationStack;
use crate::tui::event::{InputMode, KeyName};
use crate::tui::keymap::{self, Command};

/// Outcome of one idle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleStep {
    Continue,
    Done,
}

/// Work run between key presses while no input is pending (the intro
/// animation). Each `step` happens after one empty poll.
pub trait IdleTask {
    fn step(&mut self, width: u16) -> IdleStep;

    fn render(&self, frame: &mut Frame, area: Rect);
}

pub struct Controller {
    stack: NavigationStack,
    catalog: Box<dyn Catalog>,
    idle: Option<Box<dyn IdleTask>>,
    pending_alt: bool,
    startup_notice: Option<Condition>,
    running: bool,
    width: u16,
    height: u16,
}

impl Controller {
    /// Build the root layout from the catalog's band list. A failed listing
    /// still yields a usable (empty) root and is reported on the first loop
    /// iteration.
    pub fn new(mut catalog: Box<dyn Catalog>) -> Self {
        let (bands, startup_notice) = match catalog.bands() {
            Ok(bands) => {
                info!("Starting with {} bands", bands.len());
                (bands, None)
            }
            Err(e) => {
                warn!("Could not list bands: {}", e);
                (Vec::new(), Some(Condition::Catalog(e)))
            }
        };

        let mut root = Layout::new(vec![ListPane::bands(bands)], 0);
        root.set_status(root.position_summary());

        Self {
            stack: NavigationStack::new(root),
            catalog,
            idle: None,
            pending_alt: false,
            startup_notice,
            running: true,
            width: 0,
            height: 0,
        }
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn top(&self) -> &Layout {
        self.stack.top()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn take_startup_notice(&mut self) -> Option<Condition> {
        self.startup_notice.take()
    }

    // ------------------------------------------------------------------
    // Terminal size
    // ------------------------------------------------------------------

    /// Record the terminal size and lay the top layout out for it.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.relayout();
    }

    fn relayout(&mut self) {
        let (width, height) = (self.width, self.height);
        self.stack.top_mut().resize(width, height);
    }

    /// Lines per page for PageUp/PageDown.
    fn page(&self) -> isize {
        page_height(self.height).max(1) as isize
    }

    // ------------------------------------------------------------------
    // Idle work
    // ------------------------------------------------------------------

    pub fn set_idle_task(&mut self, task: Box<dyn IdleTask>) {
        self.idle = Some(task);
    }

    pub fn idle_task(&self) -> Option<&dyn IdleTask> {
        self.idle.as_deref()
    }

    /// Blocking while nothing runs between keys, polling otherwise.
    pub fn input_mode(&self, frame_delay: std::time::Duration) -> InputMode {
        if self.idle.is_some() {
            InputMode::Polling(frame_delay)
        } else {
            InputMode::Blocking
        }
    }

    /// Called when a poll returned no key.
    pub fn idle_tick(&mut self) {
        if let Some(task) = self.idle.as_mut()
            && task.step(self.width) == IdleStep::Done
        {
            debug!("Idle task finished");
            self.idle = None;
        }
    }

    // ------------------------------------------------------------------
    // Key handling
    // ------------------------------------------------------------------

    /// Run whatever `key` is bound to. A terminal condition also stops
    /// the controller.
    pub fn handle_key(&mut self, key: KeyName) -> Result<(), Condition> {
        let result = self.route_key(key);
        if let Err(condition) = &result
            && condition.is_terminal()
        {
            info!("Quit requested");
            self.running = false;
        }
        result
    }

    fn route_key(&mut self, key: KeyName) -> Result<(), Condition> {
        // A resize between the prefix and its key leaves the prefix armed.
        if key != KeyName::Resize && std::mem::take(&mut self.pending_alt) {
            return match key {
                KeyName::Char(c) => self.alt_key(c),
                other => Err(Condition::UnknownKeybinding(format!("M-{other}"))),
            };
        }
        if let KeyName::Alt(c) = key {
            return self.alt_key(c);
        }
        match keymap::lookup(&key) {
            Some(command) => self.dispatch(command),
            None => Err(Condition::UnknownKeybinding(key.to_string())),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), Condition> {
        debug!("Dispatching {:?}", command);
        match command {
            Command::Quit => return Err(Condition::Quit),
            Command::AltPrefix => {
                self.pending_alt = true;
                return Ok(());
            }
            Command::Resize => self.relayout(),
            Command::FocusPrevious => self.stack.top_mut().focus_previous(),
            Command::FocusNext => self.stack.top_mut().focus_next(),
            Command::ScrollDown => self.stack.top_mut().scroll(1)?,
            Command::ScrollUp => self.stack.top_mut().scroll(-1)?,
            Command::PageDown => {
                let page = self.page();
                self.stack.top_mut().scroll(page)?
            }
            Command::PageUp => {
                let page = self.page();
                self.stack.top_mut().scroll(-page)?
            }
            Command::HalfPageDown => {
                let half = (self.page() / 2).max(1);
                self.stack.top_mut().scroll(half)?
            }
            Command::HalfPageUp => {
                let half = (self.page() / 2).max(1);
                self.stack.top_mut().scroll(-half)?
            }
            Command::Activate => return self.activate(),
            Command::Back => return self.back(),
        }
        self.refresh_status();
        Ok(())
    }

    fn alt_key(&mut self, key: char) -> Result<(), Condition> {
        self.stack
            .top_mut()
            .focused_pane_mut()
            .ok_or(Condition::UnknownCombination(key))?
            .handle_alt_key(key)?;
        self.refresh_status();
        Ok(())
    }

    fn refresh_status(&mut self) {
        let summary = self.stack.top().position_summary();
        self.stack.top_mut().set_status(summary);
    }

    // ------------------------------------------------------------------
    // Drill-down
    // ------------------------------------------------------------------

    fn activate(&mut self) -> Result<(), Condition> {
        let activation = self
            .stack
            .top()
            .focused_pane()
            .ok_or(Condition::ActivationUnsupported)?
            .handle_activate()?;
        match activation {
            Activation::DrillDown(band) => self.drill_down(&band),
        }
    }

    /// Push a `[bands, albums]` layout for `band`, focused on the albums.
    fn drill_down(&mut self, band: &str) -> Result<(), Condition> {
        info!("Drilling into {}", band);
        let albums = self.catalog.albums(band)?;
        let bands: Vec<String> = self
            .stack
            .top()
            .focused_pane()
            .map(|pane| pane.lines().to_vec())
            .unwrap_or_default();
        let position = bands.iter().position(|name| name == band);
        let album_count = albums.len();

        let mut layout = Layout::new(vec![ListPane::bands(bands), ListPane::albums(albums)], 1);
        layout.resize(self.width, self.height);
        if let Some(position) = position
            && let Some(pane) = layout.pane_mut(0)
        {
            // Always a valid in-range jump, so it cannot raise.
            let _ = pane.scroll(position as isize);
        }
        layout.set_status(format!("{band}: {album_count} albums"));

        self.stack.push(layout);
        debug!("Stack depth now {}", self.stack.depth());
        Ok(())
    }

    fn back(&mut self) -> Result<(), Condition> {
        self.stack.pop().ok_or(Condition::AlreadyAtTop)?;
        // The parent may have been laid out for an older terminal size.
        self.relayout();
        self.refresh_status();
        Ok(())
    }

    /// Show `condition` as the status once its overlay has been dismissed.
    pub fn dismiss_notice(&mut self, condition: &Condition) {
        self.stack.top_mut().set_status(condition.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeCatalog, fake_catalog};

    fn controller() -> Controller {
        let mut controller = Controller::new(Box::new(fake_catalog()));
        controller.set_size(80, 24);
        controller
    }

    fn press(controller: &mut Controller, keys: &[KeyName]) {
        for key in keys {
            controller.handle_key(key.clone()).unwrap();
        }
    }

    #[test]
    fn test_root_layout_lists_bands() {
        let controller = controller();
        assert_eq!(controller.stack().depth(), 1);
        let pane = &controller.top().panes()[0];
        assert_eq!(pane.lines(), ["Air", "Boris"]);
        assert_eq!(controller.top().status(), "bands: 1/2");
    }

    #[test]
    fn test_scroll_keys_move_highlight() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Char('j')]);
        assert_eq!(controller.top().panes()[0].index(), 1);
        assert_eq!(controller.top().status(), "bands: 2/2");

        press(&mut controller, &[KeyName::Up]);
        assert_eq!(controller.top().panes()[0].index(), 0);
    }

    #[test]
    fn test_boundary_raises_and_keeps_state() {
        let mut controller = controller();
        let result = controller.handle_key(KeyName::Char('k'));
        assert!(matches!(result, Err(Condition::TopOfList)));
        assert!(controller.is_running());
        assert_eq!(controller.top().panes()[0].index(), 0);
    }

    #[test]
    fn test_unknown_key() {
        let mut controller = controller();
        let result = controller.handle_key(KeyName::Other("KEY_F5".into()));
        assert!(matches!(result, Err(Condition::UnknownKeybinding(name)) if name == "KEY_F5"));
    }

    #[test]
    fn test_drill_down_pushes_sorted_albums() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Char('j'), KeyName::Enter]);

        assert_eq!(controller.stack().depth(), 2);
        let top = controller.top();
        assert_eq!(top.focused(), 1);
        assert_eq!(top.panes()[1].lines(), ["Akuma No Uta", "Pink", "Smile"]);
        assert_eq!(top.panes()[0].selected(), Some("Boris"));
        assert!(top.panes()[1].is_highlighted());
        assert!(!top.panes()[0].is_highlighted());
    }

    #[test]
    fn test_drill_down_failure_leaves_stack_alone() {
        let mut catalog = fake_catalog();
        catalog.fail_albums = true;
        let mut controller = Controller::new(Box::new(catalog));
        controller.set_size(80, 24);

        let result = controller.handle_key(KeyName::Enter);
        assert!(matches!(result, Err(Condition::Catalog(_))));
        assert_eq!(controller.stack().depth(), 1);
        assert_eq!(controller.top().focused(), 0);
    }

    #[test]
    fn test_enter_on_albums_is_unsupported() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Enter]);
        let result = controller.handle_key(KeyName::Enter);
        assert!(matches!(result, Err(Condition::ActivationUnsupported)));
        assert_eq!(controller.stack().depth(), 2);
    }

    #[test]
    fn test_back_pops_to_parent() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Enter, KeyName::Backspace]);
        assert_eq!(controller.stack().depth(), 1);

        let result = controller.handle_key(KeyName::Backspace);
        assert!(matches!(result, Err(Condition::AlreadyAtTop)));
        assert_eq!(controller.stack().depth(), 1);
    }

    #[test]
    fn test_focus_keys() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Enter, KeyName::Char('h')]);
        assert_eq!(controller.top().focused(), 0);
        press(&mut controller, &[KeyName::Left]);
        assert_eq!(controller.top().focused(), 0);
        press(&mut controller, &[KeyName::Right, KeyName::Char('l')]);
        assert_eq!(controller.top().focused(), 1);
    }

    #[test]
    fn test_alt_prefix_then_jump_key() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Escape, KeyName::Char('2')]);
        assert_eq!(controller.top().panes()[0].index(), 1);

        press(&mut controller, &[KeyName::Alt('1')]);
        assert_eq!(controller.top().panes()[0].index(), 0);
    }

    #[test]
    fn test_alt_prefix_unknown_combination() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Escape]);
        let result = controller.handle_key(KeyName::Char('z'));
        assert!(matches!(result, Err(Condition::UnknownCombination('z'))));

        // The prefix is consumed even on failure.
        press(&mut controller, &[KeyName::Char('j')]);
        assert_eq!(controller.top().panes()[0].index(), 1);
    }

    #[test]
    fn test_resize_keeps_alt_prefix_armed() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Escape, KeyName::Resize]);
        press(&mut controller, &[KeyName::Char('2')]);
        assert_eq!(controller.top().panes()[0].index(), 1);
        assert_eq!(controller.top().status(), "bands: 2/2");
    }

    #[test]
    fn test_drilling_into_same_band_twice() {
        let mut controller = controller();
        press(
            &mut controller,
            &[KeyName::Char('j'), KeyName::Enter, KeyName::Backspace],
        );
        assert_eq!(controller.stack().depth(), 1);
        assert_eq!(controller.top().panes()[0].index(), 1);

        press(&mut controller, &[KeyName::Enter]);
        assert_eq!(controller.stack().depth(), 2);
        assert_eq!(
            controller.top().panes()[1].lines(),
            ["Akuma No Uta", "Pink", "Smile"]
        );
        assert_eq!(controller.top().status(), "Boris: 3 albums");
    }

    #[test]
    fn test_paging_uses_visible_height() {
        let mut catalog = FakeCatalog::default();
        for i in 0..100 {
            catalog.insert(&format!("band {i:03}"), &[]);
        }
        let mut controller = Controller::new(Box::new(catalog));
        controller.set_size(80, 24);

        press(&mut controller, &[KeyName::PageDown]);
        assert_eq!(controller.top().panes()[0].index(), 20);
        press(&mut controller, &[KeyName::Ctrl('d')]);
        assert_eq!(controller.top().panes()[0].index(), 30);
        press(&mut controller, &[KeyName::Ctrl('u'), KeyName::PageUp]);
        assert_eq!(controller.top().panes()[0].index(), 0);
    }

    #[test]
    fn test_quit_stops_controller() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Enter]);
        let result = controller.handle_key(KeyName::Char('q'));
        assert!(matches!(result, Err(Condition::Quit)));
        assert!(!controller.is_running());
    }

    #[test]
    fn test_resize_relayouts_top() {
        let mut controller = controller();
        press(&mut controller, &[KeyName::Enter]);
        controller.set_size(101, 30);
        press(&mut controller, &[KeyName::Resize]);
        let widths: Vec<u16> = controller
            .top()
            .panes()
            .iter()
            .map(|p| p.region().width)
            .collect();
        assert_eq!(widths, [50, 51]);
        assert_eq!(controller.top().panes()[0].region().height, 26);
    }

    #[test]
    fn test_failed_band_listing_becomes_startup_notice() {
        let mut catalog = fake_catalog();
        catalog.fail_bands = true;
        let mut controller = Controller::new(Box::new(catalog));
        assert!(controller.top().panes()[0].lines().is_empty());
        assert!(matches!(
            controller.take_startup_notice(),
            Some(Condition::Catalog(_))
        ));
        assert!(controller.take_startup_notice().is_none());
    }

    struct Countdown(u8);

    impl IdleTask for Countdown {
        fn step(&mut self, _width: u16) -> IdleStep {
            self.0 -= 1;
            if self.0 == 0 {
                IdleStep::Done
            } else {
                IdleStep::Continue
            }
        }

        fn render(&self, _frame: &mut Frame, _area: Rect) {}
    }

    #[test]
    fn test_idle_task_removes_itself() {
        let delay = std::time::Duration::from_millis(5);
        let mut controller = controller();
        assert_eq!(controller.input_mode(delay), InputMode::Blocking);

        controller.set_idle_task(Box::new(Countdown(2)));
        assert_eq!(controller.input_mode(delay), InputMode::Polling(delay));
        controller.idle_tick();
        assert!(controller.idle_task().is_some());
        controller.idle_tick();
        assert!(controller.idle_task().is_none());
        assert_eq!(controller.input_mode(delay), InputMode::Blocking);
    }
}
