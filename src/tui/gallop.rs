//! # Gallop
//!
//! The startup animation: a small horse trots from the left edge of the
//! screen to the right, one column per idle step, then removes itself.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::tui::controller::{IdleStep, IdleTask};

/// Two leg positions, alternated every step. All rows share one width.
const FRAMES: [[&str; 3]; 2] = [
    ["   ,~~,_ ", " _/ __ o)", " / \\  / \\"],
    ["   ,~~,_ ", " _/ __ o)", "  |\\  |\\ "],
];

const HORSE_WIDTH: i32 = 9;

pub struct Gallop {
    /// Screen column of the horse's left edge; negative while entering.
    x: i32,
    frame: usize,
}

impl Default for Gallop {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallop {
    pub fn new() -> Self {
        Self {
            x: -HORSE_WIDTH,
            frame: 0,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }
}

impl IdleTask for Gallop {
    fn step(&mut self, width: u16) -> IdleStep {
        self.x += 1;
        self.frame = (self.frame + 1) % FRAMES.len();
        if self.x >= i32::from(width) {
            IdleStep::Done
        } else {
            IdleStep::Continue
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let area = area.intersection(frame.area());
        if area.height < 3 || area.width == 0 {
            return;
        }
        let top = area.y + area.height / 2 - 1;
        let style = Style::default().fg(Color::Yellow);
        let buf = frame.buffer_mut();

        for (dy, row) in FRAMES[self.frame].iter().enumerate() {
            for (dx, ch) in row.chars().enumerate() {
                let col = self.x + dx as i32;
                if ch == ' ' || col < 0 || col >= i32::from(area.width) {
                    continue;
                }
                buf[(area.x + col as u16, top + dy as u16)]
                    .set_char(ch)
                    .set_style(style);
            }
        }
    }
}
