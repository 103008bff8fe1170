use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::components::{LayoutView, NoticeOverlay};
use crate::tui::controller::Controller;
use crate::tui::theme::Theme;

/// Paint one frame: the top layout, any idle animation over it, and the
/// notice overlay when a condition is being shown.
pub fn draw_ui(frame: &mut Frame, controller: &Controller, theme: &Theme, notice: Option<&str>) {
    let area = frame.area();
    if let Some(message) = notice {
        NoticeOverlay::new(message, theme).render(frame, area);
        return;
    }
    LayoutView::new(controller.top(), theme).render(frame, area);
    if let Some(task) = controller.idle_task() {
        task.render(frame, area);
    }
}
