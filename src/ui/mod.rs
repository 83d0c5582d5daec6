pub mod flappy_scene;
pub mod game_common;
pub mod raster;

use crate::core::session::SessionView;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, view: &SessionView<'_>) {
    let size = frame.size();
    flappy_scene::render_flappy(frame, size, view);
}
