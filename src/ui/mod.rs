mod button;

pub use button::Button;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Cell square edge in pixels
pub const CELL_SIZE: f32 = 5.0;

/// X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Create the control buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![Button::new(
        px + 12.0,
        24.0,
        PANEL_WIDTH - 24.0,
        BUTTON_HEIGHT,
        "Tick",
    )]
}
