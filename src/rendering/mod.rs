use macroquad::prelude::*;

use crate::application::AppState;
use crate::domain::Engine;
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, panel_x};

// Flat palette, fixed at compile time
pub const GRID_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0); // #CCCCCC
pub const DEAD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0); // #FFFFFF
pub const ALIVE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0); // #000000

const PANEL_BG: Color = Color::new(0.93, 0.93, 0.93, 1.0);

/// Board size in pixels: each cell square plus a 1 px gutter, closed by a
/// final gutter on the far edge.
pub fn board_pixel_size(width: usize, height: usize) -> (f32, f32) {
    (
        (CELL_SIZE + 1.0) * width as f32 + 1.0,
        (CELL_SIZE + 1.0) * height as f32 + 1.0,
    )
}

/// Drawing surface for the board. The real implementation hits the screen;
/// tests substitute a recording one to assert exact fill sequences.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color);
}

/// Canvas backed by the macroquad screen
pub struct ScreenCanvas;

impl Canvas for ScreenCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        draw_line(x1, y1, x2, y2, 1.0, color);
    }
}

/// Decode one cell from the packed snapshot:
/// byte `idx / 8`, mask `1 << (idx % 8)`
fn is_bit_set(idx: usize, bits: &[u8]) -> bool {
    bits[idx / 8] & (1 << (idx % 8)) != 0
}

/// Draw the static gutter lines between cells. Independent of generation
/// state; a tick does not force this pass.
pub fn draw_grid_lines<C: Canvas>(canvas: &mut C, width: usize, height: usize) {
    let (board_w, board_h) = board_pixel_size(width, height);

    for col in 0..=width {
        let x = col as f32 * (CELL_SIZE + 1.0) + 1.0;
        canvas.line(x, 0.0, x, board_h, GRID_COLOR);
    }
    for row in 0..=height {
        let y = row as f32 * (CELL_SIZE + 1.0) + 1.0;
        canvas.line(0.0, y, board_w, y, GRID_COLOR);
    }
}

/// Fill one square per cell in row-major order, alive or dead color,
/// reading states from the engine's packed snapshot.
pub fn draw_cells<C: Canvas>(canvas: &mut C, engine: &dyn Engine) {
    let (width, height) = (engine.width(), engine.height());
    let cells = engine.snapshot();

    for row in 0..height {
        for col in 0..width {
            let idx = row * width + col;
            let color = if is_bit_set(idx, cells) {
                ALIVE_COLOR
            } else {
                DEAD_COLOR
            };

            canvas.fill_rect(
                col as f32 * (CELL_SIZE + 1.0) + 1.0,
                row as f32 * (CELL_SIZE + 1.0) + 1.0,
                CELL_SIZE,
                CELL_SIZE,
                color,
            );
        }
    }
}

/// Draw the side panel: tick button, generation counter, universe info
pub fn draw_controls<E: Engine>(state: &AppState<E>, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), PANEL_BG);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 12.0;
    let generation = state.generation.to_string();
    let dimensions = format!("{}x{}", state.engine.width(), state.engine.height());
    let population = format!("{} alive", state.engine.population());

    let labels = [
        ("Generation:", px, 110.0, 16.0, DARKGRAY),
        (generation.as_str(), px, 134.0, 24.0, BLACK),
        ("Universe:", px, 170.0, 16.0, DARKGRAY),
        (dimensions.as_str(), px, 190.0, 16.0, BLACK),
        (population.as_str(), px, 210.0, 16.0, BLACK),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}
