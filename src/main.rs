use macroquad::prelude::*;

use conway_life::{
    application::AppState,
    domain::Universe,
    input, rendering,
    ui::{self, PANEL_WIDTH},
};

const UNIVERSE_HEIGHT: usize = 64;
const UNIVERSE_WIDTH: usize = 64;

fn window_conf() -> Conf {
    let (board_w, board_h) = rendering::board_pixel_size(UNIVERSE_WIDTH, UNIVERSE_HEIGHT);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (board_w + PANEL_WIDTH) as i32,
        window_height: board_h as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Dimensions are compile-time constants; a failure here is a programming
    // mistake, not a runtime condition.
    let universe = Universe::random(UNIVERSE_HEIGHT, UNIVERSE_WIDTH)
        .expect("deployment dimensions must describe a non-empty universe");
    let mut state = AppState::new(universe);
    let mut canvas = rendering::ScreenCanvas;

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        state = input::process_button_clicks(state, &buttons, mouse_pos);

        clear_background(WHITE);
        rendering::draw_grid_lines(&mut canvas, state.engine.width(), state.engine.height());
        rendering::draw_cells(&mut canvas, &state.engine);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
