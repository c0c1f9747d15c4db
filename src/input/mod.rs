use crate::application::AppState;
use crate::domain::Engine;
use crate::ui::Button;

/// Apply this frame's button clicks to the state. The tick button is the
/// only control; the click handler runs synchronously within the frame, so
/// a click can never land mid-tick.
pub fn process_button_clicks<E: Engine>(
    state: AppState<E>,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> AppState<E> {
    buttons.iter().enumerate().fold(state, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.step(),
            _ => s,
        }
    })
}
