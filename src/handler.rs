use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{app::App, clock::Clock};

pub fn handle_key_events<C: Clock>(event: KeyEvent, app: &mut App<C>) {
    match event.code {
        // Exit application on `ESC` or `q`
        KeyCode::Esc | KeyCode::Char('q') => {
            app.quit();
        }
        // Exit application on `Ctrl-C`
        KeyCode::Char('c') => {
            if event.modifiers == KeyModifiers::CONTROL {
                app.quit();
            }
        }
        // Switch between receiving from and transmitting to the satellite
        KeyCode::Enter => {
            app.toggle_transmitter();
        }
        KeyCode::Char(' ') => {
            app.toggle_pause();
        }
        _ => {}
    }
}
