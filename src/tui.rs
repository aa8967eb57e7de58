use std::{io, panic};

use anyhow::{Context, Result};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use ratatui::{backend::Backend, Terminal};

use crate::{
    app::App, clock::Clock, config::CAPTION, event::EventHandler, widgets::doppler::Doppler,
};

/// Representation of a terminal user interface.
///
/// It is responsible for setting up the terminal,
/// initializing the interface and handling the draw events.
#[derive(Debug)]
pub struct Tui<B: Backend> {
    /// Interface to the Terminal.
    terminal: Terminal<B>,
    /// Terminal event handler.
    pub events: EventHandler,
}

impl<B: Backend> Tui<B> {
    /// Constructs a new instance of [`Tui`].
    pub fn new(terminal: Terminal<B>, events: EventHandler) -> Self {
        Self { terminal, events }
    }

    /// Initializes the terminal interface.
    ///
    /// It enables the raw mode and sets terminal properties.
    pub fn init(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.setup().or_else(|err| restore_after(Err(err), reset))
    }

    fn setup(&mut self) -> Result<()> {
        crossterm::execute!(io::stdout(), EnterAlternateScreen, SetTitle(CAPTION))
            .context("failed to enter alternate screen")?;

        // Define a custom panic hook to reset the terminal properties.
        // This way, you won't have your terminal messed up if an unexpected error happens.
        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            reset().expect("failed to reset the terminal");
            panic_hook(panic);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// [`Draw`] the terminal interface by rendering the [`Doppler`] widget.
    ///
    /// [`Draw`]: ratatui::Terminal::draw
    pub fn render<C: Clock>(&mut self, app: &App<C>) -> Result<()> {
        self.terminal.draw(|frame| {
            let doppler = Doppler::new(&app.simulation, app.frame_time());
            frame.render_widget(doppler, frame.area());
        })?;
        Ok(())
    }

    /// Exits the terminal interface.
    ///
    /// It disables the raw mode and reverts back the terminal properties.
    pub fn exit(&mut self) -> Result<()> {
        reset()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Resets the terminal interface.
///
/// This function is also used for the panic hook to revert
/// the terminal properties if unexpected errors occur.
fn reset() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `restore` regardless of `result`.
///
/// The error in `result` wins over a failure to restore.
pub fn restore_after<T>(result: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::anyhow;

    use super::*;

    #[test]
    fn restores_after_success() {
        let called = Cell::new(false);
        let value = restore_after(Ok(7), || {
            called.set(true);
            Ok(())
        })
        .unwrap();
        assert_eq!(value, 7);
        assert!(called.get());
    }

    #[test]
    fn restores_after_failure_and_keeps_error() {
        let called = Cell::new(false);
        let result: Result<()> = Err(anyhow!("failed to enter alternate screen"));
        let err = restore_after(result, || {
            called.set(true);
            Err(anyhow!("failed to reset"))
        })
        .unwrap_err();
        assert!(called.get());
        assert_eq!(err.to_string(), "failed to enter alternate screen");
    }

    #[test]
    fn restore_failure_surfaces_after_success() {
        let err = restore_after(Ok(()), || Err(anyhow!("failed to reset"))).unwrap_err();
        assert_eq!(err.to_string(), "failed to reset");
    }
}
