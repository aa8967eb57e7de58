use std::time::Instant;

use crate::{
    clock::{Clock, SystemClock},
    config::Config,
    simulation::Simulation,
};

/// Application.
pub struct App<C: Clock = SystemClock> {
    /// Is the application running?
    pub running: bool,

    pub simulation: Simulation,

    clock: C,
    /// Time of the latest simulated frame, used to draw pulse radii.
    frame_time: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self::with_clock(Config::default(), SystemClock)
    }
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        let now = clock.now();
        Self {
            running: true,
            simulation: Simulation::new(config, now),
            clock,
            frame_time: now,
        }
    }

    /// Handles the tick event of the terminal.
    ///
    /// Returns whether a new frame should be drawn.
    pub fn tick(&mut self) -> bool {
        if self.simulation.paused() {
            return false;
        }
        self.frame_time = self.clock.now();
        self.simulation.step(self.frame_time);
        true
    }

    pub fn frame_time(&self) -> Instant {
        self.frame_time
    }

    pub fn toggle_transmitter(&mut self) {
        self.simulation.toggle_transmitter();
    }

    pub fn toggle_pause(&mut self) {
        self.simulation.toggle_pause();
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn tick_steps_until_paused() {
        let clock = ManualClock::default();
        let mut app = App::with_clock(Config::default(), &clock);

        clock.advance(Duration::from_millis(500));
        assert!(app.tick());
        assert_eq!(app.frame_time(), clock.now());
        assert_eq!(app.simulation.pulses().len(), 1);

        app.toggle_pause();
        clock.advance(Duration::from_millis(500));
        assert!(!app.tick());
        assert_eq!(app.simulation.pulses().len(), 1);
        assert_eq!(app.simulation.satellite().x, 2.0);
    }

    #[test]
    fn quit_stops_running() {
        let mut app = App::with_clock(Config::default(), ManualClock::default());
        assert!(app.running);
        app.quit();
        assert!(!app.running);
    }
}
