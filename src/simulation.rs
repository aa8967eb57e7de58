use std::time::Instant;

use strum::Display;

use crate::config::Config;

/// Point in screen coordinates, y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Entity currently transmitting.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Transmitter {
    #[strum(to_string = "Receiving from Satellite")]
    Satellite,
    #[strum(to_string = "Transmitting to Satellite")]
    Observer,
}

impl Transmitter {
    pub fn toggled(self) -> Self {
        match self {
            Self::Satellite => Self::Observer,
            Self::Observer => Self::Satellite,
        }
    }
}

/// Expanding wavefront emitted by the transmitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    origin: Position,
    emitted_at: Instant,
}

impl Pulse {
    pub fn new(origin: Position, emitted_at: Instant) -> Self {
        Self { origin, emitted_at }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn emitted_at(&self) -> Instant {
        self.emitted_at
    }

    /// Radius in pixels at `now` for a wavefront travelling at `speed` px/s.
    pub fn radius(&self, now: Instant, speed: f64) -> f64 {
        speed * now.saturating_duration_since(self.emitted_at).as_secs_f64()
    }
}

/// Complete state of the animation.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: Config,

    satellite: Position,
    observer: Position,
    pulses: Vec<Pulse>,
    last_emission: Instant,

    transmitter: Transmitter,
    /// Whether the satellite may emit; false while it waits off screen for
    /// its pulses to dissipate.
    satellite_active: bool,
    paused: bool,
}

impl Simulation {
    /// Constructs a new simulation whose emission clock starts at `now`.
    pub fn new(config: Config, now: Instant) -> Self {
        let (observer_x, observer_y) = config.observer;
        Self {
            satellite: Position::new(0.0, config.satellite_y),
            observer: Position::new(observer_x, observer_y),
            pulses: Vec::new(),
            last_emission: now,
            transmitter: Transmitter::Satellite,
            satellite_active: true,
            paused: false,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn satellite(&self) -> Position {
        self.satellite
    }

    pub fn observer(&self) -> Position {
        self.observer
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn transmitter(&self) -> Transmitter {
        self.transmitter
    }

    pub fn satellite_active(&self) -> bool {
        self.satellite_active
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Radius of `pulse` at `now` under this simulation's propagation speed.
    pub fn pulse_radius(&self, pulse: &Pulse, now: Instant) -> f64 {
        pulse.radius(now, self.config.pulse_speed)
    }

    /// Switches between satellite and observer transmitting.
    pub fn toggle_transmitter(&mut self) {
        self.transmitter = self.transmitter.toggled();
        self.satellite.x = self.config.start_x();
        self.satellite_active = true;
        self.pulses.clear();
        log::debug!("transmitter switched: {}", self.transmitter);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if !self.paused {
            // Radii are derived from wall time and would jump.
            self.pulses.clear();
        }
        log::debug!("paused: {}", self.paused);
    }

    /// Advances the simulation by one frame. Does nothing while paused.
    pub fn step(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        self.move_satellite();
        self.emit(now);
        self.expire(now);
    }

    fn move_satellite(&mut self) {
        let dormant = self.transmitter == Transmitter::Satellite && !self.satellite_active;
        if !dormant {
            self.satellite.x += self.config.satellite_speed;
        }
        if self.satellite.x <= self.config.limit() {
            return;
        }

        match self.transmitter {
            Transmitter::Satellite if self.pulses.is_empty() => {
                self.satellite.x = self.config.start_x();
                self.satellite_active = true;
                log::debug!("satellite wrapped");
            }
            Transmitter::Satellite => {
                if self.satellite_active {
                    log::debug!("satellite dormant, {} pulses live", self.pulses.len());
                }
                self.satellite_active = false;
            }
            Transmitter::Observer => {
                self.satellite.x = self.config.start_x();
            }
        }
    }

    fn emit(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_emission) < self.config.pulse_delay {
            return;
        }
        self.last_emission = now;

        let origin = match self.transmitter {
            Transmitter::Satellite if self.satellite_active => self.satellite,
            Transmitter::Satellite => return,
            Transmitter::Observer => self.observer,
        };
        log::trace!("pulse emitted at ({}, {})", origin.x, origin.y);
        self.pulses.push(Pulse::new(origin, now));
    }

    fn expire(&mut self, now: Instant) {
        let limit = self.config.limit();
        let speed = self.config.pulse_speed;
        let before = self.pulses.len();
        self.pulses.retain(|pulse| pulse.radius(now, speed) <= limit);
        if self.pulses.len() != before {
            log::trace!("{} pulses expired", before - self.pulses.len());
        }
    }
}
