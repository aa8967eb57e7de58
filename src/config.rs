use std::time::Duration;

/// Width of the virtual screen in pixels.
pub const WIDTH: f64 = 1280.0;
/// Height of the virtual screen in pixels.
pub const HEIGHT: f64 = 720.0;

/// Extra space beyond the screen edges.
pub const PADDING: f64 = 50.0;

/// Horizontal satellite movement per frame in pixels.
pub const SATELLITE_SPEED: f64 = 2.0;
/// Pulse propagation speed in pixels per second.
pub const PULSE_SPEED: f64 = 200.0;
/// Interval between two emissions.
pub const PULSE_DELAY: Duration = Duration::from_millis(500);

pub const FRAME_RATE: f64 = 60.0;

pub const SATELLITE_RADIUS: f64 = 10.0;

pub const CAPTION: &str = "KH6WI Doppler Shift Simulation";
pub const DISCLAIMER: &str = "NOT TO SCALE";

/// Simulation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub satellite_speed: f64,
    pub pulse_speed: f64,
    pub pulse_delay: Duration,
    pub satellite_y: f64,
    pub satellite_radius: f64,
    pub observer: (f64, f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            satellite_speed: SATELLITE_SPEED,
            pulse_speed: PULSE_SPEED,
            pulse_delay: PULSE_DELAY,
            satellite_y: 100.0,
            satellite_radius: SATELLITE_RADIUS,
            observer: (WIDTH / 2.0, HEIGHT - 50.0),
        }
    }
}

impl Config {
    /// Off-screen x coordinate every pass after the first starts from.
    pub fn start_x(&self) -> f64 {
        -self.padding
    }

    /// Distance past which the satellite is off screen and pulses are dropped.
    pub fn limit(&self) -> f64 {
        self.width + self.padding
    }

    /// Time a pulse lives before its radius exceeds [`Config::limit`].
    pub fn pulse_lifetime(&self) -> Duration {
        Duration::from_secs_f64(self.limit() / self.pulse_speed)
    }
}
