use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context},
        Block, Widget,
    },
};

use crate::{
    config::{CAPTION, DISCLAIMER},
    simulation::{Position, Simulation},
};

use super::shapes::{Disc, StickFigure};

/// Draws the satellite, the observer and the live pulses.
pub struct Doppler<'a> {
    pub simulation: &'a Simulation,
    /// Time the pulse radii are evaluated at.
    pub now: Instant,
    pub pulse_color: Color,
    pub satellite_color: Color,
    pub observer_color: Color,
}

impl<'a> Doppler<'a> {
    pub fn new(simulation: &'a Simulation, now: Instant) -> Self {
        Self {
            simulation,
            now,
            pulse_color: Color::Blue,
            satellite_color: Color::Red,
            observer_color: Color::White,
        }
    }

    /// Converts screen coordinates (y down) to canvas coordinates (y up).
    fn to_canvas(&self, position: Position) -> (f64, f64) {
        (position.x, self.simulation.config().height - position.y)
    }

    fn paint(&self, ctx: &mut Context) {
        let height = self.simulation.config().height;

        for pulse in self.simulation.pulses() {
            let (x, y) = self.to_canvas(pulse.origin());
            ctx.draw(&Circle {
                x,
                y,
                radius: self.simulation.pulse_radius(pulse, self.now),
                color: self.pulse_color,
            });
        }

        let (x, y) = self.to_canvas(self.simulation.satellite());
        ctx.draw(&Disc {
            x,
            y,
            radius: self.simulation.config().satellite_radius,
            color: self.satellite_color,
        });

        let (x, y) = self.to_canvas(self.simulation.observer());
        ctx.draw(&StickFigure {
            x,
            y,
            color: self.observer_color,
        });

        ctx.print(
            10.0,
            height - 10.0,
            self.simulation.transmitter().to_string().white(),
        );
        ctx.print(10.0, 30.0, DISCLAIMER.white());
    }
}

impl Widget for Doppler<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let config = self.simulation.config();
        let block = Block::bordered()
            .title(CAPTION.blue())
            .title_bottom(" Enter: switch direction | Space: pause | Esc: quit ".dark_gray());

        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .paint(|ctx| self.paint(ctx))
            .x_bounds([0.0, config.width])
            .y_bounds([0.0, config.height])
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::Config;

    fn render(simulation: &Simulation, now: Instant) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Doppler::new(simulation, now).render(area, &mut buf);
        buf
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        let width = buf.area.width as usize;
        buf.content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn status_follows_transmitter() {
        let now = Instant::now();
        let mut simulation = Simulation::new(Config::default(), now);

        let text = rows(&render(&simulation, now)).join("\n");
        assert!(text.contains("Receiving from Satellite"));
        assert!(text.contains("NOT TO SCALE"));
        assert!(text.contains(CAPTION));

        simulation.toggle_transmitter();
        let text = rows(&render(&simulation, now)).join("\n");
        assert!(text.contains("Transmitting to Satellite"));
        assert!(!text.contains("Receiving from Satellite"));
    }

    #[test]
    fn disclaimer_is_in_lower_left() {
        let now = Instant::now();
        let simulation = Simulation::new(Config::default(), now);
        let rows = rows(&render(&simulation, now));

        let (index, row) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.contains(DISCLAIMER))
            .unwrap();
        assert!(index >= rows.len() - 3);
        assert!(row.find(DISCLAIMER).unwrap() < 5);
    }

    #[test]
    fn draws_entities_in_their_colors() {
        let start = Instant::now();
        let mut simulation = Simulation::new(Config::default(), start);
        let now = start + Duration::from_millis(500);
        simulation.step(now);

        let buf = render(&simulation, now + Duration::from_secs(1));
        let has = |color| buf.content().iter().any(|cell| cell.fg == color);
        assert!(has(Color::Red));
        assert!(has(Color::Blue));
        assert!(has(Color::White));
    }

    #[test]
    fn satellite_size_follows_config() {
        let now = Instant::now();
        let red_cells = |satellite_radius| {
            let config = Config {
                satellite_radius,
                satellite_y: 360.0,
                ..Config::default()
            };
            let simulation = Simulation::new(config, now);
            let buf = render(&simulation, now);
            buf.content().iter().filter(|cell| cell.fg == Color::Red).count()
        };
        assert!(red_cells(80.0) > red_cells(10.0));
    }

    #[test]
    fn rendering_leaves_state_untouched() {
        let start = Instant::now();
        let mut simulation = Simulation::new(Config::default(), start);
        simulation.step(start + Duration::from_millis(500));
        let before = simulation.clone();

        render(&simulation, start + Duration::from_secs(2));
        assert_eq!(simulation.satellite(), before.satellite());
        assert_eq!(simulation.pulses(), before.pulses());
    }
}
