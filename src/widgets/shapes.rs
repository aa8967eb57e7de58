use ratatui::{
    style::Color,
    widgets::canvas::{Circle, Line, Painter, Shape},
};

/// Filled circle.
#[derive(Debug, Clone)]
pub struct Disc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        // Sample on a one unit grid; finer than any terminal resolution for
        // the coordinate ranges used here.
        let steps = self.radius.ceil() as i64;
        for i in -steps..=steps {
            for j in -steps..=steps {
                let (dx, dy) = (i as f64, j as f64);
                if dx * dx + dy * dy > self.radius * self.radius {
                    continue;
                }
                if let Some((x, y)) = painter.get_point(self.x + dx, self.y + dy) {
                    painter.paint(x, y, self.color);
                }
            }
        }
    }
}

/// Stick figure whose head is centred at (`x`, `y`) in canvas coordinates.
#[derive(Debug, Clone)]
pub struct StickFigure {
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

impl Shape for StickFigure {
    fn draw(&self, painter: &mut Painter) {
        let (x, y, color) = (self.x, self.y, self.color);

        // Head
        Circle {
            x: x + 1.0,
            y,
            radius: 7.0,
            color,
        }
        .draw(painter);
        // Body
        Line::new(x, y, x, y - 20.0, color).draw(painter);
        // Arms
        Line::new(x - 8.0, y - 10.0, x + 8.0, y - 10.0, color).draw(painter);
        // Legs
        Line::new(x, y - 20.0, x - 5.0, y - 30.0, color).draw(painter);
        Line::new(x, y - 20.0, x + 5.0, y - 30.0, color).draw(painter);
    }
}
