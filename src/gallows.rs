use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Line};

/// Drawing space for the gallows, in canvas units. The y axis points up.
pub const CANVAS_SIZE: f64 = 300.0;

/// One fixed piece of the drawing: a straight line or the head oval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Head { x: f64, y: f64, radius: f64 },
}

impl Segment {
    pub fn paint(&self, ctx: &mut Context, color: Color) {
        match *self {
            Segment::Line { x1, y1, x2, y2 } => {
                ctx.draw(&Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                });
            }
            Segment::Head { x, y, radius } => {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius,
                    color,
                });
            }
        }
    }
}

/// Base, pole, beam, and rope. Always drawn.
pub const SCAFFOLD: [Segment; 4] = [
    Segment::Line {
        x1: 20.0,
        y1: 20.0,
        x2: 280.0,
        y2: 20.0,
    },
    Segment::Line {
        x1: 60.0,
        y1: 20.0,
        x2: 60.0,
        y2: 250.0,
    },
    Segment::Line {
        x1: 60.0,
        y1: 250.0,
        x2: 180.0,
        y2: 250.0,
    },
    Segment::Line {
        x1: 180.0,
        y1: 250.0,
        x2: 180.0,
        y2: 220.0,
    },
];

/// Head, torso, left arm, right arm, left leg, right leg. One appears per
/// incorrect guess, in this order.
pub const BODY_PARTS: [Segment; 6] = [
    Segment::Head {
        x: 180.0,
        y: 200.0,
        radius: 20.0,
    },
    Segment::Line {
        x1: 180.0,
        y1: 180.0,
        x2: 180.0,
        y2: 110.0,
    },
    Segment::Line {
        x1: 180.0,
        y1: 160.0,
        x2: 150.0,
        y2: 140.0,
    },
    Segment::Line {
        x1: 180.0,
        y1: 160.0,
        x2: 210.0,
        y2: 140.0,
    },
    Segment::Line {
        x1: 180.0,
        y1: 110.0,
        x2: 150.0,
        y2: 70.0,
    },
    Segment::Line {
        x1: 180.0,
        y1: 110.0,
        x2: 210.0,
        y2: 70.0,
    },
];

/// Body parts visible after `incorrect` wrong guesses.
pub fn visible_parts(incorrect: usize) -> &'static [Segment] {
    &BODY_PARTS[..incorrect.min(BODY_PARTS.len())]
}
