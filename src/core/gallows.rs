//! The progressively drawn hangman figure
//!
//! Which body parts are visible is a pure function of the remaining attempts.
//! Coordinates describe a 300x300 drawing area with the origin at the top left.

use super::round::MAX_ATTEMPTS;

/// One primitive of the drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { x: f64, y: f64, radius: f64 },
}

/// Side length of the square drawing area
pub const CANVAS_SIZE: f64 = 300.0;

/// Base, post, beam and rope. Always drawn.
pub const SCAFFOLD: [Stroke; 4] = [
    Stroke::Line { x1: 50.0, y1: 250.0, x2: 250.0, y2: 250.0 },
    Stroke::Line { x1: 200.0, y1: 250.0, x2: 200.0, y2: 100.0 },
    Stroke::Line { x1: 100.0, y1: 100.0, x2: 200.0, y2: 100.0 },
    Stroke::Line { x1: 150.0, y1: 100.0, x2: 150.0, y2: 120.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    /// Drawing order
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Position in drawing order, starting at 1
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Head => 1,
            Self::Body => 2,
            Self::LeftArm => 3,
            Self::RightArm => 4,
            Self::LeftLeg => 5,
            Self::RightLeg => 6,
        }
    }

    /// The part shows once the remaining attempts are at or below this value
    #[must_use]
    pub const fn threshold(self) -> u8 {
        MAX_ATTEMPTS - self.ordinal()
    }

    #[must_use]
    pub const fn is_visible(self, attempts_remaining: u8) -> bool {
        attempts_remaining <= self.threshold()
    }

    #[must_use]
    pub const fn stroke(self) -> Stroke {
        match self {
            Self::Head => Stroke::Circle { x: 150.0, y: 150.0, radius: 25.0 },
            Self::Body => Stroke::Line { x1: 150.0, y1: 175.0, x2: 150.0, y2: 225.0 },
            Self::LeftArm => Stroke::Line { x1: 150.0, y1: 200.0, x2: 125.0, y2: 175.0 },
            Self::RightArm => Stroke::Line { x1: 150.0, y1: 200.0, x2: 175.0, y2: 175.0 },
            Self::LeftLeg => Stroke::Line { x1: 150.0, y1: 225.0, x2: 125.0, y2: 250.0 },
            Self::RightLeg => Stroke::Line { x1: 150.0, y1: 225.0, x2: 175.0, y2: 250.0 },
        }
    }
}

/// Body parts visible with the given attempts left, in drawing order
#[must_use]
pub fn visible_parts(attempts_remaining: u8) -> Vec<BodyPart> {
    BodyPart::ALL
        .into_iter()
        .filter(|part| part.is_visible(attempts_remaining))
        .collect()
}

/// Every stroke of the full drawing for the given attempts left
#[must_use]
pub fn strokes(attempts_remaining: u8) -> Vec<Stroke> {
    SCAFFOLD
        .into_iter()
        .chain(visible_parts(attempts_remaining).into_iter().map(BodyPart::stroke))
        .collect()
}
