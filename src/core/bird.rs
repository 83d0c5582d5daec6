//! The player-controlled bird.

use super::constants::{
    BIRD_RADIUS, BIRD_START_X, BIRD_START_Y, FLAP_STRENGTH, GRAVITY, WING_PHASES,
    WING_PHASE_TICKS,
};

/// Vertical wing offset (px) for each animation phase.
const WING_OFFSETS: [f64; WING_PHASES as usize] = [0.0, -5.0, 0.0];

/// Base beak length in px; the beak grows with speed.
const BEAK_BASE_LENGTH: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position.
    pub x: f64,
    /// Vertical position of the body centre (y grows downward).
    pub y: f64,
    /// Vertical velocity in px/tick (positive = downward).
    pub velocity: f64,
    pub radius: f64,
    /// Wing animation phase, `0..WING_PHASES`.
    pub wing_phase: u8,
    /// Ticks since the last wing phase change.
    pub wing_counter: u32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    /// A bird at the round-start position, at rest.
    pub fn new() -> Self {
        Self::at(BIRD_START_X, BIRD_START_Y)
    }

    /// A bird at rest at an arbitrary position (used for the decorative
    /// birds on the start and game-over screens).
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            radius: BIRD_RADIUS,
            wing_phase: 0,
            wing_counter: 0,
        }
    }

    /// Sets velocity straight to the flap strength. Repeated flaps do not stack.
    pub fn flap(&mut self) {
        self.velocity = FLAP_STRENGTH;
    }

    /// Advance one physics tick: gravity, then position, then wing animation.
    pub fn tick(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        self.wing_counter += 1;
        if self.wing_counter >= WING_PHASE_TICKS {
            self.wing_counter = 0;
            self.wing_phase = (self.wing_phase + 1) % WING_PHASES;
        }
    }

    pub fn wing_offset(&self) -> f64 {
        WING_OFFSETS[self.wing_phase as usize % WING_OFFSETS.len()]
    }

    pub fn beak_length(&self) -> f64 {
        BEAK_BASE_LENGTH + self.velocity.abs()
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }

    pub fn left(&self) -> f64 {
        self.x - self.radius
    }

    pub fn right(&self) -> f64 {
        self.x + self.radius
    }
}
