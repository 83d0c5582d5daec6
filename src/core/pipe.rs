//! Pipe obstacles: a top and bottom segment with a gap between them.

use super::constants::{PIPE_GAP, PIPE_MARGIN, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::Rng;

/// Axis-aligned rectangle in world px (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A single pipe obstacle (top + bottom pair with a gap).
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    pub width: f64,
    /// Height of the top segment; the gap starts here.
    pub top_height: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub passed: bool,
    /// Scroll speed in px/tick, frozen at spawn time.
    pub speed: f64,
}

/// Inclusive range of valid `top_height` values.
pub fn top_height_range() -> (u32, u32) {
    let max = SCREEN_HEIGHT as u32 - PIPE_GAP as u32 - PIPE_MARGIN;
    (PIPE_MARGIN, max)
}

impl Pipe {
    /// Spawn a pipe at the right edge with a random gap position.
    pub fn spawn<R: Rng>(speed: f64, rng: &mut R) -> Self {
        let (min, max) = top_height_range();
        let top_height = rng.gen_range(min..=max);
        Self::with_top_height(speed, top_height as f64)
    }

    /// Spawn a pipe at the right edge with a known gap position.
    pub fn with_top_height(speed: f64, top_height: f64) -> Self {
        Self {
            x: SCREEN_WIDTH,
            width: PIPE_WIDTH,
            top_height,
            passed: false,
            speed,
        }
    }

    pub fn tick(&mut self) {
        self.x -= self.speed;
    }

    /// True once the right edge has scrolled past the left boundary.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y where the bottom segment starts.
    pub fn gap_bottom(&self) -> f64 {
        self.top_height + PIPE_GAP
    }

    pub fn top_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            width: self.width,
            height: self.top_height,
        }
    }

    pub fn bottom_rect(&self) -> Rect {
        let y = self.gap_bottom();
        Rect {
            x: self.x,
            y,
            width: self.width,
            height: SCREEN_HEIGHT - y,
        }
    }
}
