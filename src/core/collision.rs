//! Bird-vs-world collision and pipe scoring.
//!
//! The bird is a circle but is tested as its bounding box against the
//! ceiling, the ground and each pipe's gap. This is looser than exact
//! circle/rectangle intersection at the gap corners.

use super::bird::Bird;
use super::constants::{DIFFICULTY_INCREASE, GROUND_HEIGHT, SCREEN_HEIGHT};
use super::pipe::Pipe;

/// True if the bird touches the ceiling, the ground, or any pipe segment.
pub fn check_collision(bird: &Bird, pipes: &[Pipe]) -> bool {
    hits_bounds(bird) || pipes.iter().any(|pipe| hits_pipe(bird, pipe))
}

/// Ceiling or ground contact.
pub fn hits_bounds(bird: &Bird) -> bool {
    bird.top() <= 0.0 || bird.bottom() >= SCREEN_HEIGHT - GROUND_HEIGHT
}

/// Contact with one pipe: the spans overlap horizontally and the bird is
/// not fully inside the gap.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps = bird.right() > pipe.x && bird.left() < pipe.right();
    overlaps && (bird.top() < pipe.top_height || bird.bottom() > pipe.gap_bottom())
}

/// Round score and the speed future pipes will be spawned with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub score: u32,
    pub pipe_speed: f64,
}

/// Mark every pipe the bird has cleared as passed. Each newly passed pipe
/// scores a point and raises the spawn speed. Returns how many pipes were
/// passed this call.
pub fn score_passed_pipes(bird: &Bird, pipes: &mut [Pipe], progress: &mut Progress) -> u32 {
    let mut passed = 0;
    for pipe in pipes.iter_mut() {
        if !pipe.passed && pipe.right() < bird.x {
            pipe.passed = true;
            progress.score += 1;
            progress.pipe_speed += DIFFICULTY_INCREASE;
            passed += 1;
        }
    }
    passed
}
