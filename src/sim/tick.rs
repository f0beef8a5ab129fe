//! Fixed timestep simulation tick
//!
//! Core game loop: integrate the bird, resolve collisions, evaluate the round.
//! All quantities are per tick; one tick is one 60 Hz frame.

use super::collision::check_collisions;
use super::state::{GameEvent, GameState, Hint, Mode};
use super::status::update_status;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::tuning::Tuning;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, tuning: &Tuning) {
    state.time_ticks += 1;
    integrate(state, tuning);
    check_collisions(state, tuning);
    update_status(state);
}

/// Gravity, Euler step, ground/wall bounces and rest detection
///
/// Does nothing unless the bird is flying.
pub fn integrate(state: &mut GameState, tuning: &Tuning) {
    if !state.is_flying() {
        return;
    }

    let ground_y = state.ground_y();
    let width = state.bounds.x;
    let bird = &mut state.bird;

    bird.vel.y += tuning.gravity;
    bird.pos += bird.vel;

    // Ground: clamp onto the line and bounce with energy loss
    if bird.bottom() > ground_y {
        bird.pos.y = ground_y - bird.radius;
        bird.vel.y *= -tuning.ground_restitution;
        bird.vel.x *= tuning.ground_friction;
    }

    // Walls: only bounce while heading out, so an overshoot can't flip twice
    if bird.pos.x + bird.radius > width && bird.vel.x > 0.0 {
        bird.pos.x = width - bird.radius;
        bird.vel.x *= -tuning.wall_restitution;
    } else if bird.pos.x - bird.radius < 0.0 && bird.vel.x < 0.0 {
        bird.pos.x = bird.radius;
        bird.vel.x *= -tuning.wall_restitution;
    }

    if bird.vel.x.abs() < tuning.rest_epsilon && bird.vel.y.abs() < tuning.rest_epsilon {
        state.mode = Mode::Idle;
        state.events.push(GameEvent::BirdAtRest {
            velocity: state.bird.vel,
        });
        log::debug!(
            "Bird at rest at ({:.1}, {:.1}) after {} ticks",
            state.bird.pos.x,
            state.bird.pos.y,
            state.time_ticks
        );
        if state.pigs_remaining() > 0 && state.birds_left > 0 {
            state.hint = Hint::NextShot;
            state.reset_bird();
        }
    }
}

/// Fixed-step accumulator driving [`tick`] from variable frame deltas
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame delta (seconds) and run the ticks it covers
    ///
    /// Returns the number of ticks run (at most `MAX_SUBSTEPS`).
    pub fn advance(&mut self, dt: f32, state: &mut GameState, tuning: &Tuning) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, tuning);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Forget any partial tick (on reset)
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}
