//! Aim preview
//!
//! Predicts where the bird would fly if released now, using the same gravity
//! and Euler step as the integrator. Targets are ignored; the path stops at
//! the ground or the side of the play surface.

use glam::Vec2;

use super::sling::launch_velocity;
use super::state::GameState;
use crate::tuning::Tuning;

/// Default number of predicted ticks
pub const PREVIEW_STEPS: usize = 60;

/// Predicted bird centers for the next `steps` ticks after release
///
/// Empty unless a drag is in progress.
pub fn predict_trajectory(state: &GameState, tuning: &Tuning, steps: usize) -> Vec<Vec2> {
    if !state.is_dragging() {
        return Vec::new();
    }

    let radius = state.bird.radius;
    let ground_y = state.ground_y();
    let mut pos = state.bird.pos;
    let mut vel = launch_velocity(pos, tuning.launch_power);
    let mut points = Vec::with_capacity(steps);

    for _ in 0..steps {
        vel.y += tuning.gravity;
        pos += vel;
        if pos.y + radius >= ground_y {
            points.push(Vec2::new(pos.x, ground_y - radius));
            break;
        }
        if pos.x < 0.0 || pos.x > state.bounds.x {
            break;
        }
        points.push(pos);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sling::{begin_drag, end_drag, update_drag};
    use crate::sim::tick::integrate;
    use crate::sling_anchor;

    fn aimed(pull: Vec2) -> (GameState, Tuning) {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        begin_drag(&mut state, &tuning, sling_anchor());
        update_drag(&mut state, &tuning, sling_anchor() + pull);
        (state, tuning)
    }

    #[test]
    fn test_empty_when_not_dragging() {
        let state = GameState::new();
        assert!(predict_trajectory(&state, &Tuning::default(), PREVIEW_STEPS).is_empty());
    }

    #[test]
    fn test_matches_integrator_in_open_air() {
        let (mut state, tuning) = aimed(Vec2::new(-60.0, 60.0));
        let predicted = predict_trajectory(&state, &tuning, 10);
        assert_eq!(predicted.len(), 10);

        end_drag(&mut state, &tuning);
        for expected in predicted {
            integrate(&mut state, &tuning);
            assert!(state.bird.pos.distance(expected) < 1e-3);
        }
    }

    #[test]
    fn test_stops_at_ground() {
        let (state, tuning) = aimed(Vec2::new(-40.0, 0.0));
        let points = predict_trajectory(&state, &tuning, 500);
        assert!(points.len() < 500);
        let last = points.last().copied().unwrap();
        assert!((last.y + state.bird.radius - state.ground_y()).abs() < 1e-3);
        assert!(points.iter().all(|p| p.y + state.bird.radius <= state.ground_y() + 1e-3));
    }
}
