//! Slingshot input mapping
//!
//! Turns pointer coordinates into a clamped pull and, on release, a launch
//! velocity. Every operation is a silent no-op when its guard fails.

use glam::Vec2;

use super::state::{GameEvent, GameState, Hint, Mode};
use crate::sling_anchor;
use crate::tuning::Tuning;

/// Pointer input in play-surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// Pointer left the play surface (ends a drag like `Up`)
    Leave,
}

/// Route a pointer event to the matching drag operation
pub fn apply_pointer(state: &mut GameState, tuning: &Tuning, event: PointerEvent) {
    match event {
        PointerEvent::Down { x, y } => {
            begin_drag(state, tuning, Vec2::new(x, y));
        }
        PointerEvent::Move { x, y } => update_drag(state, tuning, Vec2::new(x, y)),
        PointerEvent::Up | PointerEvent::Leave => end_drag(state, tuning),
    }
}

/// Grab the bird if the pointer is on it
///
/// Returns true if a drag started.
pub fn begin_drag(state: &mut GameState, tuning: &Tuning, pointer: Vec2) -> bool {
    if state.is_flying() || state.birds_left == 0 {
        return false;
    }
    let reach = state.bird.radius + tuning.grab_tolerance;
    if pointer.distance(state.bird.pos) > reach {
        return false;
    }
    state.mode = Mode::Dragging;
    state.hint = Hint::Aiming;
    true
}

/// Move the bird along the pointer direction, capped at the maximum pull
pub fn update_drag(state: &mut GameState, tuning: &Tuning, pointer: Vec2) {
    if !state.is_dragging() {
        return;
    }
    let anchor = sling_anchor();
    let offset = clamp_pull(pointer - anchor, tuning.max_pull);
    state.bird.pos = anchor + offset;
}

/// Release the bird toward the anchor
pub fn end_drag(state: &mut GameState, tuning: &Tuning) {
    if !state.is_dragging() {
        return;
    }
    state.bird.vel = launch_velocity(state.bird.pos, tuning.launch_power);
    state.mode = Mode::Flying;
    state.birds_left = state.birds_left.saturating_sub(1);
    state.hint = Hint::Flying;
    state.events.push(GameEvent::Launched {
        birds_left: state.birds_left,
    });
    log::debug!(
        "Launched with velocity ({:.2}, {:.2}), {} birds left",
        state.bird.vel.x,
        state.bird.vel.y,
        state.birds_left
    );
}

/// Cap the length of a pull vector, keeping its direction
#[inline]
pub fn clamp_pull(offset: Vec2, max_pull: f32) -> Vec2 {
    offset.clamp_length_max(max_pull)
}

/// Velocity for a bird released at `pos`: proportional to the way back to the anchor
#[inline]
pub fn launch_velocity(pos: Vec2, launch_power: f32) -> Vec2 {
    (sling_anchor() - pos) * launch_power
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn anchor() -> Vec2 {
        sling_anchor()
    }

    #[test]
    fn test_begin_drag_on_bird() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        let grabbed = begin_drag(&mut state, &tuning, anchor() + Vec2::new(5.0, 5.0));
        assert!(grabbed);
        assert_eq!(state.mode, Mode::Dragging);
        assert_eq!(state.hint, Hint::Aiming);
    }

    #[test]
    fn test_begin_drag_within_tolerance() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        // Radius 18 + tolerance 10 = 28
        assert!(begin_drag(&mut state, &tuning, anchor() + Vec2::new(27.0, 0.0)));
    }

    #[test]
    fn test_begin_drag_too_far() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        assert!(!begin_drag(&mut state, &tuning, anchor() + Vec2::new(40.0, 0.0)));
        assert_eq!(state.mode, Mode::Idle);
        assert_eq!(state.hint, Hint::Ready);
    }

    #[test]
    fn test_begin_drag_ignored_while_flying() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        state.mode = Mode::Flying;
        let pos = state.bird.pos;
        assert!(!begin_drag(&mut state, &tuning, pos));
        assert_eq!(state.mode, Mode::Flying);
    }

    #[test]
    fn test_begin_drag_ignored_without_birds() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        state.birds_left = 0;
        let pos = state.bird.pos;
        assert!(!begin_drag(&mut state, &tuning, pos));
        assert_eq!(state.mode, Mode::Idle);
    }

    #[test]
    fn test_update_drag_requires_drag() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        update_drag(&mut state, &tuning, Vec2::new(10.0, 10.0));
        assert_eq!(state.bird.pos, anchor());
    }

    #[test]
    fn test_update_drag_clamps_length() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        begin_drag(&mut state, &tuning, anchor());
        update_drag(&mut state, &tuning, anchor() + Vec2::new(-300.0, 0.0));
        assert!((state.bird.pos.x - (SLING_ANCHOR_X - MAX_PULL)).abs() < 1e-3);
        assert!((state.bird.pos.y - SLING_ANCHOR_Y).abs() < 1e-3);
    }

    #[test]
    fn test_update_drag_short_pull_is_exact() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        begin_drag(&mut state, &tuning, anchor());
        let target = anchor() + Vec2::new(-30.0, 40.0);
        update_drag(&mut state, &tuning, target);
        assert!(state.bird.pos.distance(target) < 1e-3);
    }

    #[test]
    fn test_end_drag_launches() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        begin_drag(&mut state, &tuning, anchor());
        update_drag(&mut state, &tuning, anchor() + Vec2::new(-50.0, 20.0));
        end_drag(&mut state, &tuning);

        assert_eq!(state.mode, Mode::Flying);
        assert_eq!(state.birds_left, 2);
        assert_eq!(state.hint, Hint::Flying);
        assert!((state.bird.vel.x - 50.0 * LAUNCH_POWER).abs() < 1e-4);
        assert!((state.bird.vel.y + 20.0 * LAUNCH_POWER).abs() < 1e-4);
        assert_eq!(
            state.events,
            vec![GameEvent::Launched { birds_left: 2 }]
        );
    }

    #[test]
    fn test_end_drag_requires_drag() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        end_drag(&mut state, &tuning);
        assert_eq!(state.mode, Mode::Idle);
        assert_eq!(state.birds_left, 3);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_pointer_leave_releases() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        let a = anchor();
        apply_pointer(&mut state, &tuning, PointerEvent::Down { x: a.x, y: a.y });
        apply_pointer(
            &mut state,
            &tuning,
            PointerEvent::Move {
                x: a.x - 40.0,
                y: a.y,
            },
        );
        apply_pointer(&mut state, &tuning, PointerEvent::Leave);
        assert_eq!(state.mode, Mode::Flying);
        assert!(state.bird.vel.x > 0.0);

        // A stray up after launch does nothing
        apply_pointer(&mut state, &tuning, PointerEvent::Up);
        assert_eq!(state.birds_left, 2);
    }

    proptest! {
        #[test]
        fn prop_pull_never_exceeds_max(
            moves in prop::collection::vec((-2000.0f32..2000.0, -2000.0f32..2000.0), 1..20)
        ) {
            let mut state = GameState::new();
            let tuning = Tuning::default();
            prop_assert!(begin_drag(&mut state, &tuning, anchor()));
            for (x, y) in moves {
                update_drag(&mut state, &tuning, Vec2::new(x, y));
                prop_assert!(state.bird.pull().length() <= MAX_PULL + 1e-3);
            }
        }

        #[test]
        fn prop_launch_opposes_pull(dx in -500.0f32..500.0, dy in -500.0f32..500.0) {
            let mut state = GameState::new();
            let tuning = Tuning::default();
            begin_drag(&mut state, &tuning, anchor());
            update_drag(&mut state, &tuning, anchor() + Vec2::new(dx, dy));
            let pull = state.bird.pull();
            end_drag(&mut state, &tuning);

            prop_assert!(state.bird.vel.dot(pull) <= 1e-3);
            let expected = pull.length() * LAUNCH_POWER;
            prop_assert!((state.bird.vel.length() - expected).abs() < 1e-3);
        }
    }
}
