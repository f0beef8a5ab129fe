//! Round status evaluation
//!
//! Win/lose is a pure function of the counters; everything else keeps the
//! contextual hint set by the last input or collision.

use super::state::{GameEvent, GameState, Hint};

/// Hint the round should show right now
pub fn evaluate(state: &GameState) -> Hint {
    if state.pigs_remaining() == 0 {
        Hint::Victory
    } else if state.birds_left == 0 && !state.is_flying() {
        Hint::Defeat
    } else {
        state.hint
    }
}

/// Store the evaluated hint, queueing the round result once per round
///
/// The announced result lives in `state.outcome`, not the hint, so a drag or
/// launch that overwrites the hint after a win does not announce it again.
pub fn update_status(state: &mut GameState) {
    let hint = evaluate(state);
    if matches!(hint, Hint::Victory | Hint::Defeat) && state.outcome != Some(hint) {
        if hint == Hint::Victory {
            state.events.push(GameEvent::Victory);
            log::info!("All pigs down with {} birds to spare", state.birds_left);
        } else {
            state.events.push(GameEvent::Defeat);
            log::info!("Out of birds, {} pigs left", state.pigs_remaining());
        }
        state.outcome = Some(hint);
    }
    state.hint = hint;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sling::{begin_drag, end_drag, update_drag};
    use crate::sim::state::Mode;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_victory_when_all_pigs_hit() {
        let mut state = GameState::new();
        for pig in &mut state.pigs {
            pig.hit = true;
        }
        update_status(&mut state);
        assert_eq!(state.hint, Hint::Victory);
        assert_eq!(state.pigs_remaining(), 0);
        assert_eq!(state.events, vec![GameEvent::Victory]);
    }

    #[test]
    fn test_defeat_when_out_of_birds() {
        let mut state = GameState::new();
        state.birds_left = 0;
        update_status(&mut state);
        assert_eq!(state.hint, Hint::Defeat);
        assert_eq!(state.events, vec![GameEvent::Defeat]);
    }

    #[test]
    fn test_last_bird_in_flight_is_not_defeat() {
        let mut state = GameState::new();
        state.birds_left = 0;
        state.mode = Mode::Flying;
        state.hint = Hint::Flying;
        assert_eq!(evaluate(&state), Hint::Flying);
    }

    #[test]
    fn test_victory_beats_defeat() {
        let mut state = GameState::new();
        state.birds_left = 0;
        for pig in &mut state.pigs {
            pig.hit = true;
        }
        assert_eq!(evaluate(&state), Hint::Victory);
    }

    #[test]
    fn test_contextual_hint_kept() {
        let mut state = GameState::new();
        for hint in [Hint::Ready, Hint::Aiming, Hint::Flying, Hint::Hit, Hint::NextShot] {
            state.hint = hint;
            assert_eq!(evaluate(&state), hint);
        }
    }

    #[test]
    fn test_result_event_queued_once() {
        let mut state = GameState::new();
        state.birds_left = 0;
        update_status(&mut state);
        update_status(&mut state);
        update_status(&mut state);
        assert_eq!(state.events, vec![GameEvent::Defeat]);
    }

    #[test]
    fn test_victory_not_requeued_after_later_shot() {
        let mut state = GameState::new();
        let tuning = Tuning::default();
        for pig in &mut state.pigs {
            pig.hit = true;
        }
        tick(&mut state, &tuning);
        assert_eq!(state.outcome, Some(Hint::Victory));

        // Birds are left, so the player can still drag and fire
        let pos = state.bird.pos;
        assert!(begin_drag(&mut state, &tuning, pos));
        tick(&mut state, &tuning);
        update_drag(&mut state, &tuning, pos + Vec2::new(-40.0, 10.0));
        end_drag(&mut state, &tuning);
        tick(&mut state, &tuning);
        tick(&mut state, &tuning);

        let victories = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::Victory)
            .count();
        assert_eq!(victories, 1);
        assert_eq!(state.hint, Hint::Victory);
    }

    #[test]
    fn test_reset_allows_a_new_result() {
        let mut state = GameState::new();
        for pig in &mut state.pigs {
            pig.hit = true;
        }
        update_status(&mut state);
        state.reset();
        for pig in &mut state.pigs {
            pig.hit = true;
        }
        update_status(&mut state);
        assert_eq!(state.events, vec![GameEvent::Victory]);
    }
}
