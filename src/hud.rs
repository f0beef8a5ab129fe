//! HUD text
//!
//! Everything the DOM overlay shows, computed from the game state. The wasm
//! entry point writes these strings into `#birds-left`, `#pigs-left` and
//! `#hint`.

use crate::settings::Language;
use crate::sim::{GameState, Hint};

/// Text for the HUD elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub birds: String,
    pub pigs: String,
    pub hint: &'static str,
}

impl HudView {
    pub fn from_state(state: &GameState, language: Language) -> Self {
        Self {
            birds: state.birds_left.to_string(),
            pigs: state.pigs_remaining().to_string(),
            hint: hint_text(state.hint, language),
        }
    }
}

/// Status line for a hint
pub fn hint_text(hint: Hint, language: Language) -> &'static str {
    match language {
        Language::Chinese => match hint {
            Hint::Ready => "拖拽小鸟开始",
            Hint::Aiming => "松手发射",
            Hint::Flying => "飞行中...",
            Hint::Hit => "命中！",
            Hint::NextShot => "继续拖拽下一只小鸟",
            Hint::Victory => "全部命中！你赢了！",
            Hint::Defeat => "小鸟用完了，点击重置再试",
        },
        Language::English => match hint {
            Hint::Ready => "Drag the bird to start",
            Hint::Aiming => "Release to launch",
            Hint::Flying => "Flying...",
            Hint::Hit => "Hit!",
            Hint::NextShot => "Drag the next bird",
            Hint::Victory => "All pigs down! You win!",
            Hint::Defeat => "Out of birds, press reset to try again",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_round() {
        let state = GameState::new();
        let hud = HudView::from_state(&state, Language::Chinese);
        assert_eq!(hud.birds, "3");
        assert_eq!(hud.pigs, "3");
        assert_eq!(hud.hint, "拖拽小鸟开始");
    }

    #[test]
    fn test_counts_follow_hits() {
        let mut state = GameState::new();
        state.pigs[0].hit = true;
        state.birds_left = 1;
        let hud = HudView::from_state(&state, Language::English);
        assert_eq!(hud.birds, "1");
        assert_eq!(hud.pigs, "2");
    }

    #[test]
    fn test_every_hint_has_text() {
        let hints = [
            Hint::Ready,
            Hint::Aiming,
            Hint::Flying,
            Hint::Hit,
            Hint::NextShot,
            Hint::Victory,
            Hint::Defeat,
        ];
        for language in [Language::Chinese, Language::English] {
            for hint in hints {
                assert!(!hint_text(hint, language).is_empty());
            }
        }
        assert_eq!(hint_text(Hint::Victory, Language::English), "All pigs down! You win!");
    }
}
