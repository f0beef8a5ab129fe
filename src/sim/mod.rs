//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod sling;
pub mod state;
pub mod status;
pub mod tick;
pub mod trajectory;

pub use collision::{
    CollisionResult, check_collisions, circle_circle_collision, circle_rect_collision,
};
pub use sling::{PointerEvent, apply_pointer, begin_drag, end_drag, update_drag};
pub use state::{Bird, Block, GameEvent, GameState, Hint, Mode, Pig};
pub use status::{evaluate, update_status};
pub use tick::{FixedStep, integrate, tick};
pub use trajectory::{PREVIEW_STEPS, predict_trajectory};
