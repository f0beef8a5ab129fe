//! Sling Birds - A slingshot physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drag, flight, collisions, round state)
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Counter and hint text for the DOM overlay
//! - `tuning`: Physics constants with JSON overrides
//! - `settings`: Player preferences (language, aim preview)

pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use hud::HudView;
pub use settings::{Language, PreviewMode, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// Units are play-surface pixels and simulation ticks. The values are the
/// ones the game was tuned with; gameplay feel depends on them exactly.
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play surface dimensions
    pub const CANVAS_WIDTH: f32 = 960.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Ground line as a fraction of canvas height (top of the sand band)
    pub const GROUND_FRACTION: f32 = 0.72;
    /// Top of the grass band as a fraction of canvas height
    pub const GRASS_FRACTION: f32 = 0.62;

    /// Slingshot pivot
    pub const SLING_ANCHOR_X: f32 = 160.0;
    pub const SLING_ANCHOR_Y: f32 = 360.0;

    /// Birds per round
    pub const BIRDS_PER_ROUND: u8 = 3;
    pub const BIRD_RADIUS: f32 = 18.0;
    /// Extra reach around the bird that still starts a drag
    pub const GRAB_TOLERANCE: f32 = 10.0;
    /// Maximum distance the bird can be pulled from the anchor
    pub const MAX_PULL: f32 = 90.0;
    /// Launch velocity per unit of pull (per tick)
    pub const LAUNCH_POWER: f32 = 0.22;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.35;
    /// Vertical speed kept (and inverted) on a ground bounce
    pub const GROUND_RESTITUTION: f32 = 0.4;
    /// Horizontal speed kept on a ground bounce
    pub const GROUND_FRICTION: f32 = 0.85;
    /// Horizontal speed kept (and inverted) on a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.6;
    /// Horizontal speed kept when smashing a block
    pub const BLOCK_DAMPING_X: f32 = 0.7;
    /// Vertical speed kept (and inverted) when smashing a block
    pub const BLOCK_BOUNCE_Y: f32 = 0.6;
    /// Both velocity components below this and the bird counts as stopped
    pub const REST_EPSILON: f32 = 0.15;
}

/// The fixed slingshot anchor as a vector
#[inline]
pub fn sling_anchor() -> glam::Vec2 {
    glam::Vec2::new(consts::SLING_ANCHOR_X, consts::SLING_ANCHOR_Y)
}

/// Y coordinate of the ground line for a play surface of the given height
#[inline]
pub fn ground_line(canvas_height: f32) -> f32 {
    canvas_height * consts::GROUND_FRACTION
}
