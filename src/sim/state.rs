//! Game state and core simulation types
//!
//! One explicit state struct owns everything a round needs. Subsystems take it
//! by `&mut` and mutate it synchronously within a tick or a pointer event.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{ground_line, sling_anchor};

/// What the bird is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Sitting on the sling (or resting after the last shot)
    #[default]
    Idle,
    /// Being pulled back by the pointer
    Dragging,
    /// Launched and under simulation
    Flying,
}

/// Status hint shown under the HUD counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hint {
    /// Fresh round, drag the bird to start
    #[default]
    Ready,
    /// Drag in progress, release to fire
    Aiming,
    /// Bird in the air
    Flying,
    /// A pig was just hit
    Hit,
    /// Previous bird stopped, drag the next one
    NextShot,
    /// Every pig is down
    Victory,
    /// Out of birds with pigs still standing
    Defeat,
}

/// Something that happened during a tick or input event
///
/// Drained by the frame loop; never read back by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bird left the sling
    Launched { birds_left: u8 },
    /// A block was smashed
    BlockHit { index: usize },
    /// A pig was hit
    PigHit { index: usize },
    /// The flying bird came to rest, with its velocity on that tick
    BirdAtRest { velocity: Vec2 },
    /// Round won
    Victory,
    /// Round lost
    Defeat,
}

/// The projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: sling_anchor(),
            vel: Vec2::ZERO,
            radius: BIRD_RADIUS,
        }
    }
}

impl Bird {
    /// Pull vector from the anchor to the bird
    pub fn pull(&self) -> Vec2 {
        self.pos - sling_anchor()
    }

    /// Lowest point of the bird
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A circular target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pig {
    pub pos: Vec2,
    pub radius: f32,
    pub hit: bool,
}

impl Pig {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
            hit: false,
        }
    }
}

/// A rectangular target, positioned by its top-left corner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub pos: Vec2,
    pub size: Vec2,
    pub hit: bool,
}

impl Block {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            hit: false,
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// The fixed pig layout
pub fn level_pigs() -> Vec<Pig> {
    vec![
        Pig::new(690.0, 310.0, 22.0),
        Pig::new(760.0, 280.0, 20.0),
        Pig::new(720.0, 250.0, 18.0),
    ]
}

/// The fixed block layout
pub fn level_blocks() -> Vec<Block> {
    vec![
        Block::new(670.0, 360.0, 40.0, 80.0),
        Block::new(720.0, 360.0, 40.0, 80.0),
        Block::new(750.0, 300.0, 100.0, 20.0),
    ]
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Play surface size (width, height)
    pub bounds: Vec2,
    pub bird: Bird,
    pub pigs: Vec<Pig>,
    pub blocks: Vec<Block>,
    /// Birds not yet launched this round
    pub birds_left: u8,
    pub mode: Mode,
    pub hint: Hint,
    /// Result already announced this round (`Victory` or `Defeat`)
    #[serde(default)]
    pub outcome: Option<Hint>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh round on the default play surface
    pub fn new() -> Self {
        Self::with_bounds(Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT))
    }

    /// Create a fresh round on a play surface of the given size
    pub fn with_bounds(bounds: Vec2) -> Self {
        let mut state = Self {
            bounds,
            bird: Bird::default(),
            pigs: Vec::new(),
            blocks: Vec::new(),
            birds_left: 0,
            mode: Mode::Idle,
            hint: Hint::Ready,
            outcome: None,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Start the round over: full bird count, fresh targets, bird on the sling
    pub fn reset(&mut self) {
        self.birds_left = BIRDS_PER_ROUND;
        self.pigs = level_pigs();
        self.blocks = level_blocks();
        self.reset_bird();
        self.mode = Mode::Idle;
        self.hint = Hint::Ready;
        self.outcome = None;
        self.time_ticks = 0;
        self.events.clear();
        log::info!("Round reset: {} birds, {} pigs", self.birds_left, self.pigs.len());
    }

    /// Put the bird back on the sling between shots (targets and counters kept)
    pub fn reset_bird(&mut self) {
        self.bird.pos = sling_anchor();
        self.bird.vel = Vec2::ZERO;
        self.bird.radius = BIRD_RADIUS;
        if self.mode == Mode::Flying {
            self.mode = Mode::Idle;
        }
    }

    /// Pigs still standing, always derived from the hit flags
    pub fn pigs_remaining(&self) -> usize {
        self.pigs.iter().filter(|p| !p.hit).count()
    }

    /// Blocks still standing
    pub fn blocks_remaining(&self) -> usize {
        self.blocks.iter().filter(|b| !b.hit).count()
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.mode == Mode::Flying
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.mode == Mode::Dragging
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        ground_line(self.bounds.y)
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
