//! Cheetah Jump - a one-button gate-dodging reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, game state)
//! - `settings`: Session configuration and validation
//! - `error`: Configuration errors
//!
//! Rendering, audio and UI are left to the caller: the simulation hands out
//! a [`sim::Snapshot`] every tick and a queue of [`sim::GameEvent`]s.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
///
/// Units are playfield pixels and ticks. Velocities are per tick,
/// accelerations per tick².
pub mod consts {
    /// Nominal tick period in milliseconds (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Playfield defaults (portrait phone screen)
    pub const PLAYFIELD_WIDTH: f32 = 1080.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1920.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 150.0;
    pub const PLAYER_HEIGHT: f32 = 150.0;
    /// Player start position as a fraction of the playfield
    pub const PLAYER_START_X_FRAC: f32 = 0.2;
    pub const PLAYER_START_Y_FRAC: f32 = 0.5;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = 1.2;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -25.0;
    /// Cosmetic rotation: degrees per unit of vertical velocity
    pub const ROTATION_PER_VELOCITY: f32 = 2.0;
    /// Cosmetic rotation snapped to on jump
    pub const JUMP_ROTATION: f32 = -30.0;

    /// Obstacle horizontal speed at session start
    pub const OBSTACLE_SPEED_INITIAL: f32 = 10.0;
    /// Speed added at every score milestone
    pub const OBSTACLE_SPEED_INCREMENT: f32 = 0.5;

    /// Spacing target at session start
    pub const SPACING_INITIAL: f32 = 2000.0;
    /// Spacing multiplier at every score milestone
    pub const SPACING_SHRINK: f32 = 0.95;
    /// Spacing never shrinks below this
    pub const SPACING_FLOOR: f32 = 1000.0;

    /// Minimum distance from the right edge before the next spawn
    pub const MIN_OBSTACLE_DISTANCE: f32 = 6000.0;
    pub const OBSTACLE_WIDTH: f32 = 150.0;

    /// Gap between top and bottom segments
    pub const MIN_GAP_HEIGHT: f32 = 600.0;
    /// Random extra gap height, drawn from [0, GAP_HEIGHT_RANGE)
    pub const GAP_HEIGHT_RANGE: u32 = 200;

    /// Top segment height is drawn from [TOP_HEIGHT_MIN, max(TOP_HEIGHT_CAP_FLOOR, H - gap - TOP_HEIGHT_MARGIN))
    pub const TOP_HEIGHT_MIN: u32 = 100;
    pub const TOP_HEIGHT_MARGIN: f32 = 100.0;
    pub const TOP_HEIGHT_CAP_FLOOR: u32 = 200;
    /// Playfield must be at least min gap + this tall
    pub const MIN_PLAYFIELD_MARGIN: f32 = 300.0;

    /// Passes between streak bonuses
    pub const STREAK_INTERVAL: u32 = 5;
    /// Score awarded on each streak bonus
    pub const STREAK_BONUS: u64 = 5;
    /// Score interval between difficulty milestones
    pub const MILESTONE_INTERVAL: u64 = 5;
}
