//! Configuration errors
//!
//! The simulation itself never fails once a session exists; everything that
//! can go wrong is caught when settings are loaded or a session is created.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("playfield must be finite and positive, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    #[error("playfield height {height} is below the minimum of {min} (min gap height + 300)")]
    PlayfieldTooShort { height: f32, min: f32 },
    #[error("player size {width}x{height} does not fit the playfield")]
    InvalidPlayerSize { width: f32, height: f32 },
    #[error("player start fraction {0} is outside [0, 1]")]
    InvalidStartFraction(f32),
    #[error("player start ({x}, {y}) leaves the sprite outside the playfield")]
    StartOutOfBounds { x: f32, y: f32 },
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("jump impulse must point upward (negative), got {0}")]
    InvalidJumpImpulse(f32),
    #[error("spacing shrink factor must be in (0, 1], got {0}")]
    InvalidSpacingShrink(f32),
    #[error("{0} interval must be non-zero")]
    ZeroInterval(&'static str),
    #[error("could not parse settings")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
