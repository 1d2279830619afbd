//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (one call to `tick` = one tick)
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering, audio or platform dependencies

pub mod field;
pub mod geometry;
pub mod obstacle;
pub mod player;
pub mod scoring;
pub mod state;
pub mod tick;

pub use field::ObstacleField;
pub use geometry::{Rect, intersects};
pub use obstacle::{ObstaclePair, ObstacleSpec, generate};
pub use player::{Bounds, Player};
pub use scoring::{PassOutcome, Scoring};
pub use state::{GameEvent, GamePhase, GameState, ObstacleView, Presenter, Snapshot};
pub use tick::{TickInput, tick};
