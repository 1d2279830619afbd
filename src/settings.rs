//! Session settings
//!
//! Every tunable of a session lives here. Defaults reproduce the shipped
//! game exactly; a JSON file can override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Start x as a fraction of playfield width
    pub player_start_x: f32,
    /// Start y as a fraction of playfield height
    pub player_start_y: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub min_gap_height: f32,
    pub min_obstacle_distance: f32,

    // === Difficulty ramp ===
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub initial_spacing: f32,
    pub spacing_shrink: f32,
    pub spacing_floor: f32,
    pub milestone_interval: u64,
    pub streak_interval: u32,
    pub streak_bonus: u64,

    // === Loop ===
    /// Tick period for the driver in milliseconds
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X_FRAC,
            player_start_y: PLAYER_START_Y_FRAC,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            obstacle_width: OBSTACLE_WIDTH,
            min_gap_height: MIN_GAP_HEIGHT,
            min_obstacle_distance: MIN_OBSTACLE_DISTANCE,

            initial_speed: OBSTACLE_SPEED_INITIAL,
            speed_increment: OBSTACLE_SPEED_INCREMENT,
            initial_spacing: SPACING_INITIAL,
            spacing_shrink: SPACING_SHRINK,
            spacing_floor: SPACING_FLOOR,
            milestone_interval: MILESTONE_INTERVAL,
            streak_interval: STREAK_INTERVAL,
            streak_bonus: STREAK_BONUS,

            tick_ms: TICK_MS,
        }
    }
}

impl Settings {
    /// Default settings on a custom playfield
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::default()
        }
    }

    /// Player spawn position (top-left corner)
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            self.playfield_width * self.player_start_x,
            self.playfield_height * self.player_start_y,
        )
    }

    /// Reject configurations that could produce negative-height obstacles
    /// or an unplayable session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.playfield_width, self.playfield_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidPlayfield { width: w, height: h });
        }

        positive("min_gap_height", self.min_gap_height)?;
        let min_height = self.min_gap_height + MIN_PLAYFIELD_MARGIN;
        if h < min_height {
            return Err(ConfigError::PlayfieldTooShort {
                height: h,
                min: min_height,
            });
        }

        let (pw, ph) = (self.player_width, self.player_height);
        if !(pw.is_finite() && ph.is_finite() && pw > 0.0 && ph > 0.0 && pw <= w && ph <= h) {
            return Err(ConfigError::InvalidPlayerSize {
                width: pw,
                height: ph,
            });
        }
        for frac in [self.player_start_x, self.player_start_y] {
            if !(0.0..=1.0).contains(&frac) {
                return Err(ConfigError::InvalidStartFraction(frac));
            }
        }
        let start = self.player_start();
        if start.x + pw > w || start.y + ph > h {
            return Err(ConfigError::StartOutOfBounds { x: start.x, y: start.y });
        }

        positive("gravity", self.gravity)?;
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(ConfigError::InvalidJumpImpulse(self.jump_impulse));
        }
        positive("obstacle_width", self.obstacle_width)?;
        positive("min_obstacle_distance", self.min_obstacle_distance)?;
        positive("initial_speed", self.initial_speed)?;
        if !(self.speed_increment.is_finite() && self.speed_increment >= 0.0) {
            return Err(ConfigError::Negative {
                name: "speed_increment",
                value: self.speed_increment,
            });
        }
        positive("initial_spacing", self.initial_spacing)?;
        positive("spacing_floor", self.spacing_floor)?;
        if !(self.spacing_shrink > 0.0 && self.spacing_shrink <= 1.0) {
            return Err(ConfigError::InvalidSpacingShrink(self.spacing_shrink));
        }

        if self.milestone_interval == 0 {
            return Err(ConfigError::ZeroInterval("milestone"));
        }
        if self.streak_interval == 0 {
            return Err(ConfigError::ZeroInterval("streak"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroInterval("tick"));
        }

        Ok(())
    }

    /// Parse settings from JSON (missing fields take defaults) and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
