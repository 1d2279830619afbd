//! Player physics: gravity, jump impulse, vertical bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{JUMP_ROTATION, ROTATION_PER_VELOCITY};
use crate::settings::Settings;

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Inside the playfield
    Inside,
    /// Hit the ceiling and was clamped (not fatal)
    Ceiling,
    /// Fell through the floor (fatal)
    Floor,
}

/// The player sprite
///
/// `x` never changes during a session; only `pos.y` and `vel_y` evolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units/tick, positive = down)
    pub vel_y: f32,
    /// Cosmetic tilt in degrees, derived from velocity
    pub rotation: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: settings.player_start(),
            size: Vec2::new(settings.player_width, settings.player_height),
            vel_y: 0.0,
            rotation: 0.0,
            gravity: settings.gravity,
            jump_impulse: settings.jump_impulse,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Apply one tick of gravity and move
    ///
    /// The ceiling is soft: y is clamped to 0 and velocity zeroed. Falling
    /// below `playfield_height - height` is reported as [`Bounds::Floor`]
    /// and left unclamped.
    pub fn integrate(&mut self, playfield_height: f32) -> Bounds {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;
        self.rotation = self.vel_y * ROTATION_PER_VELOCITY;

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = 0.0;
            Bounds::Ceiling
        } else if self.pos.y > self.max_y(playfield_height) {
            Bounds::Floor
        } else {
            Bounds::Inside
        }
    }

    /// Replace vertical velocity with the jump impulse
    pub fn jump(&mut self) {
        self.vel_y = self.jump_impulse;
        self.rotation = JUMP_ROTATION;
    }

    /// Lowest legal y for the top edge
    #[inline]
    pub fn max_y(&self, playfield_height: f32) -> f32 {
        playfield_height - self.size.y
    }

    pub fn in_bounds(&self, playfield_height: f32) -> bool {
        self.pos.y >= 0.0 && self.pos.y <= self.max_y(playfield_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&Settings::default())
    }

    #[test]
    fn test_jump_then_integrate() {
        let mut p = player();
        assert_eq!(p.vel_y, 0.0);
        p.jump();
        assert_eq!(p.vel_y, -25.0);
        assert_eq!(p.rotation, -30.0);

        let y = p.pos.y;
        assert_eq!(p.integrate(1920.0), Bounds::Inside);
        assert!((p.vel_y - (-23.8)).abs() < 1e-5);
        assert!((p.pos.y - (y - 23.8)).abs() < 1e-3);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut p = player();
        p.vel_y = 40.0;
        p.jump();
        assert_eq!(p.vel_y, -25.0);
        p.vel_y = -80.0;
        p.jump();
        assert_eq!(p.vel_y, -25.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut p = player();
        p.integrate(1920.0);
        p.integrate(1920.0);
        assert!((p.vel_y - 2.4).abs() < 1e-5);
        assert!((p.rotation - 4.8).abs() < 1e-4);
    }

    #[test]
    fn test_ceiling_clamps() {
        let mut p = player();
        p.pos.y = 10.0;
        p.jump();
        assert_eq!(p.integrate(1920.0), Bounds::Ceiling);
        assert_eq!(p.pos.y, 0.0);
        assert_eq!(p.vel_y, 0.0);
        assert!(p.in_bounds(1920.0));
    }

    #[test]
    fn test_floor_is_reported_unclamped() {
        let mut p = player();
        p.pos.y = 1920.0 - 150.0;
        p.vel_y = 5.0;
        assert_eq!(p.integrate(1920.0), Bounds::Floor);
        assert!(p.pos.y > 1770.0);
        assert!(!p.in_bounds(1920.0));
    }

    #[test]
    fn test_resting_on_floor_is_inside() {
        let mut p = player();
        p.pos.y = 1768.0;
        p.vel_y = 0.8;
        // 0.8 + 1.2 = 2.0 lands exactly on the floor line
        assert_eq!(p.integrate(1920.0), Bounds::Inside);
        assert_eq!(p.pos.y, 1770.0);
        assert!(p.in_bounds(1920.0));
    }
}
