//! Gated obstacle pairs and their generator

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Vertical layout of a freshly generated obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub top_height: f32,
    pub gap_height: f32,
    pub bottom_height: f32,
}

/// A top/bottom segment pair forming one gate
///
/// Both segments share `x` and `width`; the top segment hangs from y = 0 and
/// the bottom segment rests on the playfield floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Left edge of both segments
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub gap_height: f32,
    pub bottom_height: f32,
}

impl ObstaclePair {
    pub fn new(id: u32, x: f32, width: f32, spec: ObstacleSpec) -> Self {
        Self {
            id,
            x,
            width,
            top_height: spec.top_height,
            gap_height: spec.gap_height,
            bottom_height: spec.bottom_height,
        }
    }

    /// Right edge of both segments
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Gap top (bottom of the top segment)
    pub fn gap_top(&self) -> f32 {
        self.top_height
    }

    /// Gap bottom (top of the bottom segment)
    pub fn gap_bottom(&self) -> f32 {
        self.top_height + self.gap_height
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_bottom(), self.width, self.bottom_height)
    }

    /// Check a box against both segments
    pub fn collides(&self, other: &Rect) -> bool {
        self.top_rect().intersects(other) || self.bottom_rect().intersects(other)
    }
}

/// Generate the vertical layout of a new obstacle pair
///
/// Heights are whole pixels drawn from half-open ranges:
/// - top: [100, max(200, H - min_gap - 100))
/// - gap: [min_gap, min_gap + 200)
///
/// If the draw would leave the bottom segment negative, the top segment is
/// shortened so the three heights always add up to the playfield height.
/// Requires `playfield_height >= min_gap_height + 300` (see `Settings::validate`).
pub fn generate<R: Rng>(
    rng: &mut R,
    playfield_height: f32,
    min_gap_height: f32,
) -> ObstacleSpec {
    debug_assert!(playfield_height >= min_gap_height + MIN_PLAYFIELD_MARGIN);

    let top_cap = ((playfield_height - min_gap_height - TOP_HEIGHT_MARGIN).floor() as u32)
        .max(TOP_HEIGHT_CAP_FLOOR);
    let top_height = rng.random_range(TOP_HEIGHT_MIN..top_cap) as f32;
    let gap_height = min_gap_height + rng.random_range(0..GAP_HEIGHT_RANGE) as f32;

    let top_height = top_height.min(playfield_height - gap_height).max(0.0);
    let bottom_height = playfield_height - top_height - gap_height;

    ObstacleSpec {
        top_height,
        gap_height,
        bottom_height,
    }
}
