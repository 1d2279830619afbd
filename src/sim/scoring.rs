//! Pass detection, score/streak bookkeeping and the difficulty staircase

use serde::{Deserialize, Serialize};

use super::obstacle::ObstaclePair;
use crate::settings::Settings;

/// What a counted pass changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassOutcome {
    pub score: u64,
    pub streak: u32,
    /// Streak bonus was awarded on this pass
    pub bonus: bool,
    /// Score landed on a milestone and difficulty went up
    pub milestone: bool,
}

/// Score, streak and the current difficulty level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoring {
    pub score: u64,
    /// Consecutive passes since the last game over
    pub streak: u32,
    /// Obstacle speed (units/tick), only ever grows
    pub speed: f32,
    /// Spacing target, only ever shrinks, floored
    pub spacing: f32,
    /// Obstacle tracked for pass detection (newest spawned)
    pub current: Option<u32>,
    /// `current` has already been counted
    pub passed: bool,

    speed_increment: f32,
    spacing_shrink: f32,
    spacing_floor: f32,
    milestone_interval: u64,
    streak_interval: u32,
    streak_bonus: u64,
}

impl Scoring {
    pub fn new(settings: &Settings) -> Self {
        Self {
            score: 0,
            streak: 0,
            speed: settings.initial_speed,
            spacing: settings.initial_spacing,
            current: None,
            passed: false,
            speed_increment: settings.speed_increment,
            spacing_shrink: settings.spacing_shrink,
            spacing_floor: settings.spacing_floor,
            milestone_interval: settings.milestone_interval,
            streak_interval: settings.streak_interval,
            streak_bonus: settings.streak_bonus,
        }
    }

    /// Track a newly spawned obstacle and re-arm pass detection
    pub fn arm(&mut self, obstacle_id: u32) {
        self.current = Some(obstacle_id);
        self.passed = false;
    }

    /// Count the current obstacle once the player is past its right edge
    ///
    /// Only the newest obstacle is ever checked; `current` is `None` when
    /// that obstacle has already been recycled.
    pub fn check_pass(&mut self, player_x: f32, current: Option<&ObstaclePair>) -> Option<PassOutcome> {
        let pair = current?;
        if self.passed || player_x <= pair.right() {
            return None;
        }

        self.passed = true;
        self.streak += 1;
        self.score += 1;

        let bonus = self.streak % self.streak_interval == 0;
        if bonus {
            self.score += self.streak_bonus;
        }

        let milestone = self.score % self.milestone_interval == 0;
        if milestone {
            self.speed += self.speed_increment;
            self.spacing = (self.spacing * self.spacing_shrink).max(self.spacing_floor);
            log::debug!(
                "Milestone at score {}: speed={} spacing={}",
                self.score,
                self.speed,
                self.spacing
            );
        }

        Some(PassOutcome {
            score: self.score,
            streak: self.streak,
            bonus,
            milestone,
        })
    }

    /// Streak only survives until the session ends
    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }
}
