//! Live obstacle sequence: movement, recycling and distance-based spawning

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::{ObstaclePair, generate};
use crate::settings::Settings;

/// Ordered obstacle pairs, oldest (leftmost) first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<ObstaclePair>,
    /// Gap kept between the right edge of the newest pair and
    /// `playfield_width - min_distance` before another spawn
    pub min_distance: f32,
    pub obstacle_width: f32,
    pub playfield_height: f32,
    pub min_gap_height: f32,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(settings: &Settings) -> Self {
        Self {
            obstacles: Vec::new(),
            min_distance: settings.min_obstacle_distance,
            obstacle_width: settings.obstacle_width,
            playfield_height: settings.playfield_height,
            min_gap_height: settings.min_gap_height,
            next_id: 1,
        }
    }

    /// Move every pair left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for pair in &mut self.obstacles {
            pair.x -= speed;
        }
    }

    /// Drop pairs whose right edge has left the playfield; returns how many
    pub fn recycle(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|pair| pair.right() >= 0.0);
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::trace!("Recycled {} obstacle(s), {} live", removed, self.obstacles.len());
        }
        removed
    }

    /// Whether the spacing policy wants a new pair
    pub fn needs_spawn(&self, playfield_width: f32) -> bool {
        match self.obstacles.last() {
            None => true,
            Some(last) => last.right() < playfield_width - self.min_distance,
        }
    }

    /// Spawn a new pair at the right edge if the spacing policy allows it.
    /// Returns the new pair's id.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R, playfield_width: f32) -> Option<u32> {
        if self.needs_spawn(playfield_width) {
            Some(self.spawn(rng, playfield_width))
        } else {
            None
        }
    }

    /// Unconditionally append a freshly generated pair at the right edge
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, playfield_width: f32) -> u32 {
        let spec = generate(rng, self.playfield_height, self.min_gap_height);
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles
            .push(ObstaclePair::new(id, playfield_width, self.obstacle_width, spec));
        log::debug!(
            "Spawned obstacle {}: top={} gap={} bottom={}",
            id,
            spec.top_height,
            spec.gap_height,
            spec.bottom_height
        );
        id
    }

    /// Remove every pair and restart id allocation
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.next_id = 1;
    }

    pub fn get(&self, id: u32) -> Option<&ObstaclePair> {
        self.obstacles.iter().find(|pair| pair.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.obstacles.iter()
    }

    pub fn last(&self) -> Option<&ObstaclePair> {
        self.obstacles.last()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
