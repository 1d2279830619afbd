//! Game session state and lifecycle
//!
//! Everything mutable about a session lives in [`GameState`]. Only the
//! thread driving [`super::tick`] should own it; input from elsewhere is
//! marshalled in as a [`super::TickInput`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::ObstacleField;
use super::geometry::Rect;
use super::player::Player;
use super::scoring::Scoring;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created but never started
    Idle,
    /// Ticking
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Discrete notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    Jumped,
    ScoreChanged { score: u64 },
    MilestoneReached { speed: f32, spacing: f32 },
    GameOver { final_score: u64 },
}

/// Receives [`GameEvent`]s (sounds, score label, end-of-game UI)
pub trait Presenter {
    fn on_game_started(&mut self) {}
    fn on_jump(&mut self) {}
    fn on_score_changed(&mut self, _score: u64) {}
    fn on_milestone(&mut self, _speed: f32, _spacing: f32) {}
    fn on_game_over(&mut self, _final_score: u64) {}
}

impl GameEvent {
    pub fn dispatch<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        match *self {
            GameEvent::GameStarted => presenter.on_game_started(),
            GameEvent::Jumped => presenter.on_jump(),
            GameEvent::ScoreChanged { score } => presenter.on_score_changed(score),
            GameEvent::MilestoneReached { speed, spacing } => presenter.on_milestone(speed, spacing),
            GameEvent::GameOver { final_score } => presenter.on_game_over(final_score),
        }
    }
}

/// Rects of one obstacle pair, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub top: Rect,
    pub bottom: Rect,
}

/// Read-only projection of a session for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub player: Rect,
    /// Cosmetic tilt in degrees
    pub rotation: f32,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub streak: u32,
    pub speed: f32,
    pub spacing: f32,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    settings: Settings,
    /// Seed used on every (re)start
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Ticks since the last (re)start
    pub time_ticks: u64,
    pub player: Player,
    pub field: ObstacleField,
    pub scoring: Scoring,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session, rejecting unusable settings
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Idle,
            time_ticks: 0,
            player: Player::new(&settings),
            field: ObstacleField::new(&settings),
            scoring: Scoring::new(&settings),
            events: Vec::new(),
            settings,
        })
    }

    /// Begin a run from any phase
    ///
    /// Resets score, streak, difficulty and the player, and seeds the field
    /// with one fresh obstacle. The RNG is reseeded, so every start from the
    /// same seed produces the same state.
    pub fn start(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.time_ticks = 0;
        self.player = Player::new(&self.settings);
        self.scoring = Scoring::new(&self.settings);
        self.field = ObstacleField::new(&self.settings);

        let id = self.field.spawn(&mut self.rng, self.settings.playfield_width);
        self.scoring.arm(id);

        self.phase = GamePhase::Running;
        self.events.push(GameEvent::GameStarted);
        log::info!("Run started (seed {})", self.seed);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap in new settings; they take effect on the next (re)start
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Same as [`start`](Self::start); the only way out of `GameOver`
    pub fn restart(&mut self) {
        self.start();
    }

    /// Start a run with a new layout sequence
    pub fn start_with_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.start();
    }

    /// Apply a jump; ignored unless running. Returns whether it took effect.
    pub fn jump(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.player.jump();
        self.events.push(GameEvent::Jumped);
        true
    }

    /// End the run (no-op if already over)
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.scoring.reset_streak();
        self.events.push(GameEvent::GameOver {
            final_score: self.scoring.score,
        });
        log::info!(
            "Game over at tick {} with score {}",
            self.time_ticks,
            self.scoring.score
        );
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Pending events since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver and clear pending events
    pub fn flush_events<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for event in self.drain_events() {
            event.dispatch(presenter);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            player: self.player.rect(),
            rotation: self.player.rotation,
            obstacles: self
                .field
                .iter()
                .map(|pair| ObstacleView {
                    id: pair.id,
                    top: pair.top_rect(),
                    bottom: pair.bottom_rect(),
                })
                .collect(),
            score: self.scoring.score,
            streak: self.scoring.streak,
            speed: self.scoring.speed,
            spacing: self.scoring.spacing,
        }
    }
}
