//! Fixed-step simulation tick
//!
//! One call = one tick. There is no delta time: gravity and obstacle speed
//! are per tick, so the driver is responsible for a steady cadence.

use super::player::Bounds;
use super::state::{GameEvent, GamePhase, GameState};

/// Input gathered between two ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump was pressed since the last tick
    pub jump: bool,
    /// Idle/demo mode - the autopilot decides when to jump
    pub autopilot: bool,
}

/// Autopilot: aim for the line this far above the gap bottom
const AUTOPILOT_MARGIN: f32 = 40.0;

/// Advance the game state by one tick
///
/// Order: jump → player physics → obstacle advance/recycle/spawn → pass
/// detection → collision scan. Any fatal condition ends the run once the
/// whole sequence has been applied.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    let jump = if input.autopilot {
        autopilot_wants_jump(state)
    } else {
        input.jump
    };
    if jump {
        state.jump();
    }

    state.time_ticks += 1;
    let width = state.settings().playfield_width;
    let height = state.settings().playfield_height;

    // Player
    let mut fatal = state.player.integrate(height) == Bounds::Floor;

    // Obstacles
    state.field.advance(state.scoring.speed);
    state.field.recycle();
    if let Some(id) = state.field.maybe_spawn(&mut state.rng, width) {
        state.scoring.arm(id);
    }

    // Scoring
    let current = state.scoring.current.and_then(|id| state.field.get(id));
    if let Some(outcome) = state.scoring.check_pass(state.player.pos.x, current) {
        state.push_event(GameEvent::ScoreChanged {
            score: outcome.score,
        });
        if outcome.milestone {
            state.push_event(GameEvent::MilestoneReached {
                speed: state.scoring.speed,
                spacing: state.scoring.spacing,
            });
        }
    }

    // Collisions
    let player = state.player.rect();
    fatal |= !state.player.in_bounds(height);
    fatal |= state.field.iter().any(|pair| pair.collides(&player));

    if fatal {
        state.game_over();
    }
}

/// Jump whenever the player's bottom edge would drop below the target line
///
/// The target is the gap of the nearest obstacle the player hasn't cleared
/// yet, or the middle of the playfield when there is none. Below the line
/// this re-jumps every tick, which climbs at full impulse speed.
fn autopilot_wants_jump(state: &GameState) -> bool {
    let player = &state.player;
    let target = state
        .field
        .iter()
        .find(|pair| pair.right() >= player.pos.x)
        .map(|pair| pair.gap_bottom() - AUTOPILOT_MARGIN)
        .unwrap_or(state.settings().playfield_height / 2.0 + player.size.y);

    let next_bottom = player.pos.y + player.size.y + player.vel_y + player.gravity;
    next_bottom > target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use proptest::prelude::*;

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new(Settings::default(), seed).unwrap();
        state.start();
        state.drain_events();
        state
    }

    /// Move the current obstacle out of the way so physics can be tested alone
    fn clear_obstacles(state: &mut GameState) {
        state.field.advance(100_000.0);
        state.field.recycle();
    }

    #[test]
    fn test_idle_does_not_tick() {
        let mut state = GameState::new(Settings::default(), 1).unwrap();
        let before = state.clone();
        tick(&mut state, &TickInput { jump: true, ..Default::default() });
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_response() {
        let mut state = running(1);
        assert_eq!(state.player.vel_y, 0.0);

        assert!(state.jump());
        assert_eq!(state.player.vel_y, -25.0);

        tick(&mut state, &TickInput::default());
        assert!((state.player.vel_y - (-23.8)).abs() < 1e-5);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_tick_input_jump() {
        let mut state = running(1);
        tick(&mut state, &TickInput { jump: true, ..Default::default() });
        assert!((state.player.vel_y - (-23.8)).abs() < 1e-5);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_obstacles_move_at_speed() {
        let mut state = running(1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.field.last().unwrap().x, 1070.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_fatal_bottom() {
        let mut state = running(1);
        state.player.pos.y = state.settings().playfield_height;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        // Further ticks are inert
        let over = state.clone();
        tick(&mut state, &TickInput::default());
        assert_eq!(state, over);

        let game_overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_ceiling_is_not_fatal() {
        let mut state = running(1);
        clear_obstacles(&mut state);
        state.player.pos.y = 5.0;
        tick(&mut state, &TickInput { jump: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.pos.y, 0.0);
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn test_collision_with_obstacle() {
        let mut state = running(1);
        // Park the obstacle on the player's column with the player inside the top segment
        let top_height = state.field.last().unwrap().top_height;
        state.field.advance(1080.0 - 216.0);
        state.player.pos.y = top_height - 100.0;
        state.player.vel_y = -state.player.gravity;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_pass_scores_and_recycle_spawns() {
        let mut state = running(3);
        let first = state.field.last().unwrap().id;

        // Hold the player in the gap by teleporting each tick
        let mut scored = false;
        for _ in 0..400 {
            let gap_mid = state
                .field
                .last()
                .map(|p| p.gap_top() + p.gap_height / 2.0 - 75.0)
                .unwrap_or(900.0);
            state.player.pos.y = gap_mid;
            state.player.vel_y = -state.player.gravity;
            tick(&mut state, &TickInput::default());
            assert_eq!(state.phase, GamePhase::Running);
            if state.scoring.score == 1 {
                scored = true;
            }
            if state.field.last().unwrap().id != first {
                break;
            }
        }

        assert!(scored);
        assert_eq!(state.scoring.score, 1);
        assert_eq!(state.scoring.streak, 1);
        // Replacement obstacle re-arms pass detection
        assert_eq!(state.field.len(), 1);
        assert_ne!(state.scoring.current, Some(first));
        assert!(!state.scoring.passed);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::ScoreChanged { score: 1 }));
    }

    #[test]
    fn test_restart_after_game_over_matches_fresh_start() {
        let fresh = running(11);

        let mut state = running(11);
        for _ in 0..50 {
            tick(&mut state, &TickInput::default());
        }
        state.scoring.score = 12;
        state.player.pos.y = 10_000.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        state.restart();
        state.drain_events();
        assert_eq!(state, fresh);
    }

    #[test]
    fn test_determinism() {
        let mut a = running(99999);
        let mut b = running(99999);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_autopilot_survives_first_obstacle() {
        let mut state = running(2024);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..300 {
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.scoring.score >= 1);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            seed in any::<u64>(),
            jumps in prop::collection::vec(any::<bool>(), 1..600),
        ) {
            let mut state = running(seed);
            let height = state.settings().playfield_height;
            for jump in jumps {
                tick(&mut state, &TickInput { jump, ..Default::default() });
                if state.phase != GamePhase::Running {
                    break;
                }
                prop_assert!(state.player.pos.y >= 0.0);
                prop_assert!(state.player.pos.y <= height - state.player.size.y);
            }
        }
    }
}
