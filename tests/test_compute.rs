use scooter_hunter::compute::*;
use scooter_hunter::config::{ConfigError, GameConfig};
use scooter_hunter::entities::*;
use scooter_hunter::field::Field;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A running session with a hand-placed store and the player at the start.
fn make_session(targets: Vec<Target>, hazards: Vec<Hazard>) -> GameSession {
    let config = GameConfig {
        level: Level::Normal,
        num_targets: targets.len().max(1),
        num_hazards: hazards.len(),
    };
    let mut s = new_session(config, Field::default()).unwrap();
    s.store = EntityStore { hazards, targets };
    s.status = GameStatus::Running;
    s
}

fn far_target() -> Target {
    Target { x: 100, y: 100 }
}

/// Move then tick, `steps` times — the way a player holding a key plays.
fn walk(s: &mut GameSession, direction: Direction, steps: usize) {
    for _ in 0..steps {
        move_player(s, direction);
        tick(s);
    }
}

// ── new_session / init_state ─────────────────────────────────────────────────

#[test]
fn new_session_is_idle_and_empty() {
    let s = new_session(GameConfig::default(), Field::default()).unwrap();
    assert_eq!(s.status, GameStatus::Idle);
    assert!(s.store.targets.is_empty());
    assert!(s.store.hazards.is_empty());
    assert_eq!(s.score, 0);
}

#[test]
fn new_session_rejects_bad_config() {
    let config = GameConfig {
        num_targets: 0,
        ..GameConfig::default()
    };
    assert_eq!(
        new_session(config, Field::default()).unwrap_err(),
        ConfigError::NoTargets
    );
}

#[test]
fn new_session_rejects_gate_outside_field() {
    let mut field = Field::default();
    field.gate.y1 = 730;
    assert!(matches!(
        new_session(GameConfig::default(), field),
        Err(ConfigError::InvalidField(_))
    ));
}

#[test]
fn init_state_starts_running_with_configured_counts() {
    let s = init_state(GameConfig::default(), &mut seeded_rng()).unwrap();
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.store.targets.len(), 7);
    assert_eq!(s.store.hazards.len(), 14);
    assert_eq!(s.player, Player { x: 500, y: 670 });
    assert_eq!(s.score, 0);
    assert!(s.message.is_none());
}

// ── spawn_store ──────────────────────────────────────────────────────────────

#[test]
fn spawn_store_respects_inset_and_speed_range() {
    let field = Field::default();
    for (level, min, max) in [(Level::Easy, 1, 3), (Level::Normal, 2, 4), (Level::Hard, 3, 5)] {
        let config = GameConfig {
            level,
            num_targets: 50,
            num_hazards: 50,
        };
        let store = spawn_store(&config, &field, &mut seeded_rng());
        assert_eq!(store.targets.len(), 50);
        assert_eq!(store.hazards.len(), 50);
        for t in &store.targets {
            assert!((50..=950).contains(&t.x) && (50..=650).contains(&t.y));
        }
        for h in &store.hazards {
            assert!((50..=950).contains(&h.x) && (50..=650).contains(&h.y));
            assert!((min..=max).contains(&h.vx), "{level}: vx {}", h.vx);
            assert!((min..=max).contains(&h.vy), "{level}: vy {}", h.vy);
        }
    }
}

#[test]
fn spawn_store_is_deterministic_for_a_seed() {
    let config = GameConfig::default();
    let field = Field::default();
    let a = spawn_store(&config, &field, &mut seeded_rng());
    let b = spawn_store(&config, &field, &mut seeded_rng());
    assert_eq!(a, b);
}

// ── move_player ──────────────────────────────────────────────────────────────

#[test]
fn move_each_direction_by_one_step() {
    let mut s = make_session(vec![far_target()], vec![]);
    s.player = Player { x: 500, y: 300 };
    assert!(move_player(&mut s, Direction::Left));
    assert_eq!(s.player, Player { x: 470, y: 300 });
    assert!(move_player(&mut s, Direction::Right));
    assert!(move_player(&mut s, Direction::Up));
    assert_eq!(s.player, Player { x: 500, y: 270 });
    assert!(move_player(&mut s, Direction::Down));
    assert_eq!(s.player, Player { x: 500, y: 300 });
}

#[test]
fn move_rejected_at_margins() {
    let mut s = make_session(vec![far_target()], vec![]);

    s.player = Player { x: 30, y: 300 };
    assert!(!move_player(&mut s, Direction::Left));
    s.player = Player { x: 970, y: 300 };
    assert!(!move_player(&mut s, Direction::Right));
    s.player = Player { x: 500, y: 48 };
    assert!(!move_player(&mut s, Direction::Up));
    s.player = Player { x: 500, y: 650 };
    assert!(!move_player(&mut s, Direction::Down));
    assert_eq!(s.player, Player { x: 500, y: 650 });
}

#[test]
fn move_accepted_just_inside_margins() {
    let mut s = make_session(vec![far_target()], vec![]);

    s.player = Player { x: 31, y: 300 };
    assert!(move_player(&mut s, Direction::Left));
    assert_eq!(s.player.x, 1);

    s.player = Player { x: 969, y: 300 };
    assert!(move_player(&mut s, Direction::Right));
    assert_eq!(s.player.x, 999);

    s.player = Player { x: 500, y: 49 };
    assert!(move_player(&mut s, Direction::Up));
    assert_eq!(s.player.y, 19);

    s.player = Player { x: 500, y: 649 };
    assert!(move_player(&mut s, Direction::Down));
    assert_eq!(s.player.y, 679);
}

#[test]
fn start_position_cannot_move_down() {
    let mut s = make_session(vec![far_target()], vec![]);
    assert!(!move_player(&mut s, Direction::Down));
    assert_eq!(s.player, Player { x: 500, y: 670 });
}

#[test]
fn move_ignored_unless_running() {
    let mut s = new_session(GameConfig::default(), Field::default()).unwrap();
    assert!(!move_player(&mut s, Direction::Up));
    assert_eq!(s.player, Player { x: 500, y: 670 });

    let mut s = make_session(vec![far_target()], vec![]);
    s.status = GameStatus::Finished(Outcome::Lost);
    assert!(!move_player(&mut s, Direction::Up));
    assert_eq!(s.player, Player { x: 500, y: 670 });
}

// ── tick ─────────────────────────────────────────────────────────────────────

#[test]
fn tick_is_noop_unless_running() {
    let hazard = Hazard { x: 200, y: 200, vx: 2, vy: 2 };
    let mut s = make_session(vec![far_target()], vec![hazard]);
    s.status = GameStatus::Idle;
    tick(&mut s);
    assert_eq!(s.ticks, 0);
    assert_eq!(s.store.hazards[0], hazard);
}

#[test]
fn tick_moves_hazards() {
    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 200, y: 200, vx: 2, vy: -3 }],
    );
    tick(&mut s);
    assert_eq!(s.ticks, 1);
    assert_eq!(s.store.hazards[0], Hazard { x: 202, y: 197, vx: 2, vy: -3 });
    assert!(s.is_running());
}

#[test]
fn hazard_reflects_off_left_edge_in_session() {
    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 0, y: 300, vx: -2, vy: 1 }],
    );
    tick(&mut s);
    let h = s.store.hazards[0];
    assert!(h.vx > 0);
    assert_eq!((h.x, h.y), (2, 301));
}

#[test]
fn collecting_a_target_scores_once() {
    let mut s = make_session(
        vec![Target { x: 500, y: 650 }, far_target()],
        vec![],
    );
    tick(&mut s);
    assert_eq!(s.score, 1);
    assert_eq!(s.store.targets, vec![far_target()]);

    // Still standing on the same spot — nothing left to collect there
    tick(&mut s);
    assert_eq!(s.score, 1);
    assert!(s.is_running());
}

#[test]
fn several_targets_collected_in_one_tick() {
    let mut s = make_session(
        vec![
            Target { x: 470, y: 640 },
            Target { x: 530, y: 700 },
            Target { x: 500, y: 670 },
            far_target(),
        ],
        vec![],
    );
    tick(&mut s);
    assert_eq!(s.score, 3);
    assert_eq!(s.store.targets.len(), 1);
}

#[test]
fn target_reach_is_inclusive_at_thirty() {
    let mut s = make_session(
        vec![Target { x: 530, y: 640 }, Target { x: 531, y: 670 }],
        vec![],
    );
    tick(&mut s);
    assert_eq!(s.score, 1);
    assert_eq!(s.store.targets, vec![Target { x: 531, y: 670 }]);
}

#[test]
fn collecting_last_target_wins_and_halts() {
    let hazard = Hazard { x: 200, y: 200, vx: 2, vy: 2 };
    let mut s = make_session(vec![Target { x: 510, y: 660 }], vec![hazard]);
    tick(&mut s);
    assert_eq!(s.status, GameStatus::Finished(Outcome::Won));
    assert_eq!(s.score, 1);
    let message = s.message.clone().unwrap();
    assert!(message.starts_with("YOU WON!"));
    assert!(message.contains("YOUR SCORE: 1"));

    let frozen = s.store.hazards[0];
    tick(&mut s);
    assert_eq!(s.store.hazards[0], frozen);
    assert_eq!(s.ticks, 1);
}

#[test]
fn hazard_contact_loses_regardless_of_targets() {
    // Target also in reach: the loss wins and the target stays
    let mut s = make_session(
        vec![Target { x: 500, y: 670 }, far_target()],
        vec![Hazard { x: 100, y: 400, vx: 0, vy: 0 }, Hazard { x: 485, y: 640, vx: 0, vy: 0 }],
    );
    tick(&mut s);
    assert_eq!(s.status, GameStatus::Finished(Outcome::Lost));
    assert_eq!(s.score, 0);
    assert_eq!(s.store.targets.len(), 2);
    assert!(s.message.as_deref().unwrap().starts_with("GAME OVER!"));
}

#[test]
fn hazard_reach_is_narrow_on_x() {
    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 516, y: 670, vx: 0, vy: 0 }],
    );
    tick(&mut s);
    assert!(s.is_running());

    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 515, y: 700, vx: 0, vy: 0 }],
    );
    tick(&mut s);
    assert_eq!(s.outcome(), Some(Outcome::Lost));
}

#[test]
fn outcome_is_set_only_once() {
    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 500, y: 670, vx: 0, vy: 0 }],
    );
    tick(&mut s);
    let message = s.message.clone();
    s.store.targets.clear();
    tick(&mut s);
    assert_eq!(s.outcome(), Some(Outcome::Lost));
    assert_eq!(s.message, message);
}

// ── frame ────────────────────────────────────────────────────────────────────

#[test]
fn frame_reflects_session() {
    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 200, y: 200, vx: 1, vy: 1 }],
    );
    s.score = 4;
    let f = frame(&s);
    assert_eq!(f.player, s.player);
    assert_eq!(f.hazards.len(), 1);
    assert_eq!(f.targets, &[far_target()][..]);
    assert_eq!(f.score, 4);
    assert_eq!((f.width, f.height), (1000, 700));
    assert!(f.terminal.is_none());

    s.store.targets.clear();
    tick(&mut s);
    let f = frame(&s);
    let (outcome, message) = f.terminal.unwrap();
    assert_eq!(outcome, Outcome::Won);
    assert!(message.contains("YOUR SCORE: 4"));
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn walking_onto_both_targets_wins() {
    let mut s = make_session(
        vec![Target { x: 100, y: 100 }, Target { x: 900, y: 600 }],
        vec![],
    );

    walk(&mut s, Direction::Left, 13); // x = 110
    assert_eq!(s.score, 0);
    walk(&mut s, Direction::Up, 19); // y = 100
    assert_eq!(s.score, 1);
    assert!(s.is_running());
    assert_eq!(s.store.targets, vec![Target { x: 900, y: 600 }]);

    walk(&mut s, Direction::Right, 26); // x = 890
    walk(&mut s, Direction::Down, 17);
    assert_eq!(s.score, 2);
    assert_eq!(s.outcome(), Some(Outcome::Won));
    assert!(s.store.targets.is_empty());
}

#[test]
fn hazard_closing_in_on_start_position_loses() {
    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 508, y: 688, vx: 2, vy: 2 }],
    );
    s.score = 3;
    tick(&mut s);
    assert_eq!(s.store.hazards[0].x, 510);
    assert_eq!(s.store.hazards[0].y, 690);
    assert_eq!(s.outcome(), Some(Outcome::Lost));
    assert_eq!(s.score, 3);
}

#[test]
fn restart_mid_game_restores_counts() {
    let mut rng = seeded_rng();
    let mut s = init_state(GameConfig::default(), &mut rng).unwrap();
    s.score = 5;
    s.store.targets.truncate(1);
    s.player = Player { x: 200, y: 200 };
    let before = s.store.clone();

    restart(&mut s, &mut rng);
    assert_eq!(s.score, 0);
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.store.targets.len(), 7);
    assert_eq!(s.store.hazards.len(), 14);
    assert_ne!(s.store.hazards, before.hazards);
    assert_eq!(s.player, Player { x: 500, y: 670 });
    assert!(s.message.is_none());
}

#[test]
fn restart_after_loss_clears_message() {
    let mut s = make_session(
        vec![far_target()],
        vec![Hazard { x: 500, y: 670, vx: 0, vy: 0 }],
    );
    tick(&mut s);
    assert!(s.message.is_some());

    restart(&mut s, &mut seeded_rng());
    assert!(s.is_running());
    assert!(s.message.is_none());
    assert_eq!(s.ticks, 0);
}
