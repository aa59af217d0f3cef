use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use warrens_core::{Game, GameConfig, GameEvent, InputCommand};

const COMMANDS: [InputCommand; 5] = [
    InputCommand::MoveUp,
    InputCommand::MoveDown,
    InputCommand::MoveLeft,
    InputCommand::MoveRight,
    InputCommand::Attack,
];

#[test]
fn long_random_sessions_hold_the_core_invariants() {
    for seed in [7_u64, 99, 12_345] {
        let mut game = Game::new(seed, GameConfig::default()).expect("world should build");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut endings = 0_u32;
        let mut resets = 0_u32;

        for _ in 0..600 {
            let command = COMMANDS[rng.next_u64() as usize % COMMANDS.len()];
            game.handle_command(command);
            game.advance(100 + rng.next_u64() % 1400);

            for event in game.take_events() {
                match event {
                    GameEvent::GameEnded { .. } => endings += 1,
                    GameEvent::GameReset { .. } => resets += 1,
                    _ => {}
                }
            }
            // Every ending is followed by exactly one reset before the next.
            assert!(endings == resets || endings == resets + 1);

            let state = game.state();
            for actor in state.actors.values() {
                assert!(state.field.is_free(actor.pos), "actor must stay on carved cells");
                assert!(actor.hp <= actor.max_hp);
            }
            let player = &state.actors[state.player_id];
            assert!((0..=100).contains(&player.hp), "player health must stay clamped");
            assert_eq!(
                game.damage_pulse_active(),
                !game.aggroed_enemies().is_empty(),
                "damage pulse must run exactly while the aggro set is non-empty"
            );
        }
    }
}

#[test]
fn fresh_runs_start_quiescent() {
    let game = Game::new(31, GameConfig::default()).expect("world should build");
    assert!(game.aggroed_enemies().is_empty());
    assert!(game.nearby_enemies().is_empty());
    assert!(!game.damage_pulse_active());
    assert_eq!(game.clock_ms(), 0);
    assert!(game.events().is_empty());
}

#[test]
fn a_session_survives_many_reset_cycles() {
    // Parking the player and fast-forwarding guarantees losses: roaming
    // enemies eventually aggro and drain an idle player.
    let mut game = Game::new(5, GameConfig::default()).expect("world should build");
    let mut resets = 0_u32;

    for _ in 0..400 {
        game.advance(1000);
        for event in game.take_events() {
            if let GameEvent::GameReset { generation } = event {
                resets += 1;
                assert_eq!(generation, game.generation());
            }
        }
        if resets >= 2 {
            break;
        }
    }

    // Whether or not a loss happened within the budget, the run must be in
    // a coherent phase with a consistent schedule.
    assert_eq!(game.damage_pulse_active(), !game.aggroed_enemies().is_empty());
}
