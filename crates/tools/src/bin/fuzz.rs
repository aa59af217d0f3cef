use anyhow::Result;
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use warrens_core::{Game, GameConfig, GameEvent, InputCommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(args.seed, GameConfig::default())
        .map_err(|e| anyhow::anyhow!("World build failed: {:?}", e))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let commands = [
        InputCommand::MoveUp,
        InputCommand::MoveDown,
        InputCommand::MoveLeft,
        InputCommand::MoveRight,
        InputCommand::Attack,
    ];

    let mut endings = 0_u32;
    for _ in 0..args.ticks {
        game.handle_command(choose(&mut rng, &commands));
        game.advance(100 + rng.next_u64() % 1400);

        for event in game.take_events() {
            if let GameEvent::GameEnded { outcome } = event {
                endings += 1;
                println!("Run ended with {:?} at {} ms", outcome, game.clock_ms());
            }
        }

        // Assert invariants
        let state = game.state();
        for (_, actor) in state.actors.iter() {
            assert!(actor.hp <= actor.max_hp, "Invariant failed: HP > max HP");
            assert!(state.field.is_free(actor.pos), "Invariant failed: actor on a wall cell");
        }
        let player = &state.actors[state.player_id];
        assert!(player.hp >= 0, "Invariant failed: player HP below zero");
        assert_eq!(
            game.damage_pulse_active(),
            !game.aggroed_enemies().is_empty(),
            "Invariant failed: damage pulse out of sync with the aggro set"
        );
    }

    println!("Fuzzing completed successfully. {endings} run endings observed.");
    Ok(())
}
