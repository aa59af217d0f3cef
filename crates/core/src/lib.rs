pub mod config;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use game::Game;
pub use journal::{InputJournal, InputRecord};
pub use mapgen::{GeneratedLevel, LevelGenerator, PickupSpawn, generate_level};
pub use replay::{ReplayError, ReplayResult, replay_to_end};
pub use state::{Actor, Field, GameState, Item};
pub use types::*;
