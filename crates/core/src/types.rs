use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PickupKind {
    HealthPotion,
    Weapon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Attack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    Running,
    Lost,
    Won,
}

impl RunPhase {
    pub fn is_terminal(self) -> bool {
        self != RunPhase::Running
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockedReason {
    OutOfBounds,
    Occupied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Applied(Cell),
    Blocked(BlockedReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpawnRole {
    Weapon,
    Potion,
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementFailure {
    pub role: SpawnRole,
    pub unit: usize,
    pub attempts: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenError {
    InsufficientSpace { available: usize, required: usize },
    PlayerUnplaced { attempts: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    EntityMoved { id: EntityId, cell: Cell },
    EntityDamaged { id: EntityId, health: i32 },
    EntityRemoved { id: EntityId },
    PickupCollected { kind: PickupKind, cell: Cell },
    GameEnded { outcome: Outcome },
    GameReset { generation: u32 },
}
