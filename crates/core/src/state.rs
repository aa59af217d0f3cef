use std::collections::BTreeSet;

use slotmap::SlotMap;

use crate::types::*;

/// Fixed-size tile space plus the set of carved, walkable cells. Any cell
/// outside the set is a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub width: usize,
    pub height: usize,
    free: BTreeSet<Cell>,
}

impl Field {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, free: BTreeSet::new() }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Carving is idempotent and ignores out-of-bounds cells. Returns
    /// whether the cell was newly carved.
    pub fn carve(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        self.free.insert(cell)
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        self.free.contains(&cell)
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.free.iter().copied()
    }

    pub fn free_cell_count(&self) -> usize {
        self.free.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub pos: Cell,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub facing: Facing,
    pub aggroed: bool,
    pub halted: bool,
    pub next_move_due_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub kind: PickupKind,
    pub pos: Cell,
}

pub struct GameState {
    pub field: Field,
    pub actors: SlotMap<EntityId, Actor>,
    pub items: SlotMap<ItemId, Item>,
    pub player_id: EntityId,
}
