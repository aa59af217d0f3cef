//! Public data model for a generated level.

use crate::state::Field;
use crate::types::{Cell, PickupKind, PlacementFailure};

use super::spawns::PickupSpawn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub field: Field,
    pub player_start: Cell,
    pub pickup_spawns: Vec<PickupSpawn>,
    pub enemy_spawns: Vec<Cell>,
    pub placement_failures: Vec<PlacementFailure>,
}

impl GeneratedLevel {
    /// Stable byte encoding used for fingerprinting levels in tests and
    /// determinism checks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.field.width as u32).to_le_bytes());
        bytes.extend((self.field.height as u32).to_le_bytes());
        bytes.extend((self.field.free_cell_count() as u32).to_le_bytes());
        for cell in self.field.free_cells() {
            bytes.extend(cell.x.to_le_bytes());
            bytes.extend(cell.y.to_le_bytes());
        }

        bytes.extend(self.player_start.x.to_le_bytes());
        bytes.extend(self.player_start.y.to_le_bytes());

        bytes.extend((self.pickup_spawns.len() as u32).to_le_bytes());
        for spawn in &self.pickup_spawns {
            bytes.push(match spawn.kind {
                PickupKind::HealthPotion => 0,
                PickupKind::Weapon => 1,
            });
            bytes.extend(spawn.cell.x.to_le_bytes());
            bytes.extend(spawn.cell.y.to_le_bytes());
        }

        bytes.extend((self.enemy_spawns.len() as u32).to_le_bytes());
        for cell in &self.enemy_spawns {
            bytes.extend(cell.x.to_le_bytes());
            bytes.extend(cell.y.to_le_bytes());
        }

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_bytes_track_level_content() {
        let mut field = Field::new(3, 3);
        field.carve(Cell { x: 0, y: 0 });
        field.carve(Cell { x: 1, y: 0 });

        let level = GeneratedLevel {
            field,
            player_start: Cell { x: 0, y: 0 },
            pickup_spawns: vec![PickupSpawn { kind: PickupKind::Weapon, cell: Cell { x: 1, y: 0 } }],
            enemy_spawns: vec![Cell { x: 1, y: 0 }],
            placement_failures: Vec::new(),
        };

        let mut moved = level.clone();
        moved.player_start = Cell { x: 1, y: 0 };

        assert_eq!(level.canonical_bytes(), level.clone().canonical_bytes());
        assert_ne!(level.canonical_bytes(), moved.canonical_bytes());
    }
}
