//! Room placement and full-span passage carving for the field topology.

use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::state::Field;
use crate::types::Cell;

use super::seed::rand_in_range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RoomRect {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl RoomRect {
    pub(crate) fn right(self) -> usize {
        self.x + self.width - 1
    }

    pub(crate) fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub(crate) fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (self.y..=self.bottom()).flat_map(move |y| {
            (self.x..=self.right()).map(move |x| Cell { x: x as i32, y: y as i32 })
        })
    }
}

pub(crate) struct CarvedTopology {
    pub(crate) field: Field,
    pub(crate) rooms: Vec<RoomRect>,
}

pub(crate) fn carve_topology(rng: &mut ChaCha8Rng, config: &GameConfig) -> CarvedTopology {
    let mut field = Field::new(config.field_width_tiles, config.field_height_tiles);
    let rooms = carve_rooms(rng, config, &mut field);
    carve_passages(rng, config, &mut field);
    CarvedTopology { field, rooms }
}

fn carve_rooms(rng: &mut ChaCha8Rng, config: &GameConfig, field: &mut Field) -> Vec<RoomRect> {
    let room_count = rand_in_range(rng, config.room_count.0, config.room_count.1);
    let mut rooms: Vec<RoomRect> = Vec::with_capacity(room_count);

    for _ in 0..room_count {
        let Some(room) = sample_disjoint_room(rng, config, field, &rooms) else {
            // Attempt cap exhausted; a crowded field drops the room rather
            // than resampling forever.
            continue;
        };
        for cell in room.cells() {
            field.carve(cell);
        }
        rooms.push(room);
    }
    rooms
}

/// Re-rolls size and origin together until the whole rectangle lands on
/// uncarved ground, bounded by the configured attempt cap.
fn sample_disjoint_room(
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    field: &Field,
    rooms: &[RoomRect],
) -> Option<RoomRect> {
    for _ in 0..config.room_attempt_cap {
        let room_width = rand_in_range(rng, config.room_side.0, config.room_side.1);
        let room_height = rand_in_range(rng, config.room_side.0, config.room_side.1);
        if room_width > field.width || room_height > field.height {
            continue;
        }

        let x = rand_in_range(rng, 0, field.width - room_width);
        let y = rand_in_range(rng, 0, field.height - room_height);
        let candidate = RoomRect { x, y, width: room_width, height: room_height };
        if rooms.iter().any(|existing_room| existing_room.intersects(&candidate)) {
            continue;
        }
        return Some(candidate);
    }
    None
}

fn carve_passages(rng: &mut ChaCha8Rng, config: &GameConfig, field: &mut Field) {
    let vertical = rand_in_range(rng, config.vertical_passages.0, config.vertical_passages.1);
    for _ in 0..vertical {
        let x = rand_in_range(rng, 0, field.width - 1) as i32;
        for y in 0..field.height {
            field.carve(Cell { x, y: y as i32 });
        }
    }

    let horizontal = rand_in_range(rng, config.horizontal_passages.0, config.horizontal_passages.1);
    for _ in 0..horizontal {
        let y = rand_in_range(rng, 0, field.height - 1) as i32;
        for x in 0..field.width {
            field.carve(Cell { x: x as i32, y });
        }
    }
}
