//! Tunable rules for field carving, entity placement, and combat pacing.

use serde::{Deserialize, Serialize};

/// Inclusive `(min, max)` ranges are sampled uniformly during generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width_tiles: usize,
    pub field_height_tiles: usize,
    pub room_count: (usize, usize),
    pub room_side: (usize, usize),
    pub vertical_passages: (usize, usize),
    pub horizontal_passages: (usize, usize),
    pub room_attempt_cap: u32,
    pub placement_attempt_cap: u32,
    pub weapon_count: usize,
    pub potion_count: usize,
    pub enemy_count: usize,
    pub player_max_health: i32,
    pub player_base_damage: i32,
    pub weapon_damage_bonus: i32,
    pub enemy_max_health: i32,
    pub damage_amount: i32,
    pub damage_interval_ms: u64,
    pub enemy_move_interval_ms: u64,
    pub reset_delay_ms: u64,
    pub regeneration_attempt_cap: u32,
    // The player's own cell counts as adjacent when true; false gives the
    // plain 8-neighborhood test.
    pub adjacency_includes_self: bool,
    // Entities may share a spawn cell unless set.
    pub exclusive_placement: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width_tiles: 41,
            field_height_tiles: 25,
            room_count: (5, 10),
            room_side: (3, 8),
            vertical_passages: (3, 5),
            horizontal_passages: (3, 5),
            room_attempt_cap: 120,
            placement_attempt_cap: 1000,
            weapon_count: 2,
            potion_count: 10,
            enemy_count: 10,
            player_max_health: 100,
            player_base_damage: 10,
            weapon_damage_bonus: 20,
            enemy_max_health: 100,
            damage_amount: 30,
            damage_interval_ms: 1000,
            enemy_move_interval_ms: 1000,
            reset_delay_ms: 3000,
            regeneration_attempt_cap: 8,
            adjacency_includes_self: true,
            exclusive_placement: false,
        }
    }
}

impl GameConfig {
    pub fn total_placed_units(&self) -> usize {
        1 + self.weapon_count + self.potion_count + self.enemy_count
    }

    pub(crate) fn damage_per_pulse(&self) -> i32 {
        ((self.damage_amount as i64 * self.damage_interval_ms as i64) / 1000) as i32
    }

    pub(crate) fn enemy_move_interval(&self) -> u64 {
        self.enemy_move_interval_ms.max(1)
    }

    pub(crate) fn damage_interval(&self) -> u64 {
        self.damage_interval_ms.max(1)
    }

    pub(crate) fn reset_delay(&self) -> u64 {
        self.reset_delay_ms.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_standard_ruleset() {
        let config = GameConfig::default();
        assert_eq!(config.field_width_tiles, 41);
        assert_eq!(config.field_height_tiles, 25);
        assert_eq!(config.total_placed_units(), 23);
        assert_eq!(config.damage_per_pulse(), 30);
        assert!(config.adjacency_includes_self);
        assert!(!config.exclusive_placement);
    }

    #[test]
    fn partial_json_overrides_keep_remaining_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"enemy_count": 3, "exclusive_placement": true}"#)
                .expect("partial config should parse");
        assert_eq!(config.enemy_count, 3);
        assert!(config.exclusive_placement);
        assert_eq!(config.field_width_tiles, 41);
        assert_eq!(config.potion_count, 10);
    }
}
