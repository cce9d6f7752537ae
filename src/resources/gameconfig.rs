//! Game configuration resource.
//!
//! Manages gameplay tuning loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! base_speed = 5.0
//! jump_force = 5.0
//! sprint_bonus = 5.0
//! mass = 1.0
//! enemy_prefab = enemy
//! enemy_spawn_offset_y = 5.0
//!
//! [enemy]
//! speed = 3.0
//!
//! [pickup]
//! boost_amount = 2.0
//!
//! [spawner]
//! prefab = speed_pickup
//! count = 2
//! offset_y = 3.0
//!
//! [physics]
//! gravity = -9.81
//! floor_y = 0.0
//!
//! [sim]
//! dt = 0.016666668
//! ticks = 600
//! ```
//!
//! Setting `enemy_prefab` or `prefab` to `none` disables the matching spawn.

use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::playercontrolled::DEFAULT_ENEMY_SPAWN_OFFSET;
use crate::components::spawner::{DEFAULT_SPAWN_COUNT, DEFAULT_SPAWN_OFFSET_Y};
use crate::components::statblock::DEFAULT_SPRINT_BONUS;

/// Default safe values for startup
const DEFAULT_BASE_SPEED: f32 = 5.0;
const DEFAULT_JUMP_FORCE: f32 = 5.0;
const DEFAULT_PLAYER_MASS: f32 = 1.0;
const DEFAULT_ENEMY_SPEED: f32 = 3.0;
const DEFAULT_BOOST_AMOUNT: f32 = 2.0;
const DEFAULT_GRAVITY: f32 = -9.81;
const DEFAULT_FLOOR_Y: f32 = 0.0;
const DEFAULT_DT: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u32 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

pub const ENEMY_PREFAB: &str = "enemy";
pub const PICKUP_PREFAB: &str = "speed_pickup";
const NO_PREFAB: &str = "none";

/// Player stats and the spawn-enemy action.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub base_speed: f32,
    pub jump_force: f32,
    pub sprint_bonus: f32,
    /// Body mass; jump impulses are divided by it.
    pub mass: f32,
    pub enemy_prefab: Option<String>,
    pub enemy_spawn_offset: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyConfig {
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickupConfig {
    pub boost_amount: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerConfig {
    pub prefab: Option<String>,
    pub count: u32,
    pub offset_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    /// Vertical gravity acceleration (negative pulls down).
    pub gravity: f32,
    /// Height of the floor plane bodies rest on.
    pub floor_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Fixed tick length used by the headless runner.
    pub dt: f32,
    /// Number of ticks the headless runner simulates.
    pub ticks: u32,
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub pickup: PickupConfig,
    pub spawner: SpawnerConfig,
    pub physics: PhysicsConfig,
    pub sim: SimConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_f32(config: &Ini, section: &str, key: &str, target: &mut f32) {
    if let Some(value) = config.getfloat(section, key).ok().flatten() {
        *target = value as f32;
    }
}

fn read_prefab(config: &Ini, section: &str, key: &str, target: &mut Option<String>) {
    if let Some(value) = config.get(section, key) {
        let value = value.trim();
        *target = if value.is_empty() || value.eq_ignore_ascii_case(NO_PREFAB) {
            None
        } else {
            Some(value.to_string())
        };
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            player: PlayerConfig {
                base_speed: DEFAULT_BASE_SPEED,
                jump_force: DEFAULT_JUMP_FORCE,
                sprint_bonus: DEFAULT_SPRINT_BONUS,
                mass: DEFAULT_PLAYER_MASS,
                enemy_prefab: Some(ENEMY_PREFAB.to_string()),
                enemy_spawn_offset: DEFAULT_ENEMY_SPAWN_OFFSET,
            },
            enemy: EnemyConfig {
                speed: DEFAULT_ENEMY_SPEED,
            },
            pickup: PickupConfig {
                boost_amount: DEFAULT_BOOST_AMOUNT,
            },
            spawner: SpawnerConfig {
                prefab: Some(PICKUP_PREFAB.to_string()),
                count: DEFAULT_SPAWN_COUNT,
                offset_y: DEFAULT_SPAWN_OFFSET_Y,
            },
            physics: PhysicsConfig {
                gravity: DEFAULT_GRAVITY,
                floor_y: DEFAULT_FLOOR_Y,
            },
            sim: SimConfig {
                dt: DEFAULT_DT,
                ticks: DEFAULT_TICKS,
            },
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [player] section
        read_f32(&config, "player", "base_speed", &mut self.player.base_speed);
        read_f32(&config, "player", "jump_force", &mut self.player.jump_force);
        read_f32(&config, "player", "sprint_bonus", &mut self.player.sprint_bonus);
        read_f32(&config, "player", "mass", &mut self.player.mass);
        read_prefab(&config, "player", "enemy_prefab", &mut self.player.enemy_prefab);
        read_f32(
            &config,
            "player",
            "enemy_spawn_offset_y",
            &mut self.player.enemy_spawn_offset.y,
        );

        // [enemy] section
        read_f32(&config, "enemy", "speed", &mut self.enemy.speed);

        // [pickup] section
        read_f32(&config, "pickup", "boost_amount", &mut self.pickup.boost_amount);

        // [spawner] section
        read_prefab(&config, "spawner", "prefab", &mut self.spawner.prefab);
        if let Some(count) = config.getuint("spawner", "count").ok().flatten() {
            self.spawner.count = count.min(u32::MAX as u64) as u32;
        }
        read_f32(&config, "spawner", "offset_y", &mut self.spawner.offset_y);

        // [physics] section
        read_f32(&config, "physics", "gravity", &mut self.physics.gravity);
        read_f32(&config, "physics", "floor_y", &mut self.physics.floor_y);

        // [sim] section
        read_f32(&config, "sim", "dt", &mut self.sim.dt);
        if let Some(ticks) = config.getuint("sim", "ticks").ok().flatten() {
            self.sim.ticks = ticks.min(u32::MAX as u64) as u32;
        }

        info!(
            "Loaded config: player speed={} jump={} sprint=+{}, enemy speed={}, boost={}, spawner count={}",
            self.player.base_speed,
            self.player.jump_force,
            self.player.sprint_bonus,
            self.enemy.speed,
            self.pickup.boost_amount,
            self.spawner.count
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [player] section
        config.set("player", "base_speed", Some(self.player.base_speed.to_string()));
        config.set("player", "jump_force", Some(self.player.jump_force.to_string()));
        config.set("player", "sprint_bonus", Some(self.player.sprint_bonus.to_string()));
        config.set("player", "mass", Some(self.player.mass.to_string()));
        config.set(
            "player",
            "enemy_prefab",
            Some(
                self.player
                    .enemy_prefab
                    .clone()
                    .unwrap_or_else(|| NO_PREFAB.to_string()),
            ),
        );
        config.set(
            "player",
            "enemy_spawn_offset_y",
            Some(self.player.enemy_spawn_offset.y.to_string()),
        );

        // [enemy] section
        config.set("enemy", "speed", Some(self.enemy.speed.to_string()));

        // [pickup] section
        config.set("pickup", "boost_amount", Some(self.pickup.boost_amount.to_string()));

        // [spawner] section
        config.set(
            "spawner",
            "prefab",
            Some(
                self.spawner
                    .prefab
                    .clone()
                    .unwrap_or_else(|| NO_PREFAB.to_string()),
            ),
        );
        config.set("spawner", "count", Some(self.spawner.count.to_string()));
        config.set("spawner", "offset_y", Some(self.spawner.offset_y.to_string()));

        // [physics] section
        config.set("physics", "gravity", Some(self.physics.gravity.to_string()));
        config.set("physics", "floor_y", Some(self.physics.floor_y.to_string()));

        // [sim] section
        config.set("sim", "dt", Some(self.sim.dt.to_string()));
        config.set("sim", "ticks", Some(self.sim.ticks.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, self.physics.gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_sample_tuning() {
        let config = GameConfig::new();
        assert_eq!(config.player.sprint_bonus, 5.0);
        assert_eq!(config.player.enemy_spawn_offset, Vec2::new(0.0, 5.0));
        assert_eq!(config.spawner.count, 2);
        assert_eq!(config.spawner.offset_y, 3.0);
        assert_eq!(config.player.enemy_prefab.as_deref(), Some(ENEMY_PREFAB));
        assert_eq!(config.spawner.prefab.as_deref(), Some(PICKUP_PREFAB));
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig::with_path(dir.path().join("nope.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.player, GameConfig::new().player);
    }

    #[test]
    fn partial_file_overrides_only_present_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[player]\nbase_speed = 8.5\n\n[spawner]\ncount = 4\nprefab = none").unwrap();
        drop(file);

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.player.base_speed, 8.5);
        assert_eq!(config.player.jump_force, DEFAULT_JUMP_FORCE);
        assert_eq!(config.spawner.count, 4);
        assert_eq!(config.spawner.prefab, None);
        assert_eq!(config.enemy.speed, DEFAULT_ENEMY_SPEED);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut saved = GameConfig::with_path(&path);
        saved.player.base_speed = 6.25;
        saved.player.mass = 2.5;
        saved.player.enemy_prefab = None;
        saved.enemy.speed = -1.5;
        saved.spawner.count = 7;
        saved.sim.ticks = 42;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, saved);
    }
}
