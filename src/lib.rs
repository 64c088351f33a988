//! Grid Tanks - a terminal tank arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, AI, game state)
//! - `input`: Terminal key events classified into game inputs
//! - `render`: Crossterm cell renderer

pub mod input;
pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 70;

    /// Arena dimensions including the one-cell border ring
    pub const GRID_WIDTH: i32 = 40;
    pub const GRID_HEIGHT: i32 = 20;

    /// Ticks between player moves (keeps the player slower than the tick
    /// rate while still faster than enemies)
    pub const PLAYER_MOVE_DELAY: u8 = 2;

    /// Target number of live enemies
    pub const ENEMY_ROSTER: usize = 3;
    /// Score awarded per destroyed enemy
    pub const KILL_REWARD: u32 = 100;

    /// Random wall placement attempts at session start
    pub const RANDOM_WALL_COUNT: u32 = 40;
    /// Columns left of this stay wall-free so the player spawn is clear
    pub const PLAYER_SAFE_COLUMNS: i32 = 5;
    /// Vertical band of the fixed midline wall segment
    pub const MID_WALL_Y_START: i32 = 5;
    pub const MID_WALL_Y_END: i32 = 15;

    /// Per-tick probability that an enemy is eligible to act at all
    pub const ENEMY_ACT_CHANCE: f32 = 0.25;
    /// Probability an eligible enemy abandons pursuit for a random turn
    pub const ENEMY_RANDOM_TURN_CHANCE: f32 = 0.2;
    /// Probability an enemy aligned with the player fires
    pub const ENEMY_FIRE_CHANCE: f32 = 0.1;
    /// Per-tick probability of one respawn while the roster is short
    pub const ENEMY_RESPAWN_CHANCE: f32 = 0.05;
}
