//! Game state and core simulation types
//!
//! One `GameState` is one play-through; everything is rebuilt on restart
//! and nothing survives a session except the RNG stream.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step along `heading`
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Cardinal facing direction; every mobile entity always has one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Grid delta for one step (y grows downward)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// A uniformly random heading
    pub fn random(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..4)]
    }
}

/// A player or enemy tank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tank {
    pub pos: Point,
    pub heading: Heading,
    /// Identity token for bookkeeping only; removal is positional
    pub id: u32,
}

/// An in-flight shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub pos: Point,
    pub heading: Heading,
    pub active: bool,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Session ended; any key restarts
    GameOver,
}

/// True if `p` lies strictly inside the playable rectangle, off the
/// impassable border ring
pub fn in_interior(p: Point) -> bool {
    p.x >= 1 && p.x <= GRID_WIDTH - 2 && p.y >= 1 && p.y <= GRID_HEIGHT - 2
}

/// Complete session state (deterministic given the seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: Tank,
    pub enemies: Vec<Tank>,
    pub bullets: Vec<Bullet>,
    /// Destructible wall cells; membership is the collision predicate
    pub walls: HashSet<Point>,
    pub score: u32,
    pub phase: GamePhase,
    /// Countdown gating the player's next move attempt
    pub player_move_cooldown: u8,
    /// Ticks elapsed this session
    pub time_ticks: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            player: Tank {
                pos: Point::new(2, GRID_HEIGHT / 2),
                heading: Heading::Right,
                id: 0,
            },
            enemies: Vec::new(),
            bullets: Vec::new(),
            walls: HashSet::new(),
            score: 0,
            phase: GamePhase::Playing,
            player_move_cooldown: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_session();
        state
    }

    /// Reinitialize the whole session in place. The RNG stream carries on,
    /// so restarts within one process see fresh layouts.
    pub fn reset_session(&mut self) {
        self.player = Tank {
            pos: Point::new(2, GRID_HEIGHT / 2),
            heading: Heading::Right,
            id: 0,
        };
        self.enemies.clear();
        self.bullets.clear();
        self.walls.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.player_move_cooldown = 0;
        self.time_ticks = 0;

        self.generate_walls();
        for _ in 0..ENEMY_ROSTER {
            let enemy = spawn_enemy(&self.walls, &mut self.rng);
            self.enemies.push(enemy);
        }
    }

    /// Populate the wall set: scattered random cells plus a fixed
    /// vertical segment at the horizontal midpoint
    fn generate_walls(&mut self) {
        for _ in 0..RANDOM_WALL_COUNT {
            let x = self.rng.random_range(1..GRID_WIDTH - 1);
            let y = self.rng.random_range(1..GRID_HEIGHT - 1);
            // The player's starting band stays clear
            if x < PLAYER_SAFE_COLUMNS {
                continue;
            }
            self.walls.insert(Point::new(x, y));
        }

        for y in MID_WALL_Y_START..MID_WALL_Y_END {
            self.walls.insert(Point::new(GRID_WIDTH / 2, y));
        }
    }
}

/// Spawn one enemy at the right-edge interior column with a random row.
/// If the chosen cell is a wall the row is nudged by one; the nudged cell
/// is not re-checked (accepted approximation).
pub fn spawn_enemy(walls: &HashSet<Point>, rng: &mut Pcg32) -> Tank {
    let x = GRID_WIDTH - 2;
    let mut y = rng.random_range(1..GRID_HEIGHT - 1);
    if walls.contains(&Point::new(x, y)) {
        y += 1;
    }
    Tank {
        pos: Point::new(x, y),
        heading: Heading::Left,
        id: rng.random(),
    }
}
