//! Enemy decision step
//!
//! Purely reactive: each eligible tick an enemy either wanders or chases
//! the player, then may fire if it shares the player's row or column.
//! No memory beyond its own position and heading.

use std::collections::HashSet;

use rand::Rng;
use rand_pcg::Pcg32;

use super::movement::{fire, try_move};
use super::state::{Bullet, Heading, Point, Tank};
use crate::consts::{ENEMY_FIRE_CHANCE, ENEMY_RANDOM_TURN_CHANCE};

/// The heading that closes the larger of the two axis offsets toward
/// `target`. Ties go to the vertical axis.
pub fn pursuit_heading(from: Point, target: Point) -> Heading {
    let dx = target.x - from.x;
    let dy = target.y - from.y;

    if dx.abs() > dy.abs() {
        if dx > 0 { Heading::Right } else { Heading::Left }
    } else if dy > 0 {
        Heading::Down
    } else {
        Heading::Up
    }
}

/// Run one enemy's action for this tick: pick a heading, attempt the
/// move, then consider firing. Failed moves are absorbed silently; the
/// enemy simply holds position.
pub fn act(
    enemy: &mut Tank,
    player_pos: Point,
    walls: &mut HashSet<Point>,
    bullets: &mut Vec<Bullet>,
    rng: &mut Pcg32,
) {
    if rng.random::<f32>() < ENEMY_RANDOM_TURN_CHANCE {
        // Occasional random turn so enemies don't wedge against walls
        enemy.heading = Heading::random(rng);
        try_move(enemy, walls);
    } else {
        enemy.heading = pursuit_heading(enemy.pos, player_pos);
        if !try_move(enemy, walls) {
            // Blocked; one random attempt, result ignored
            enemy.heading = Heading::random(rng);
            try_move(enemy, walls);
        }
    }

    let aligned = enemy.pos.x == player_pos.x || enemy.pos.y == player_pos.y;
    if aligned && rng.random::<f32>() < ENEMY_FIRE_CHANCE {
        fire(enemy.pos, enemy.heading, bullets, walls);
    }
}
