//! Movement and collision primitives
//!
//! One shared move attempt serves the player and every enemy; bullets get
//! their own advance rule because leaving the grid or striking a wall
//! consumes them instead of rejecting the step.

use std::collections::HashSet;

use super::state::{Bullet, Heading, Point, Tank, in_interior};

/// Attempt to move a tank one step along its current heading.
///
/// The move is rejected (no state change, returns false) when the
/// candidate cell is outside the interior bounds or occupied by a wall.
pub fn try_move(tank: &mut Tank, walls: &HashSet<Point>) -> bool {
    let candidate = tank.pos.step(tank.heading);

    if !in_interior(candidate) {
        return false;
    }
    if walls.contains(&candidate) {
        return false;
    }

    tank.pos = candidate;
    true
}

/// Step a bullet one cell along its heading.
///
/// Leaving the interior deactivates it; landing on a wall deactivates it
/// and destroys that wall cell. Otherwise the bullet keeps flying.
pub fn advance(bullet: &mut Bullet, walls: &mut HashSet<Point>) {
    bullet.pos = bullet.pos.step(bullet.heading);

    if !in_interior(bullet.pos) {
        bullet.active = false;
        return;
    }

    if walls.remove(&bullet.pos) {
        bullet.active = false;
    }
}

/// Fire a bullet from `origin` along `heading`.
///
/// The bullet is advanced once immediately so it appears in front of the
/// firer; a point-blank shot into a wall destroys the wall and leaves no
/// bullet in flight.
pub fn fire(origin: Point, heading: Heading, bullets: &mut Vec<Bullet>, walls: &mut HashSet<Point>) {
    let mut bullet = Bullet {
        pos: origin,
        heading,
        active: true,
    };
    advance(&mut bullet, walls);
    if bullet.active {
        bullets.push(bullet);
    }
}
