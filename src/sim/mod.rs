//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only, owned by the game state
//! - No rendering or terminal dependencies

pub mod ai;
pub mod movement;
pub mod state;
pub mod tick;

pub use movement::{advance, fire, try_move};
pub use state::{Bullet, GamePhase, GameState, Heading, Point, Tank};
pub use tick::{InputEvent, apply_input, tick};
