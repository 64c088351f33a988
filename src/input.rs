//! Terminal key classification
//!
//! Maps raw crossterm key events onto the simulation's input vocabulary.
//! Everything unrecognized is `Other`, which doubles as the any-key
//! restart after game over.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::sim::{Heading, InputEvent};

pub fn classify(key: KeyEvent) -> InputEvent {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputEvent::Quit;
    }
    match key.code {
        KeyCode::Up => InputEvent::Turn(Heading::Up),
        KeyCode::Down => InputEvent::Turn(Heading::Down),
        KeyCode::Left => InputEvent::Turn(Heading::Left),
        KeyCode::Right => InputEvent::Turn(Heading::Right),
        KeyCode::Char(' ') => InputEvent::Fire,
        KeyCode::Esc => InputEvent::Quit,
        _ => InputEvent::Other,
    }
}
