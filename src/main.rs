//! Grid Tanks entry point
//!
//! Sets up logging and the terminal, then multiplexes key events and the
//! fixed 70 ms tick on a single thread: input is applied the moment it
//! arrives, the simulation advances only on tick boundaries.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use grid_tanks::consts::TICK_INTERVAL_MS;
use grid_tanks::input::classify;
use grid_tanks::render::Screen;
use grid_tanks::sim::{GamePhase, GameState, InputEvent, apply_input, tick};

fn main() -> Result<()> {
    env_logger::init();

    // Optional seed argument for deterministic replay
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .context("seed must be an unsigned integer")?,
        None => rand::random(),
    };
    info!("starting session with seed {seed}");

    let mut state = GameState::new(seed);
    let mut screen = Screen::new()?;
    run(&mut state, &mut screen)
}

fn run(state: &mut GameState, screen: &mut Screen) -> Result<()> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout).context("polling terminal events")? {
            if let Event::Key(key) = event::read().context("reading terminal event")? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match classify(key) {
                    InputEvent::Quit => return Ok(()),
                    other => apply_input(state, other),
                }
            }
        } else {
            next_tick += tick_interval;
            match state.phase {
                GamePhase::Playing => {
                    tick(state);
                    screen.draw(state)?;
                }
                GamePhase::GameOver => screen.draw_game_over(state)?,
            }
        }
    }
}
