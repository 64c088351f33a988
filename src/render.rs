//! Crossterm cell renderer
//!
//! Thin I/O shell over the simulation: draws whole frames as queued cell
//! updates flushed once per tick. No game logic lives here.

use std::io::{Stdout, Write, stdout};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::consts::{GRID_HEIGHT, GRID_WIDTH};
use crate::sim::{GameState, Heading, Point, Tank};

const WALL_CHAR: char = '▓';
const BULLET_CHAR: char = '•';

const PLAYER_COLOR: Color = Color::Green;
const ENEMY_COLOR: Color = Color::Red;
const WALL_COLOR: Color = Color::Magenta;
const BULLET_COLOR: Color = Color::Yellow;

fn tank_glyph(heading: Heading) -> char {
    match heading {
        Heading::Up => '▲',
        Heading::Down => '▼',
        Heading::Left => '◄',
        Heading::Right => '►',
    }
}

/// Owns the terminal for the lifetime of the game and restores it on drop
pub struct Screen {
    out: Stdout,
}

impl Screen {
    /// Acquire the terminal: raw mode, alternate screen, hidden cursor
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(out, EnterAlternateScreen, cursor::Hide).context("entering alternate screen")?;
        Ok(Self { out })
    }

    fn put(&mut self, p: Point, ch: char, color: Color) -> Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(p.x as u16, p.y as u16),
            SetForegroundColor(color),
            Print(ch)
        )?;
        Ok(())
    }

    fn text(&mut self, x: i32, y: i32, text: &str, color: Color) -> Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(x as u16, y as u16),
            SetForegroundColor(color),
            Print(text)
        )?;
        Ok(())
    }

    fn draw_tank(&mut self, tank: &Tank, color: Color) -> Result<()> {
        self.put(tank.pos, tank_glyph(tank.heading), color)
    }

    /// Draw one playing frame: border, walls, tanks, bullets, HUD
    pub fn draw(&mut self, state: &GameState) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        for x in 0..GRID_WIDTH {
            self.put(Point::new(x, 0), '─', Color::White)?;
            self.put(Point::new(x, GRID_HEIGHT - 1), '─', Color::White)?;
        }
        for y in 0..GRID_HEIGHT {
            self.put(Point::new(0, y), '│', Color::White)?;
            self.put(Point::new(GRID_WIDTH - 1, y), '│', Color::White)?;
        }

        for wall in &state.walls {
            self.put(*wall, WALL_CHAR, WALL_COLOR)?;
        }

        self.draw_tank(&state.player, PLAYER_COLOR)?;
        for enemy in &state.enemies {
            self.draw_tank(enemy, ENEMY_COLOR)?;
        }
        for bullet in &state.bullets {
            self.put(bullet.pos, BULLET_CHAR, BULLET_COLOR)?;
        }

        self.text(1, GRID_HEIGHT, "ESC:Exit SPACE:Fire", Color::White)?;
        self.text(GRID_WIDTH - 10, GRID_HEIGHT, "Score:", Color::Cyan)?;
        self.text(
            GRID_WIDTH - 3,
            GRID_HEIGHT,
            &state.score.to_string(),
            Color::Cyan,
        )?;

        self.out.flush()?;
        Ok(())
    }

    /// Draw the game-over screen with the final score
    pub fn draw_game_over(&mut self, state: &GameState) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let msg = "GAME OVER";
        self.text(
            GRID_WIDTH / 2 - msg.len() as i32 / 2,
            GRID_HEIGHT / 2,
            msg,
            Color::Red,
        )?;
        self.text(GRID_WIDTH / 2 - 6, GRID_HEIGHT / 2 + 1, "Score:", Color::White)?;
        self.text(
            GRID_WIDTH / 2 + 1,
            GRID_HEIGHT / 2 + 1,
            &state.score.to_string(),
            Color::White,
        )?;

        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Best-effort restore so a panic doesn't wedge the terminal
        let _ = execute!(self.out, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
