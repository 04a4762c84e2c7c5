//! Terminal renderer. Reads the game, never changes it.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::game::Game;
use crate::grid::{Pos, Tile};

const CELL_W: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Glyph {
    Player,
    Wall,
    Open,
    Goal,
    Enemy,
    Coin,
}

impl Glyph {
    fn text(self) -> &'static str {
        match self {
            Glyph::Player => "😃",
            Glyph::Wall => "██",
            Glyph::Open => "  ",
            Glyph::Goal => "▒▒",
            Glyph::Enemy => "👾",
            Glyph::Coin => "● ",
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Player => Color::Cyan,
            Glyph::Wall => Color::DarkGrey,
            Glyph::Open => Color::Reset,
            Glyph::Goal => Color::Green,
            Glyph::Enemy => Color::Red,
            Glyph::Coin => Color::Yellow,
        }
    }
}

fn glyph_at(game: &Game, pos: Pos) -> Glyph {
    if pos == game.player() {
        return Glyph::Player;
    }
    match game.grid().get(pos) {
        Some(Tile::Open) => Glyph::Open,
        Some(Tile::Goal) => Glyph::Goal,
        Some(Tile::Enemy) => Glyph::Enemy,
        Some(Tile::Coin) => Glyph::Coin,
        Some(Tile::Wall) | None => Glyph::Wall,
    }
}

/// Redraws only the cells that changed since the last frame.
pub struct Renderer {
    last: Vec<Glyph>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![Glyph::Open; width * height],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    /// Forces the next frame to redraw everything, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    fn board_size(game: &Game) -> (u16, u16) {
        let grid = game.grid();
        ((grid.width() * CELL_W) as u16, (grid.height() + 2) as u16)
    }

    pub fn render<W: Write>(&mut self, out: &mut W, game: &Game) -> io::Result<()> {
        let (needed_w, needed_h) = Self::board_size(game);
        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            out.queue(MoveTo(0, 0))?;
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            )))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            out.queue(Clear(ClearType::All))?;
        }

        let hud = format!(
            "Score: {}  Enemies: {}  Coins: {}  (arrows to move, q to quit)",
            game.score(),
            game.enemies_left(),
            game.coins_left()
        );
        if self.needs_full || hud != self.last_hud {
            out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&hud))?;
            out.queue(ResetColor)?;
            self.last_hud = hud;
        }

        let grid = game.grid();
        for pos in grid.positions() {
            let glyph = glyph_at(game, pos);
            let idx = grid.index(pos);
            if self.needs_full || glyph != self.last[idx] {
                self.last[idx] = glyph;
                self.draw_cell(out, pos, glyph)?;
            }
        }
        self.needs_full = false;

        out.flush()
    }

    fn draw_cell<W: Write>(&self, out: &mut W, pos: Pos, glyph: Glyph) -> io::Result<()> {
        let text = glyph.text();
        let x = self.origin_x + (pos.col * CELL_W) as u16;
        let y = self.origin_y + pos.row as u16;
        out.queue(MoveTo(x, y))?;
        out.queue(SetForegroundColor(glyph.color()))?;
        out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        Ok(())
    }

    /// Prints the final score under the board.
    pub fn render_win<W: Write>(&self, out: &mut W, game: &Game, score: i32) -> io::Result<()> {
        let (_, needed_h) = Self::board_size(game);
        let (_, term_h) = terminal::size()?;
        let y = if term_h < needed_h {
            needed_h
        } else {
            self.origin_y + game.grid().height() as u16
        };
        out.queue(MoveTo(self.origin_x, y))?;
        out.queue(SetForegroundColor(Color::Green))?;
        out.queue(Print(format!(
            "YOU WIN - Final Score: {} (press q to quit)",
            score
        )))?;
        out.queue(ResetColor)?;
        out.flush()
    }
}
