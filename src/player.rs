use crate::grid::{Dir, Pos};

/// The player's logical cell. Screen placement is the renderer's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos }
    }

    /// Where a unit step in `dir` would land, if it doesn't go below zero.
    pub fn target(&self, dir: Dir) -> Option<Pos> {
        self.pos.step(dir)
    }

    pub fn move_to(&mut self, pos: Pos) {
        self.pos = pos;
    }
}
