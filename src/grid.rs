//! Occupancy grid shared by generation, placement and play.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Open,
    Goal,
    Enemy,
    Coin,
}

impl Tile {
    pub fn is_passable(self) -> bool {
        self != Tile::Wall
    }
}

/// A cell coordinate, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one step away in `dir`, or `None` when that would underflow.
    /// The upper bound is left to the grid.
    pub fn step(self, dir: Dir) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Pos { row, col })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Neighbor visit order used by search and carving.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// An all-wall grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Tile::Wall)
    }

    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            cells: vec![tile; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// True for cells off the outer border.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.row > 0 && pos.col > 0 && pos.row + 1 < self.height && pos.col + 1 < self.width
    }

    pub fn index(&self, pos: Pos) -> usize {
        pos.row * self.width + pos.col
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        if self.in_bounds(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Writes `tile` at `pos`. Returns `false` and leaves the grid untouched
    /// when `pos` is out of bounds.
    pub fn set(&mut self, pos: Pos, tile: Tile) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.cells[idx] = tile;
        true
    }

    pub fn fill(&mut self, tile: Tile) {
        self.cells.fill(tile);
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Tile::Wall)
    }

    pub fn neighbor(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        pos.step(dir).filter(|p| self.in_bounds(*p))
    }

    /// In-bounds neighbors in `Dir::ALL` order.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Dir::ALL.into_iter().filter_map(move |dir| self.neighbor(pos, dir))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Pos { row, col }))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|t| **t == tile).count()
    }
}
