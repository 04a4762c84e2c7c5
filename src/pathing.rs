//! Breadth-first search over the grid. Walls block, every other tile passes.

use std::collections::{HashSet, VecDeque};

use crate::grid::{Grid, Pos};

/// Shortest route from start to goal, both ends included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn to_set(&self) -> HashSet<Pos> {
        self.cells.iter().copied().collect()
    }
}

fn passable(grid: &Grid, pos: Pos) -> bool {
    grid.get(pos).is_some_and(|t| t.is_passable())
}

/// Shortest path by edge count, or `None` when the goal can't be reached.
///
/// Neighbors expand in `Dir::ALL` order, so ties resolve the same way every
/// time for a given grid.
pub fn shortest_path(grid: &Grid, start: Pos, goal: Pos) -> Option<Path> {
    if !passable(grid, start) || !passable(grid, goal) {
        return None;
    }

    let mut prev: Vec<Option<Pos>> = vec![None; grid.width() * grid.height()];
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut q = VecDeque::new();
    seen[grid.index(start)] = true;
    q.push_back(start);

    while let Some(pos) = q.pop_front() {
        if pos == goal {
            let mut cells = vec![pos];
            let mut cur = pos;
            while let Some(p) = prev[grid.index(cur)] {
                cells.push(p);
                cur = p;
            }
            cells.reverse();
            return Some(Path { cells });
        }
        for next in grid.neighbors(pos) {
            let idx = grid.index(next);
            if seen[idx] || !passable(grid, next) {
                continue;
            }
            seen[idx] = true;
            prev[idx] = Some(pos);
            q.push_back(next);
        }
    }
    None
}

/// Flood fill from `start`, indexed by `Grid::index`.
pub fn reachable(grid: &Grid, start: Pos) -> Vec<bool> {
    let mut seen = vec![false; grid.width() * grid.height()];
    if !passable(grid, start) {
        return seen;
    }
    let mut q = VecDeque::new();
    seen[grid.index(start)] = true;
    q.push_back(start);
    while let Some(pos) = q.pop_front() {
        for next in grid.neighbors(pos) {
            let idx = grid.index(next);
            if !seen[idx] && passable(grid, next) {
                seen[idx] = true;
                q.push_back(next);
            }
        }
    }
    seen
}
