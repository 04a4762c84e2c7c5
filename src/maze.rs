//! Randomized Prim's maze carving.
//!
//! Passages are grown one cell at a time from a fixed start. A wall is only
//! carved when exactly one of its four neighbors is already open, so every
//! carve adds a single edge and the carved region stays a spanning tree.

use rand::Rng;
use tracing::{debug, warn};

use crate::grid::{Dir, Grid, Pos, Tile};
use crate::pathing::reachable;

/// Where carving starts and the player spawns.
pub const START: Pos = Pos::new(1, 1);

/// Neighbor order tried when growing passages from a cell.
const CARVE_ORDER: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];

/// Bottom-right interior cell.
pub fn goal_for(grid: &Grid) -> Pos {
    Pos::new(grid.height() - 2, grid.width() - 2)
}

/// Builds a maze of the given size with the goal marked.
///
/// Dimensions are not checked here; callers must pass at least 4x4.
pub fn generate(width: usize, height: usize, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new(width, height);
    carve_passages(&mut grid, rng);
    let goal = place_goal(&mut grid);
    debug!(
        width,
        height,
        open = grid.count(Tile::Open),
        ?goal,
        "maze generated"
    );
    grid
}

/// Resets `grid` to walls and carves passages out from `START`.
pub fn carve_passages(grid: &mut Grid, rng: &mut impl Rng) {
    grid.fill(Tile::Wall);
    grid.set(START, Tile::Open);
    let mut frontier: Vec<Pos> = vec![START];

    while !frontier.is_empty() {
        let idx = rng.gen_range(0..frontier.len());
        let cell = frontier.swap_remove(idx);
        if grid.get(cell) != Some(Tile::Open) {
            continue;
        }

        for dir in CARVE_ORDER {
            let Some(next) = grid.neighbor(cell, dir) else {
                continue;
            };
            if !grid.is_interior(next) || !grid.is_wall(next) {
                continue;
            }
            if wall_count(grid, next) == 3 {
                grid.set(next, Tile::Open);
                frontier.push(next);
            }
        }
    }
}

fn wall_count(grid: &Grid, pos: Pos) -> usize {
    grid.neighbors(pos).filter(|p| grid.is_wall(*p)).count()
}

/// Marks the goal and makes sure it can be reached from `START`.
pub fn place_goal(grid: &mut Grid) -> Pos {
    let goal = goal_for(grid);
    grid.set(goal, Tile::Goal);

    let above = Pos::new(goal.row - 1, goal.col);
    let left = Pos::new(goal.row, goal.col - 1);
    if grid.is_wall(above) && grid.is_wall(left) {
        grid.set(above, Tile::Open);
    }

    ensure_connected(grid);
    goal
}

/// Carves walls until every passable cell is reachable from `START`.
///
/// Each pass carves one wall, so the loop ends within the grid's cell count.
fn ensure_connected(grid: &mut Grid) {
    let mut carved = 0;
    for _ in 0..grid.width() * grid.height() {
        let seen = reachable(grid, START);
        if !has_island(grid, &seen) {
            break;
        }
        match connecting_wall(grid, &seen) {
            Some(wall) => {
                grid.set(wall, Tile::Open);
                carved += 1;
            }
            None => {
                warn!("unreachable cells remain but no wall can be carved");
                break;
            }
        }
    }
    if carved > 0 {
        debug!(carved, "carved extra walls to connect the goal");
    }
}

fn on_island(grid: &Grid, seen: &[bool], pos: Pos) -> bool {
    !grid.is_wall(pos) && grid.in_bounds(pos) && !seen[grid.index(pos)]
}

fn has_island(grid: &Grid, seen: &[bool]) -> bool {
    grid.positions().any(|p| on_island(grid, seen, p))
}

/// A wall joining the reachable region to an island, or failing that, the
/// first wall next to an island so the island grows toward the maze.
fn connecting_wall(grid: &Grid, seen: &[bool]) -> Option<Pos> {
    let walls: Vec<Pos> = grid
        .positions()
        .filter(|p| grid.is_interior(*p) && grid.is_wall(*p))
        .collect();
    let touches_island = |w: &Pos| grid.neighbors(*w).any(|n| on_island(grid, seen, n));
    let touches_maze = |w: &Pos| grid.neighbors(*w).any(|n| seen[grid.index(n)]);

    walls
        .iter()
        .copied()
        .find(|w| touches_maze(w) && touches_island(w))
        .or_else(|| walls.iter().copied().find(|w| touches_island(w)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathing::shortest_path;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn adjacency_edges(grid: &Grid) -> usize {
        grid.positions()
            .filter(|p| !grid.is_wall(*p))
            .map(|p| {
                [Pos::new(p.row + 1, p.col), Pos::new(p.row, p.col + 1)]
                    .into_iter()
                    .filter(|n| grid.get(*n).is_some_and(|t| t.is_passable()))
                    .count()
            })
            .sum()
    }

    fn passable_count(grid: &Grid) -> usize {
        grid.positions().filter(|p| !grid.is_wall(*p)).count()
    }

    #[test]
    fn border_stays_wall() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate(11, 9, &mut rng);
            for pos in grid.positions() {
                if !grid.is_interior(pos) {
                    assert_eq!(grid.get(pos), Some(Tile::Wall), "seed {seed} at {pos:?}");
                }
            }
        }
    }

    #[test]
    fn every_open_cell_is_reachable() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let size = 5 + (seed as usize % 17);
            let grid = generate(size, size + 2, &mut rng);
            let seen = reachable(&grid, START);
            for pos in grid.positions() {
                assert_eq!(
                    !grid.is_wall(pos),
                    seen[grid.index(pos)],
                    "seed {seed} size {size} at {pos:?}"
                );
            }
        }
    }

    #[test]
    fn carved_passages_form_a_tree() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(15, 13);
            carve_passages(&mut grid, &mut rng);
            assert_eq!(
                passable_count(&grid),
                adjacency_edges(&grid) + 1,
                "seed {seed}"
            );
            let seen = reachable(&grid, START);
            assert_eq!(seen.iter().filter(|s| **s).count(), passable_count(&grid));
        }
    }

    #[test]
    fn goal_is_bottom_right_and_reachable() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate(9, 7, &mut rng);
            let goal = Pos::new(5, 7);
            assert_eq!(grid.get(goal), Some(Tile::Goal));
            assert_eq!(grid.count(Tile::Goal), 1);
            assert!(shortest_path(&grid, START, goal).is_some(), "seed {seed}");
        }
    }

    fn open_interior(grid: &mut Grid) {
        for pos in grid.positions() {
            if grid.is_interior(pos) {
                grid.set(pos, Tile::Open);
            }
        }
    }

    #[test]
    fn sealed_goal_corner_is_reconnected() {
        let mut grid = Grid::new(7, 7);
        open_interior(&mut grid);
        for pos in [(3, 5), (4, 4), (4, 5), (5, 4), (5, 5)] {
            grid.set(Pos::new(pos.0, pos.1), Tile::Wall);
        }

        let goal = place_goal(&mut grid);
        assert_eq!(goal, Pos::new(5, 5));
        assert_eq!(grid.get(Pos::new(4, 5)), Some(Tile::Open));
        assert_eq!(grid.get(Pos::new(3, 5)), Some(Tile::Open));
        assert!(shortest_path(&grid, START, goal).is_some());
    }

    #[test]
    fn distant_goal_island_grows_until_joined() {
        let mut grid = Grid::new(9, 9);
        for col in 1..8 {
            grid.set(Pos::new(1, col), Tile::Open);
        }

        let goal = place_goal(&mut grid);
        let path = shortest_path(&grid, START, goal).unwrap();
        assert_eq!(path.len(), 13);
        for row in 2..7 {
            assert_eq!(grid.get(Pos::new(row, 7)), Some(Tile::Open), "row {row}");
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate(21, 15, &mut StdRng::seed_from_u64(42));
        let b = generate(21, 15, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn smallest_maze_connects_start_to_goal() {
        for seed in 0..20 {
            let grid = generate(4, 4, &mut StdRng::seed_from_u64(seed));
            assert!(shortest_path(&grid, START, Pos::new(2, 2)).is_some());
        }
    }
}
