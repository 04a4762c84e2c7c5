//! Scatters enemies and coins off the shortest path.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{SetupError, SetupResult};
use crate::grid::{Grid, Pos, Tile};

/// Where entities ended up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub enemies: Vec<Pos>,
    pub coins: Vec<Pos>,
}

/// Open cells not in `excluded`, row-major.
pub fn eligible_cells(grid: &Grid, excluded: &HashSet<Pos>) -> Vec<Pos> {
    grid.positions()
        .filter(|p| grid.get(*p) == Some(Tile::Open) && !excluded.contains(p))
        .collect()
}

/// Marks `enemy_count` enemies then `coin_count` coins on eligible cells.
///
/// Fails without touching the grid when there aren't enough eligible cells.
pub fn place_entities(
    grid: &mut Grid,
    excluded: &HashSet<Pos>,
    enemy_count: usize,
    coin_count: usize,
    rng: &mut impl Rng,
) -> SetupResult<Placement> {
    let mut cells = eligible_cells(grid, excluded);
    let requested = enemy_count.checked_add(coin_count).unwrap_or(usize::MAX);
    if cells.len() < requested {
        return Err(SetupError::NotEnoughCells {
            requested,
            available: cells.len(),
        });
    }

    cells.shuffle(rng);
    let (enemies, rest) = cells.split_at(enemy_count);
    let coins = &rest[..coin_count];
    for pos in enemies {
        grid.set(*pos, Tile::Enemy);
    }
    for pos in coins {
        grid.set(*pos, Tile::Coin);
    }
    debug!(enemies = enemies.len(), coins = coins.len(), "entities placed");

    Ok(Placement {
        enemies: enemies.to_vec(),
        coins: coins.to_vec(),
    })
}
