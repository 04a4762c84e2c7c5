//! Game setup and per-move rules.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{SetupError, SetupResult};
use crate::grid::{Dir, Grid, Pos, Tile};
use crate::maze::{self, START};
use crate::pathing::{shortest_path, Path};
use crate::placement::{place_entities, Placement};
use crate::player::Player;

pub const STARTING_SCORE: i32 = 20;
pub const ENEMY_PENALTY: i32 = 5;
pub const COIN_BONUS: i32 = 3;
pub const MIN_SIDE: usize = 4;

/// From this cell a move is allowed even into a wall.
pub const ORIGIN: Pos = Pos::new(0, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub enemy_count: usize,
    pub coin_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            enemy_count: 10,
            coin_count: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won { score: i32 },
}

/// What a single move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved,
    HitEnemy { score: i32 },
    CollectedCoin { score: i32 },
    Won { score: i32 },
    /// The game was already over.
    Finished,
}

#[derive(Debug)]
pub struct Game {
    grid: Grid,
    player: Player,
    goal: Pos,
    score: i32,
    status: Status,
    path: Path,
    placement: Placement,
}

impl Game {
    /// Generates the maze, finds the reference path and places entities.
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> SetupResult<Self> {
        if config.width < MIN_SIDE
            || config.height < MIN_SIDE
            || config.width.checked_mul(config.height).is_none()
        {
            return Err(SetupError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let mut grid = maze::generate(config.width, config.height, rng);
        let goal = maze::goal_for(&grid);
        let path = shortest_path(&grid, START, goal).ok_or_else(|| {
            warn!(?goal, "generated maze has no path to the goal");
            SetupError::NoPath { start: START, goal }
        })?;
        debug!(cells = ?path.cells(), "shortest path");

        let placement = place_entities(
            &mut grid,
            &path.to_set(),
            config.enemy_count,
            config.coin_count,
            rng,
        )?;
        info!(
            width = config.width,
            height = config.height,
            path_len = path.len(),
            enemies = placement.enemies.len(),
            coins = placement.coins.len(),
            "game ready"
        );

        Ok(Self::from_parts(grid, START, goal, path, placement))
    }

    /// Builds a game around an already prepared grid.
    pub fn from_parts(grid: Grid, spawn: Pos, goal: Pos, path: Path, placement: Placement) -> Self {
        Self {
            grid,
            player: Player::new(spawn),
            goal,
            score: STARTING_SCORE,
            status: Status::Playing,
            path,
            placement,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Pos {
        self.player.pos
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn shortest_path(&self) -> &Path {
        &self.path
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn enemies_left(&self) -> usize {
        self.grid.count(Tile::Enemy)
    }

    pub fn coins_left(&self) -> usize {
        self.grid.count(Tile::Coin)
    }

    fn can_enter(&self, target: Pos) -> bool {
        match self.grid.get(target) {
            None => false,
            Some(Tile::Wall) => self.player.pos == ORIGIN,
            Some(_) => true,
        }
    }

    /// Steps the player one cell and applies whatever is there.
    pub fn apply_move(&mut self, dir: Dir) -> MoveOutcome {
        if self.status != Status::Playing {
            return MoveOutcome::Finished;
        }
        let target = match self.player.target(dir) {
            Some(t) if self.can_enter(t) => t,
            _ => return MoveOutcome::Blocked,
        };
        self.player.move_to(target);

        match self.grid.get(target) {
            Some(Tile::Goal) => {
                self.status = Status::Won { score: self.score };
                info!(score = self.score, "goal reached");
                MoveOutcome::Won { score: self.score }
            }
            Some(Tile::Enemy) => {
                self.score -= ENEMY_PENALTY;
                self.grid.set(target, Tile::Open);
                debug!(?target, score = self.score, "hit enemy");
                MoveOutcome::HitEnemy { score: self.score }
            }
            Some(Tile::Coin) => {
                self.score += COIN_BONUS;
                self.grid.set(target, Tile::Open);
                debug!(?target, score = self.score, "collected coin");
                MoveOutcome::CollectedCoin { score: self.score }
            }
            _ => MoveOutcome::Moved,
        }
    }
}
