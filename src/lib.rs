//! A terminal maze game: randomized Prim's generation, BFS shortest path, and
//! enemies and coins placed off that path.

pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod maze;
pub mod pathing;
pub mod placement;
pub mod player;
pub mod render;

pub use error::{SetupError, SetupResult};
pub use game::{Game, GameConfig, MoveOutcome, Status};
pub use grid::{Dir, Grid, Pos, Tile};
