use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::GameConfig;

/// Terminal maze: reach the green exit, dodge enemies, grab coins.
#[derive(Parser, Debug)]
#[command(name = "dark-maze", version, about)]
pub struct Args {
    /// Maze width in cells, border included
    #[arg(long, env = "DARK_MAZE_WIDTH", default_value_t = 25)]
    pub width: usize,

    /// Maze height in cells, border included
    #[arg(long, env = "DARK_MAZE_HEIGHT", default_value_t = 25)]
    pub height: usize,

    /// Number of enemies to scatter
    #[arg(long, env = "DARK_MAZE_ENEMIES", default_value_t = 10)]
    pub enemies: usize,

    /// Number of coins to scatter
    #[arg(long, env = "DARK_MAZE_COINS", default_value_t = 10)]
    pub coins: usize,

    /// Seed for a reproducible maze
    #[arg(long, env = "DARK_MAZE_SEED")]
    pub seed: Option<u64>,

    /// Write logs here (the game owns the terminal while running)
    #[arg(long, env = "DARK_MAZE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            enemy_count: self.enemies,
            coin_count: self.coins,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_the_classic_board() {
        let args = Args::parse_from(["dark-maze"]);
        assert_eq!(args.game_config(), GameConfig::default());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "dark-maze", "--width", "7", "--height", "9", "--enemies", "2", "--coins", "1",
            "--seed", "5",
        ]);
        assert_eq!(
            args.game_config(),
            GameConfig {
                width: 7,
                height: 9,
                enemy_count: 2,
                coin_count: 1,
            }
        );
        let a: u64 = args.rng().gen();
        let b: u64 = args.rng().gen();
        assert_eq!(a, b);
    }
}
