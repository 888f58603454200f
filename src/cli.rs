use std::time::Duration;

use clap::{Parser, ValueEnum};
use draughtsman::prelude::*;

use crate::console::Console;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
/// The kinds of player that can take a side.
pub enum Player
{
    Minimax,
    Alphabeta,
    Expectimax,
    /// Iterative deepening over `--deepen-with`, within `--budget-ms`.
    Iterative,
    Random,
    /// Moves typed at the terminal.
    Human,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
/// The searches iterative deepening can repeat.
pub enum Deepening
{
    Minimax,
    Alphabeta,
    Expectimax,
}

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Options
{
    #[arg(long, value_enum, default_value_t = Player::Alphabeta)]
    /// strategy playing Light, which moves first
    pub light: Player,

    #[arg(long, value_enum, default_value_t = Player::Random)]
    /// strategy playing Dark
    pub dark: Player,

    #[arg(short, long, default_value_t = 4)]
    /// search depth, or the maximum depth when deepening iteratively
    pub depth: u8,

    #[arg(short = 'p', long, default_value_t = 0.1)]
    /// chance an expectimax player assumes its opponent errs
    pub error_probability: f64,

    #[arg(short, long, default_value_t = 1000)]
    /// per-move time budget in milliseconds for iterative deepening
    pub budget_ms: u64,

    #[arg(long, value_enum, default_value_t = Deepening::Alphabeta)]
    /// search repeated by iterative deepening
    pub deepen_with: Deepening,

    #[arg(short, long, default_value_t = DEFAULT_MOVE_LIMIT)]
    /// number of moves after which the game is adjudicated
    pub move_limit: usize,

    #[arg(short, long)]
    /// seed for random players, for reproducible games
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = 1)]
    /// number of games, alternating colors when more than one
    pub games: usize,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,
}

impl Options
{
    /// Builds a fresh strategy for the given player kind.
    ///
    /// The salt varies the seed of random players between games and sides.
    pub fn strategy(&self, player: Player, salt: u64) -> Result<Box<dyn Strategy>>
    {
        let strategy: Box<dyn Strategy> = match player
        {
            | Player::Minimax => Box::new(Minimax::new(self.depth)?),
            | Player::Alphabeta => Box::new(AlphaBeta::new(self.depth)?),
            | Player::Expectimax => Box::new(Expectimax::new(self.depth, self.error_probability)?),
            | Player::Iterative =>
            {
                let method = match self.deepen_with
                {
                    | Deepening::Minimax => Method::Minimax,
                    | Deepening::Alphabeta => Method::AlphaBeta,
                    | Deepening::Expectimax => Method::Expectimax {
                        error_probability: self.error_probability,
                    },
                };
                let budget = Duration::from_millis(self.budget_ms);
                Box::new(IterativeDeepening::new(method, self.depth, budget)?)
            }
            | Player::Random => match self.seed
            {
                | Some(seed) => Box::new(Random::seeded(seed.wrapping_add(salt))),
                | None => Box::new(Random::from_entropy()),
            },
            | Player::Human => Box::new(Human::new(Console::default())),
        };

        Ok(strategy)
    }
}
