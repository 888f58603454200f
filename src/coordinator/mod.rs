use crate::prelude::*;

mod summary;
mod tournament;

pub use summary::MatchSummary;
pub use tournament::{Standing, Tournament};

/// The move ceiling applied when none is given.
pub const DEFAULT_MOVE_LIMIT: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a match ended.
pub enum Outcome
{
    Winner(Color),
    Draw,
}

impl Outcome
{
    /// The winner, unless the match was drawn.
    pub fn winner(&self) -> Option<Color>
    {
        match self
        {
            | Self::Winner(color) => Some(*color),
            | Self::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::Winner(color) => write!(f, "{} wins", color),
            | Self::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The state of a match.
pub enum MatchState
{
    InProgress,
    Finished(Outcome),
}

/// Plays a game between two strategies on an authoritative board.
///
/// A match ends when the board reports a winner, when the move ceiling is reached (the sign of the evaluation picks the
/// winner, zero being a draw), or when a strategy fails to produce a legal move, which forfeits the game for its color.
pub struct MatchCoordinator
{
    board:      Board,
    move_limit: usize,
    players:    ByColor<Box<dyn Strategy>>,
    state:      MatchState,
    summary:    MatchSummary,
}

impl MatchCoordinator
{
    /// Creates a match from the standard starting position.
    pub fn new(light: Box<dyn Strategy>, dark: Box<dyn Strategy>, move_limit: usize) -> Self
    {
        Self::from_board(Board::new(), light, dark, move_limit)
    }

    /// Creates a match from an arbitrary position.
    pub fn from_board(board: Board, light: Box<dyn Strategy>, dark: Box<dyn Strategy>, move_limit: usize) -> Self
    {
        let summary = MatchSummary {
            players: ByColor {
                light: light.name(),
                dark:  dark.name(),
            },
            ..Default::default()
        };

        MatchCoordinator {
            board,
            move_limit,
            players: ByColor { light, dark },
            state: MatchState::InProgress,
            summary,
        }
    }

    /// The authoritative board.
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// Plays the match to its end.
    pub fn run(&mut self) -> Outcome
    {
        log::info!(
            "starting match: {} (Light) vs {} (Dark), ceiling of {} moves",
            self.players.light.name(),
            self.players.dark.name(),
            self.move_limit
        );

        loop
        {
            if let MatchState::Finished(outcome) = self.step()
            {
                return outcome;
            }
        }
    }

    /// The state of the match.
    pub fn state(&self) -> MatchState
    {
        self.state
    }

    /// Plays a single turn, unless the match is already over.
    pub fn step(&mut self) -> MatchState
    {
        if self.settle() == MatchState::InProgress
        {
            self.play_turn();
            self.settle();
        }

        self.state
    }

    /// A record of the match so far.
    pub fn summary(&self) -> MatchSummary
    {
        let mut summary = self.summary.clone();
        summary.outcome = match self.state
        {
            | MatchState::InProgress => None,
            | MatchState::Finished(outcome) => Some(outcome),
        };
        summary.pieces = ByColor::new(|color| self.board.piece_count(color));
        summary
    }
}

/// Private implementation for turn handling.
impl MatchCoordinator
{
    /// Ends the match with the given outcome.
    fn finish(&mut self, outcome: Outcome)
    {
        self.event(format!("game over: {}", outcome));
        log::info!("match finished after {} moves: {}", self.summary.turns, outcome);
        self.state = MatchState::Finished(outcome);
    }

    /// Records an event in the match log.
    fn event(&mut self, event: String)
    {
        self.summary.events.push(format!("move {}: {}", self.summary.turns, event));
    }

    /// Asks the side on turn for a move and plays it. Any failure forfeits the game.
    fn play_turn(&mut self)
    {
        let color = self.board.turn();

        let played = match self.players[color].choose_move(&self.board, color)
        {
            | Ok(mv) => self.board.execute_move(&mv).map(|_| mv),
            | Err(err) => Err(err),
        };

        // A forfeited turn still cost its side time and nodes.
        self.summary.statistics[color].push(self.players[color].statistics().clone());

        let mv = match played
        {
            | Ok(mv) => mv,
            | Err(err) =>
            {
                if err.fatal()
                {
                    log::error!("{} hit a fatal error while moving:\n{}", color, err);
                }
                else
                {
                    log::warn!("{} forfeits after failing to move:\n{}", color, err);
                }
                self.event(format!("{} failed to move: {}", color, err));
                self.finish(Outcome::Winner(color.flip()));
                return;
            }
        };

        let evaluation = self.board.evaluate();
        log::debug!("{} played {}, evaluation now {:.2}", color, mv, evaluation);

        self.summary.evaluations.push(evaluation);
        self.summary.moves.push(format!("{}: {}", color, mv));
        self.summary.turns += 1;
        self.event(format!("{} played {}", color, mv));
    }

    /// Checks whether the match has ended, on the board or by the move ceiling.
    fn settle(&mut self) -> MatchState
    {
        if self.state != MatchState::InProgress
        {
            return self.state;
        }

        if let (true, winner) = self.board.game_over()
        {
            let outcome = winner.map_or(Outcome::Draw, Outcome::Winner);
            self.finish(outcome);
        }
        else if self.summary.turns >= self.move_limit
        {
            let evaluation = self.board.evaluate();
            let outcome = if evaluation > 0.0
            {
                Outcome::Winner(Color::Light)
            }
            else if evaluation < 0.0
            {
                Outcome::Winner(Color::Dark)
            }
            else
            {
                Outcome::Draw
            };

            log::warn!("reached the ceiling of {} moves; adjudicating {:.2} as {}", self.move_limit, evaluation, outcome);
            self.event(format!("move ceiling of {} reached", self.move_limit));
            self.finish(outcome);
        }

        self.state
    }
}
