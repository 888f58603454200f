use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
///
/// The board itself never declares a draw; draws only come from a match's move ceiling.
pub enum GameState
{
    InProgress,
    LightWins,
    DarkWins,
}

impl GameState
{
    /// The state in which the given color has won.
    pub fn won_by(color: Color) -> Self
    {
        match color
        {
            | Color::Light => Self::LightWins,
            | Color::Dark => Self::DarkWins,
        }
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Color>
    {
        match self
        {
            | Self::InProgress => None,
            | Self::LightWins => Some(Color::Light),
            | Self::DarkWins => Some(Color::Dark),
        }
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::InProgress => "InProgress",
            | Self::LightWins => "LightWins",
            | Self::DarkWins => "DarkWins",
        };
        write!(f, "{repr}")
    }
}

impl Board
{
    /// Reports whether the game is over and, if so, who won.
    pub fn game_over(&self) -> (bool, Option<Color>)
    {
        let winner = self.state().winner();
        (winner.is_some(), winner)
    }

    /// Gets the state of the board.
    ///
    /// A color loses when it has no pieces left, or when it is on turn and has no legal move.
    pub fn state(&self) -> GameState
    {
        let mobility = self.legal_moves(self.turn()).len();
        self.state_with(mobility)
    }

    /// Gets the state of the board given how many legal moves the side on turn has.
    pub(crate) fn state_with(&self, mobility: usize) -> GameState
    {
        if let Some(empty) = Color::all().into_iter().find(|color| self.piece_count(*color) == 0)
        {
            return GameState::won_by(empty.flip());
        }

        if mobility == 0
        {
            GameState::won_by(self.turn().flip())
        }
        else
        {
            GameState::InProgress
        }
    }
}
