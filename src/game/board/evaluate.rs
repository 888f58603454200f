use crate::prelude::*;

pub mod consts
{
    /// The score of a position won by Light. Dark wins score its negation.
    pub const WIN: f64 = f64::INFINITY;

    /// The bonus for each row a piece has advanced away from its home edge.
    pub const K_ADVANCEMENT: f64 = 0.1;

    /// The bonus for each legal move more than the opponent has.
    pub const K_MOBILITY: f64 = 0.1;
}

use consts::*;

impl Board
{
    /// Returns a static score for the position from Light's perspective.
    ///
    /// Won positions score +/- infinity. Otherwise, the score sums material (men 3, kings 10), a bonus for advancement
    /// and a bonus for mobility, each signed by color. This never mutates the board and involves no randomness.
    pub fn evaluate(&self) -> f64
    {
        let mobility = ByColor::new(|color| self.legal_moves(color).len());

        if let Some(winner) = self.state_with(mobility[self.turn()]).winner()
        {
            return winner.sign() * WIN;
        }

        let material: f64 = self.occupied().map(|piece| piece.color.sign() * piece_value(&piece)).sum();
        let mobility = K_MOBILITY * (mobility.light as f64 - mobility.dark as f64);

        material + mobility
    }
}

/// The material and positional worth of a single piece, unsigned.
fn piece_value(piece: &Piece) -> f64
{
    let advanced = match piece.color
    {
        | Color::Light => square::consts::SIZE - 1 - piece.square.row(),
        | Color::Dark => piece.square.row(),
    };

    piece.rank.value() + K_ADVANCEMENT * advanced as f64
}
