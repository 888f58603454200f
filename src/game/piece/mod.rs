use crate::prelude::*;

mod color;
mod rank;

pub use color::{ByColor, Color};
pub use rank::Rank;

pub mod consts
{
    /// The number of pieces each side starts with.
    pub const PER_COLOR: usize = 12;

    /// The number of rows each side fills at the start of a game.
    pub const HOME_ROWS: u8 = 3;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece in a game of draughts.
///
/// Only the rank and square of a piece ever change, and its rank only ever goes from Man to King.
pub struct Piece
{
    pub color:  Color,
    pub rank:   Rank,
    pub square: Square,
}

impl Piece
{
    /// Parses a piece from its diagram symbol.
    pub fn from_symbol(symbol: char, square: Square) -> Result<Option<Piece>>
    {
        let (color, rank) = match symbol
        {
            | '.' => return Ok(None),
            | 'l' => (Color::Light, Rank::Man),
            | 'L' => (Color::Light, Rank::King),
            | 'd' => (Color::Dark, Rank::Man),
            | 'D' => (Color::Dark, Rank::King),
            | _ => return Err(Error::for_parse::<Self>(symbol.into())),
        };
        Ok(Some(Piece { color, rank, square }))
    }

    /// Whether this piece has been promoted.
    pub fn king(&self) -> bool
    {
        self.rank == Rank::King
    }

    /// Creates a new man.
    pub fn man(color: Color, square: Square) -> Piece
    {
        Piece {
            color,
            rank: Rank::Man,
            square,
        }
    }

    /// Creates a new king.
    pub fn king_at(color: Color, square: Square) -> Piece
    {
        Piece {
            color,
            rank: Rank::King,
            square,
        }
    }

    /// Promotes this piece. Kings stay kings.
    pub fn promote(&mut self)
    {
        self.rank = Rank::King;
    }

    /// Whether a man of this piece's color would be promoted on arrival at the given square.
    pub fn promotes_at(&self, square: Square) -> bool
    {
        !self.king() && square.row() == self.color.promotion_row()
    }

    /// The single-character diagram symbol of this piece.
    pub fn symbol(&self) -> char
    {
        match (self.color, self.rank)
        {
            | (Color::Light, Rank::Man) => 'l',
            | (Color::Light, Rank::King) => 'L',
            | (Color::Dark, Rank::Man) => 'd',
            | (Color::Dark, Rank::King) => 'D',
        }
    }
}

impl std::fmt::Display for Piece
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}{} {}", self.color.short(), self.rank, self.square)
    }
}
