use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

mod direction;

pub use direction::Direction;

/// Values that bound the size of a draughts board.
pub mod consts
{
    /// The number of rows (and columns) on the board.
    pub const SIZE: u8 = 8;

    /// The number of cells on the board.
    pub const CELLS: usize = SIZE as usize * SIZE as usize;
}

use consts::*;

lazy_static! {
    static ref SQUARE: Regex = Regex::new(r"^\(?\s*(?<row>[0-9])\s*,\s*(?<col>[0-9])\s*\)?$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A cell on the board.
///
/// Row 0 is Dark's home edge and Light's promotion edge; row 7 is the other way around.
pub struct Square
{
    row: u8,
    col: u8,
}

impl Square
{
    /// Returns every square on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Square>
    {
        itertools::iproduct!(0..SIZE, 0..SIZE).map(|(row, col)| Square { row, col })
    }

    /// Returns the column of this square.
    pub fn col(&self) -> u8
    {
        self.col
    }

    /// Whether this is a playable (dark) square, which is the case when `row + col` is odd.
    pub fn dark(&self) -> bool
    {
        (self.row + self.col) % 2 == 1
    }

    /// The row-major index of this square.
    pub fn index(&self) -> usize
    {
        self.row as usize * SIZE as usize + self.col as usize
    }

    /// Creates a square, if it is on the board.
    pub fn new(row: u8, col: u8) -> Result<Square>
    {
        if row >= SIZE || col >= SIZE
        {
            let err_msg = format!("({}, {}) is off the {}x{} board.", row, col, SIZE, SIZE);
            return Err(Error::new(Kind::InvalidSquare, err_msg));
        }

        Ok(Square { row, col })
    }

    /// Steps once in the given direction, if that stays on the board.
    pub fn offset(&self, direction: Direction) -> Option<Square>
    {
        let (dr, dc) = direction.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;

        if (0..SIZE as i8).contains(&row) && (0..SIZE as i8).contains(&col)
        {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        }
        else
        {
            None
        }
    }

    /// Returns the row of this square.
    pub fn row(&self) -> u8
    {
        self.row
    }

    /// Walks from this square (exclusive) to the board edge along a diagonal.
    pub fn ray(&self, direction: Direction) -> impl Iterator<Item = Square>
    {
        std::iter::successors(self.offset(direction), move |sq| sq.offset(direction))
    }
}

impl std::fmt::Display for Square
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Square
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some(caps) = SQUARE.captures(s.trim())
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let row = caps["row"].parse::<u8>().map_err(|_| Error::for_parse::<u8>(caps["row"].into()));
        let col = caps["col"].parse::<u8>().map_err(|_| Error::for_parse::<u8>(caps["col"].into()));

        match (row, col)
        {
            | (Ok(row), Ok(col)) => Square::new(row, col).map_err(|err| err.chain_parse::<Self>(s.into())),
            | (Err(err), _) | (_, Err(err)) => Err(err.chain_parse::<Self>(s.into())),
        }
    }
}
