use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    static ref POSITION: Regex = Regex::new(r"^(?<rows>[.lLdD]{8}(/[.lLdD]{8}){7});(?<turn>Light|Dark)$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a syntactically-valid position string.
///
/// A position lists the eight rows from row 0 down, separated by `/`, with `.` for an empty cell, `l`/`L` for a Light
/// man/king and `d`/`D` for a Dark man/king, followed by `;` and the color to move. The starting position is
///
/// `.d.d.d.d/d.d.d.d./.d.d.d.d/......../......../l.l.l.l./.l.l.l.l/l.l.l.l.;Light`
pub struct PositionString(String);

impl AsRef<str> for PositionString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for PositionString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PositionString
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        if !POSITION.is_match(s.trim())
        {
            let err = Error::new(Kind::ParseError, "Expected eight rows of eight cells and a color to move.".into());
            return Err(err.chain_parse::<Self>(s.into()));
        }

        Ok(PositionString(s.trim().to_owned()))
    }
}

impl From<&Board> for PositionString
{
    fn from(board: &Board) -> Self
    {
        let rows = (0..square::consts::SIZE)
            .map(|row| {
                (0..square::consts::SIZE)
                    .filter_map(|col| Square::new(row, col).ok())
                    .map(|sq| board.piece_at(sq).map(|piece| piece.symbol()).unwrap_or('.'))
                    .collect::<String>()
            })
            .join("/");

        PositionString(format!("{};{}", rows, board.turn()))
    }
}

impl TryFrom<PositionString> for Board
{
    type Error = Error;
    fn try_from(value: PositionString) -> std::result::Result<Self, Self::Error>
    {
        let base = Error::for_parse::<Board>(value.0.clone());

        let Some(caps) = POSITION.captures(&value.0)
        else
        {
            return Err(base);
        };

        let turn = caps["turn"].parse::<Color>().map_err(|err| err.chain(base.clone()))?;
        let mut board = Board::empty(turn);

        for (row, cells) in caps["rows"].split('/').enumerate()
        {
            for (col, symbol) in cells.chars().enumerate()
            {
                let square = Square::new(row as u8, col as u8).map_err(|err| err.chain(base.clone()))?;
                if let Some(piece) = Piece::from_symbol(symbol, square).map_err(|err| err.chain(base.clone()))?
                {
                    board.place(piece)?;
                }
            }
        }

        Ok(board)
    }
}

impl FromStr for Board
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        let position = s.parse::<PositionString>()?;
        Board::try_from(position)
    }
}
