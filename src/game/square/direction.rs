use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A diagonal direction on the board.
///
/// North points towards row 0.
pub enum Direction
{
    Northwest,
    Northeast,
    Southwest,
    Southeast,
}

impl Direction
{
    #[inline]
    /// Returns all four diagonals.
    pub const fn all() -> [Direction; 4]
    {
        [Self::Northwest, Self::Northeast, Self::Southwest, Self::Southeast]
    }

    /// The (row, column) step of this direction.
    pub const fn delta(&self) -> (i8, i8)
    {
        match self
        {
            | Self::Northwest => (-1, -1),
            | Self::Northeast => (-1, 1),
            | Self::Southwest => (1, -1),
            | Self::Southeast => (1, 1),
        }
    }

    /// The two diagonals a man of the given color may step along without capturing.
    pub const fn forward(color: Color) -> [Direction; 2]
    {
        match color
        {
            | Color::Light => [Self::Northwest, Self::Northeast],
            | Color::Dark => [Self::Southwest, Self::Southeast],
        }
    }

    /// Returns the name of this direction.
    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Northwest => "northwest",
            | Self::Northeast => "northeast",
            | Self::Southwest => "southwest",
            | Self::Southeast => "southeast",
        }
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.long())
    }
}
