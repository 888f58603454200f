use crate::prelude::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ {}, turn: {:?}, ply: {}, captured: {:?} }}",
            PositionString::from(self),
            self.turn,
            self.ply(),
            self.captured
        )
    }

    /// Pretty print, as a diagram with row and column labels.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "  ")?;
        for col in 0..square::consts::SIZE
        {
            write!(f, " {col}")?;
        }

        for (row, cells) in self.cells.chunks(square::consts::SIZE as usize).enumerate()
        {
            write!(f, "\n{row} |")?;
            for cell in cells
            {
                let symbol = cell.map(|piece| piece.symbol()).unwrap_or('.');
                write!(f, " {symbol}")?;
            }
        }

        write!(
            f,
            "\n{} to move; Light {} / Dark {} pieces",
            self.turn,
            self.piece_count(Color::Light),
            self.piece_count(Color::Dark)
        )
    }
}
