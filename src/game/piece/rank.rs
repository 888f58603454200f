#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The ranks a piece can hold.
pub enum Rank
{
    Man = 0,
    King = 1,
}

impl Rank
{
    /// The material value of a piece of this rank.
    pub fn value(&self) -> f64
    {
        match self
        {
            | Self::Man => 3.0,
            | Self::King => 10.0,
        }
    }
}

impl std::fmt::Display for Rank
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Man => "M",
            | Self::King => "K",
        };
        write!(f, "{name}")
    }
}
