use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The sides in a game of draughts.
///
/// Light moves first, advances towards row 0, and is the maximizing side of every evaluation.
pub enum Color
{
    Light = 0,
    Dark = 1,
}

impl Color
{
    /// Returns both colors in turn order.
    pub const fn all() -> [Color; 2]
    {
        [Self::Light, Self::Dark]
    }

    /// Gets the other color.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::Light => Self::Dark,
            | Self::Dark => Self::Light,
        }
    }

    /// Whether this color maximizes the evaluation.
    pub fn maximizing(&self) -> bool
    {
        *self == Self::Light
    }

    /// The row a man of this color promotes on.
    pub fn promotion_row(&self) -> u8
    {
        match self
        {
            | Self::Light => 0,
            | Self::Dark => square::consts::SIZE - 1,
        }
    }

    // Returns the short name for this color, for use in position notation.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::Light => "l",
            | Self::Dark => "d",
        }
    }

    /// +1 for Light, -1 for Dark.
    pub fn sign(&self) -> f64
    {
        match self
        {
            | Self::Light => 1.0,
            | Self::Dark => -1.0,
        }
    }
}

impl std::fmt::Display for Color
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Light => "Light",
            | Self::Dark => "Dark",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Light" | "l" => Ok(Self::Light),
            | "Dark" | "d" => Ok(Self::Dark),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// A pair of values, one per color.
pub struct ByColor<T>
{
    pub light: T,
    pub dark:  T,
}

impl<T> ByColor<T>
{
    /// Builds a pair by calling the given function for each color.
    pub fn new(mut f: impl FnMut(Color) -> T) -> Self
    {
        ByColor {
            light: f(Color::Light),
            dark:  f(Color::Dark),
        }
    }
}

impl<T> std::ops::Index<Color> for ByColor<T>
{
    type Output = T;
    fn index(&self, color: Color) -> &Self::Output
    {
        match color
        {
            | Color::Light => &self.light,
            | Color::Dark => &self.dark,
        }
    }
}

impl<T> std::ops::IndexMut<Color> for ByColor<T>
{
    fn index_mut(&mut self, color: Color) -> &mut Self::Output
    {
        match color
        {
            | Color::Light => &mut self.light,
            | Color::Dark => &mut self.dark,
        }
    }
}
