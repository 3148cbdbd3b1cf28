//! Tile (candy color) representation.

use std::fmt::{self, Display};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform, Uniform},
};

/// A single board value: one of the candy colors or the empty [`Tile::Hole`].
///
/// The set is closed. Colors compare equal only to themselves, and
/// [`Tile::Hole`] never takes part in a run.
///
/// # Examples
///
/// ```
/// use candy_core::Tile;
///
/// assert!(Tile::A.is_tile());
/// assert!(Tile::Hole.is_hole());
/// assert_eq!(Tile::from_symbol('C'), Some(Tile::C));
/// assert_eq!(Tile::B.to_string(), "B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Tile {
    /// Candy color A.
    A,
    /// Candy color B.
    B,
    /// Candy color C.
    C,
    /// Candy color D.
    D,
    /// Candy color E.
    E,
    /// Candy color F.
    F,
    /// No tile present in the cell.
    Hole,
}

impl Tile {
    /// All candy colors, excluding [`Tile::Hole`].
    pub const COLORS: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// All tile values including [`Tile::Hole`].
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::Hole,
    ];

    /// Returns `true` if this is a candy color.
    #[must_use]
    #[inline]
    pub const fn is_tile(self) -> bool {
        !matches!(self, Self::Hole)
    }

    /// Returns `true` if this is [`Tile::Hole`].
    #[must_use]
    #[inline]
    pub const fn is_not_tile(self) -> bool {
        !self.is_tile()
    }

    /// Returns the one-character symbol used by the text form of a field.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::Hole => 'H',
        }
    }

    /// Parses a tile from its symbol.
    ///
    /// Returns `None` for unknown symbols.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'H' => Some(Self::Hole),
            _ => None,
        }
    }

    /// Returns a uniformly chosen candy color. Never returns [`Tile::Hole`].
    ///
    /// # Examples
    ///
    /// ```
    /// use candy_core::Tile;
    ///
    /// let tile = Tile::random(&mut rand::rng());
    /// assert!(tile.is_tile());
    /// ```
    #[must_use]
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        StandardUniform.sample(rng)
    }
}

impl Distribution<Tile> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let colors = Uniform::new(0, Tile::COLORS.len()).expect("color set is non-empty");
        Tile::COLORS[colors.sample(rng)]
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a character does not name a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown tile symbol `{symbol}`")]
pub struct TileParseError {
    symbol: char,
}

impl TileParseError {
    /// Returns the rejected symbol.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl TryFrom<char> for Tile {
    type Error = TileParseError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(TileParseError { symbol })
    }
}
