use candy_core::Tile;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;

/// Supplies the tiles used to fill holes during refill.
///
/// The column of the hole being filled is passed in so that sources can
/// vary their output per column. Implementations must never return
/// [`Tile::Hole`].
///
/// Any `FnMut(i32) -> Tile` closure is a source, which keeps scripted
/// refills in tests short:
///
/// ```
/// use candy_core::{GameField, Tile};
/// use candy_mechanics::GameMechanics;
///
/// let mut field = GameField::new(2, 1);
/// let mut mechanics = GameMechanics::new(&mut field);
/// let moves = mechanics.new_tile_moves(&mut |_column: i32| Tile::C);
/// mechanics.insert(&moves);
/// assert_eq!(field.to_string(), "[C, C]");
/// ```
pub trait TileSource {
    /// Returns the tile for a hole in `column`.
    fn next_tile(&mut self, column: i32) -> Tile;
}

impl<F> TileSource for F
where
    F: FnMut(i32) -> Tile,
{
    fn next_tile(&mut self, column: i32) -> Tile {
        self(column)
    }
}

/// A [`TileSource`] drawing uniformly from the six colors.
///
/// The generator defaults to [`Pcg64`] so that a seed fully determines the
/// sequence of refills.
#[derive(Debug, Clone)]
pub struct RandomTileSource<R = Pcg64> {
    rng: R,
}

impl<R> RandomTileSource<R> {
    /// Creates a source drawing from `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the source and returns its generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomTileSource<Pcg64> {
    /// Creates a reproducible source from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }

    /// Creates a source seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }
}

impl Default for RandomTileSource<Pcg64> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R> TileSource for RandomTileSource<R>
where
    R: Rng,
{
    fn next_tile(&mut self, _column: i32) -> Tile {
        Tile::random(&mut self.rng)
    }
}
