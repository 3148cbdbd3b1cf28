//! The mutable board store.
//!
//! [`GameField`] holds one [`Tile`] per cell of a `width × height` board in
//! row-major order. Reads outside the board are defined and return
//! [`Tile::Hole`]; run scans rely on this to stop at the board edges without
//! their own bounds checks.
//!
//! # Text form
//!
//! Fields parse from and render to one bracketed line per row, top row first:
//!
//! ```
//! use candy_core::{GameField, Position, Tile};
//!
//! let field: GameField = "
//!     [H, H, H, H]
//!     [H, A, B, H]
//!     [H, H, H, H]
//! "
//! .parse()?;
//!
//! assert_eq!(field.width(), 4);
//! assert_eq!(field.height(), 3);
//! assert_eq!(field[Position::new(1, 1)], Tile::A);
//! assert_eq!(field.to_string(), "[H, H, H, H]\n[H, A, B, H]\n[H, H, H, H]");
//! # Ok::<(), candy_core::FieldParseError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use rand::Rng;

use crate::{Position, Tile, TileCell};

/// Errors returned when building a field from raw dimensions and tiles.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FieldError {
    /// A dimension is zero.
    #[display("field dimensions {width}x{height} leave no cells")]
    ZeroSized {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A dimension does not fit the coordinate type of [`Position`].
    #[display("field dimensions {width}x{height} are too large")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The number of tiles does not equal `width * height`.
    #[display("expected {expected} tiles, found {found}")]
    TileCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Number of tiles supplied.
        found: usize,
    },
}

/// Errors returned when parsing the text form of a field.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FieldParseError {
    /// The text contains no rows.
    #[display("field text contains no rows")]
    Empty,
    /// A row is not wrapped in `[` and `]`.
    #[display("row {row} is not enclosed in brackets")]
    MissingBrackets {
        /// Zero-based row index.
        row: usize,
    },
    /// A row has a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A cell symbol does not name a tile.
    #[display("unknown tile `{symbol}` at column {column}, row {row}")]
    UnknownTile {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The rejected symbol.
        symbol: String,
    },
    /// The parsed dimensions were rejected.
    #[display("{_0}")]
    Invalid(#[error(source)] FieldError),
}

/// A `width × height` board of tiles.
///
/// # Out-of-range access
///
/// - Reading ([`GameField::get`], [`Index`]) a position outside the board
///   returns [`Tile::Hole`].
/// - Writing ([`GameField::set`], [`IndexMut`]) a position outside the board
///   panics. Callers only write positions obtained from enumerating the field.
///
/// Cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameField {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl GameField {
    /// Creates a field where every cell is [`Tile::Hole`].
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero or does not fit in an `i32`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        if let Err(err) = check_dimensions(width, height) {
            panic!("{err}");
        }
        Self {
            width,
            height,
            tiles: vec![Tile::Hole; width * height],
        }
    }

    /// Creates a field from row-major tiles.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ZeroSized`] if a dimension is zero,
    /// [`FieldError::TooLarge`] if a dimension does not fit in an `i32` and
    /// [`FieldError::TileCountMismatch`] if `tiles` does not hold exactly
    /// `width * height` values.
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Result<Self, FieldError> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if tiles.len() != expected {
            return Err(FieldError::TileCountMismatch {
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Creates a field filled with random candy colors.
    ///
    /// The result may already contain runs of three; resolving them is the
    /// caller's decision.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero or does not fit in an `i32`.
    #[must_use]
    pub fn random<R>(width: usize, height: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut field = Self::new(width, height);
        for tile in &mut field.tiles {
            *tile = Tile::random(rng);
        }
        field
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Returns the tile at `pos`, or [`Tile::Hole`] if `pos` is off the board.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Tile {
        self[pos]
    }

    /// Stores `tile` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn set(&mut self, pos: Position, tile: Tile) {
        self[pos] = tile;
    }

    /// Returns a snapshot of the tile at `pos`.
    #[must_use]
    #[inline]
    pub fn tile_cell(&self, pos: Position) -> TileCell {
        TileCell::new(self[pos], pos)
    }

    /// Returns the cells of one column, row 0 first.
    ///
    /// Returns an empty vector if `column` is off the board.
    #[must_use]
    pub fn column_cells(&self, column: i32) -> Vec<TileCell> {
        if !self.contains(Position::new(column, 0)) {
            return Vec::new();
        }
        self.rows()
            .map(|row| self.tile_cell(Position::new(column, row)))
            .collect()
    }

    /// Returns the column indices `0..width`.
    pub fn columns(&self) -> impl Iterator<Item = i32> + use<> {
        0..to_coordinate(self.width)
    }

    /// Returns the row indices `0..height`, top row first.
    pub fn rows(&self) -> impl Iterator<Item = i32> + use<> {
        0..to_coordinate(self.height)
    }

    /// Returns every position of the board in row-major order.
    ///
    /// The iterator does not borrow the field, so callers may mutate the field
    /// while enumerating.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = to_coordinate(self.width);
        self.rows()
            .flat_map(move |row| (0..width).map(move |column| Position::new(column, row)))
    }

    /// Returns a snapshot of every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = TileCell> + '_ {
        self.positions().map(|pos| self.tile_cell(pos))
    }

    /// Returns the number of cells holding [`Tile::Hole`].
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_hole()).count()
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        let column = usize::try_from(pos.column()).ok()?;
        let row = usize::try_from(pos.row()).ok()?;
        (column < self.width && row < self.height).then_some(row * self.width + column)
    }
}

impl Index<Position> for GameField {
    type Output = Tile;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        self.index_of(pos).map_or(&Tile::Hole, |index| &self.tiles[index])
    }
}

impl IndexMut<Position> for GameField {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let Some(index) = self.index_of(pos) else {
            panic!(
                "position {pos} is outside the {}x{} field",
                self.width, self.height
            );
        };
        &mut self.tiles[index]
    }
}

impl Display for GameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, tiles) in self.tiles.chunks(self.width).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (column, tile) in tiles.iter().enumerate() {
                if column > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{tile}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl FromStr for GameField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut height = 0;
        let mut tiles = Vec::new();

        let lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
        for (row, line) in lines.enumerate() {
            let inner = line
                .strip_prefix('[')
                .and_then(|line| line.strip_suffix(']'))
                .ok_or(FieldParseError::MissingBrackets { row })?;

            let start = tiles.len();
            for (column, symbol) in inner.split(',').map(str::trim).enumerate() {
                let mut chars = symbol.chars();
                let tile = match (chars.next(), chars.next()) {
                    (Some(c), None) => Tile::from_symbol(c),
                    _ => None,
                };
                let tile = tile.ok_or_else(|| FieldParseError::UnknownTile {
                    row,
                    column,
                    symbol: symbol.to_owned(),
                })?;
                tiles.push(tile);
            }

            let found = tiles.len() - start;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(FieldParseError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or(FieldParseError::Empty)?;
        Self::from_tiles(width, height, tiles).map_err(FieldParseError::Invalid)
    }
}

// A zero-sized field would render as empty text, which does not parse back.
fn check_dimensions(width: usize, height: usize) -> Result<(), FieldError> {
    if width == 0 || height == 0 {
        return Err(FieldError::ZeroSized { width, height });
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(FieldError::TooLarge { width, height });
    }
    Ok(())
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn to_coordinate(value: usize) -> i32 {
    // dimensions are checked against `i32` on construction
    value as i32
}
