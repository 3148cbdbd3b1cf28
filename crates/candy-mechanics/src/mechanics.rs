use std::{
    fmt::{self, Display},
    iter,
};

use candy_core::{GameField, Position, Tile, TileCell};

/// Minimum length of a run that is removed from the board.
pub const MIN_RUN_LENGTH: usize = 3;

/// Grid algorithms operating on a borrowed [`GameField`].
///
/// `GameMechanics` keeps no state of its own. Every method either reads the
/// field or mutates it in place and returns a description of what happened
/// (removed cells, gravity moves, refill insertions). Nothing here knows about
/// presentation or timing.
///
/// # Examples
///
/// ```
/// use candy_core::{GameField, Position};
/// use candy_mechanics::GameMechanics;
///
/// let mut field: GameField = "
///     [A, B, A, A]
///     [C, D, E, F]
/// "
/// .parse()?;
/// let mut mechanics = GameMechanics::new(&mut field);
///
/// let (a, b) = (Position::new(0, 0), Position::new(1, 0));
/// assert!(mechanics.is_swap_allowed(a, b));
///
/// mechanics.swap_tiles(a, b);
/// let removed = mechanics.connected_tiles_of_swap(a, b);
/// assert_eq!(removed.len(), 3);
/// # Ok::<(), candy_core::FieldParseError>(())
/// ```
#[derive(Debug)]
pub struct GameMechanics<'a> {
    pub(crate) field: &'a mut GameField,
}

impl<'a> GameMechanics<'a> {
    /// Creates mechanics operating on `field`.
    #[must_use]
    pub fn new(field: &'a mut GameField) -> Self {
        Self { field }
    }

    /// Returns the borrowed field.
    #[must_use]
    pub fn field(&self) -> &GameField {
        self.field
    }

    /// Exchanges the tiles stored at `a` and `b` without any validation.
    ///
    /// # Panics
    ///
    /// Panics if either position is off the board.
    pub fn swap_tiles(&mut self, a: Position, b: Position) {
        let tile_a = self.field[a];
        let tile_b = self.field[b];
        self.field[a] = tile_b;
        self.field[b] = tile_a;
    }

    /// Returns `true` if swapping `a` and `b` creates a run of three at either
    /// endpoint.
    ///
    /// Both endpoints must hold a tile; swaps touching a [`Tile::Hole`] are
    /// always rejected. The check runs on a scratch copy, so the borrowed field
    /// is never modified.
    #[must_use]
    pub fn is_swap_allowed(&self, a: Position, b: Position) -> bool {
        if self.field[a].is_not_tile() || self.field[b].is_not_tile() {
            return false;
        }
        let mut scratch = self.field.clone();
        swap_forms_run(&mut scratch, a, b)
    }

    /// Lists every legal swap between horizontally or vertically adjacent
    /// cells, in row-major order of the first endpoint.
    ///
    /// Each pair is reported once, with the second endpoint to the right of or
    /// below the first.
    #[must_use]
    pub fn possible_swaps(&self) -> Vec<(Position, Position)> {
        let mut scratch = self.field.clone();
        self.adjacent_pairs()
            .filter(|&(a, b)| swap_forms_run(&mut scratch, a, b))
            .collect()
    }

    /// Returns `true` if at least one adjacent swap is legal.
    #[must_use]
    pub fn has_possible_swap(&self) -> bool {
        let mut scratch = self.field.clone();
        self.adjacent_pairs().any(|(a, b)| swap_forms_run(&mut scratch, a, b))
    }

    fn adjacent_pairs(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.field
            .positions()
            .flat_map(|pos| [(pos, pos.right()), (pos, pos.bottom())])
            .filter(|&(_, b)| self.field.contains(b))
    }

    /// Returns `true` if `pos` anchors a qualifying run in either direction.
    #[must_use]
    pub fn is_in_row_with_three(&self, pos: Position) -> bool {
        self.is_horizontal_connected(pos) || self.is_vertical_connected(pos)
    }

    /// Returns `true` if `pos` anchors a horizontal run of at least three.
    #[must_use]
    pub fn is_horizontal_connected(&self, pos: Position) -> bool {
        !self.horizontal_connected_or_empty(pos).is_empty()
    }

    /// Returns `true` if `pos` anchors a vertical run of at least three.
    #[must_use]
    pub fn is_vertical_connected(&self, pos: Position) -> bool {
        !self.vertical_connected_or_empty(pos).is_empty()
    }

    /// Returns the qualifying vertical run followed by the qualifying
    /// horizontal run through `pos`.
    ///
    /// The two runs are concatenated, not merged: when both qualify the anchor
    /// cell appears twice, once per direction.
    #[must_use]
    pub fn connected_tiles(&self, pos: Position) -> Vec<TileCell> {
        let mut cells = self.vertical_connected_or_empty(pos);
        cells.extend(self.horizontal_connected_or_empty(pos));
        cells
    }

    /// Returns [`connected_tiles`](Self::connected_tiles) of `a` followed by
    /// that of `b`.
    #[must_use]
    pub fn connected_tiles_of_swap(&self, a: Position, b: Position) -> Vec<TileCell> {
        let mut cells = self.connected_tiles(a);
        cells.extend(self.connected_tiles(b));
        cells
    }

    /// Returns the horizontal run through `pos` if it is at least
    /// [`MIN_RUN_LENGTH`] long, or an empty vector otherwise.
    #[must_use]
    pub fn horizontal_connected_or_empty(&self, pos: Position) -> Vec<TileCell> {
        qualifying(self.horizontal_surroundings(pos))
    }

    /// Returns the vertical run through `pos` if it is at least
    /// [`MIN_RUN_LENGTH`] long, or an empty vector otherwise.
    #[must_use]
    pub fn vertical_connected_or_empty(&self, pos: Position) -> Vec<TileCell> {
        qualifying(self.vertical_surroundings(pos))
    }

    /// Returns the maximal horizontal run of the anchor's color through `pos`,
    /// ordered left to right.
    ///
    /// A [`Tile::Hole`] anchor yields a single-element vector holding the hole
    /// itself.
    #[must_use]
    pub fn horizontal_surroundings(&self, pos: Position) -> Vec<TileCell> {
        self.surroundings(pos, Position::left, Position::right)
    }

    /// Returns the maximal vertical run of the anchor's color through `pos`,
    /// ordered top to bottom.
    ///
    /// A [`Tile::Hole`] anchor yields a single-element vector holding the hole
    /// itself.
    #[must_use]
    pub fn vertical_surroundings(&self, pos: Position) -> Vec<TileCell> {
        self.surroundings(pos, Position::top, Position::bottom)
    }

    fn surroundings(
        &self,
        pos: Position,
        backward: fn(Position) -> Position,
        forward: fn(Position) -> Position,
    ) -> Vec<TileCell> {
        let anchor = self.field.tile_cell(pos);
        if anchor.tile().is_not_tile() {
            return vec![anchor];
        }
        let mut cells = self.scan(pos, backward, anchor.tile());
        cells.reverse();
        cells.push(anchor);
        cells.extend(self.scan(pos, forward, anchor.tile()));
        cells
    }

    // Off-board reads are holes, which never equal a color, so the scan stops
    // at the edge.
    fn scan(&self, from: Position, step: fn(Position) -> Position, tile: Tile) -> Vec<TileCell> {
        iter::successors(Some(step(from)), |pos| Some(step(*pos)))
            .map(|pos| self.field.tile_cell(pos))
            .take_while(|cell| cell.tile() == tile)
            .collect()
    }

    /// Sets the tile at `pos` to [`Tile::Hole`].
    pub fn remove_tile(&mut self, pos: Position) {
        self.field[pos] = Tile::Hole;
    }

    /// Sets the tile at every position to [`Tile::Hole`].
    pub fn remove_tiles(&mut self, positions: &[Position]) {
        for pos in positions {
            self.remove_tile(*pos);
        }
    }

    /// Sets the tile at every cell's position to [`Tile::Hole`].
    ///
    /// Cells may repeat; removal is idempotent.
    pub fn remove_tile_cells(&mut self, cells: &[TileCell]) {
        for cell in cells {
            self.remove_tile(cell.position());
        }
    }

    /// Finds and removes every qualifying horizontal run on the board.
    ///
    /// Positions are visited in row-major order and each run is removed as soon
    /// as it is found, so a run is reported once even though every cell in it
    /// could anchor it.
    pub fn get_and_remove_all_horizontal_rows(&mut self) -> Vec<Vec<TileCell>> {
        let runs = self.get_and_remove_all(Self::horizontal_connected_or_empty);
        log::debug!("full-board scan found {} horizontal runs", runs.len());
        runs
    }

    /// Finds and removes every qualifying vertical run on the board.
    ///
    /// See [`get_and_remove_all_horizontal_rows`](Self::get_and_remove_all_horizontal_rows).
    pub fn get_and_remove_all_vertical_rows(&mut self) -> Vec<Vec<TileCell>> {
        let runs = self.get_and_remove_all(Self::vertical_connected_or_empty);
        log::debug!("full-board scan found {} vertical runs", runs.len());
        runs
    }

    fn get_and_remove_all<F>(&mut self, find_run: F) -> Vec<Vec<TileCell>>
    where
        F: Fn(&Self, Position) -> Vec<TileCell>,
    {
        let mut runs = vec![];
        for pos in self.field.positions() {
            let run = find_run(self, pos);
            if !run.is_empty() {
                self.remove_tile_cells(&run);
                runs.push(run);
            }
        }
        runs
    }
}

impl Display for GameMechanics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.field, f)
    }
}

/// Tries the swap on `scratch` and undoes it, leaving `scratch` as it was.
fn swap_forms_run(scratch: &mut GameField, a: Position, b: Position) -> bool {
    if scratch[a].is_not_tile() || scratch[b].is_not_tile() {
        return false;
    }
    let mut mechanics = GameMechanics::new(scratch);
    mechanics.swap_tiles(a, b);
    let forms_run = mechanics.is_in_row_with_three(a) || mechanics.is_in_row_with_three(b);
    mechanics.swap_tiles(a, b);
    forms_run
}

fn qualifying(run: Vec<TileCell>) -> Vec<TileCell> {
    if run.len() < MIN_RUN_LENGTH {
        Vec::new()
    } else {
        run
    }
}
