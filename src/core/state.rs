//! Board state: piece anchors, footprints, move legality and goal detection.
//!
//! ## Geometry
//!
//! The board is `BOARD_HEIGHT` × `BOARD_WIDTH` (4 × 6). Each piece is
//! described by one anchor coordinate; its footprint is derived from the
//! anchor and the piece's fixed shape:
//!
//! | Tile          | Footprint (relative to anchor `a`)       |
//! |---------------|------------------------------------------|
//! | `Square`      | `a`, `a→`, `a↓`, `a↓→`                   |
//! | `TopLeft`     | `a`, `a→`, `a↓`                          |
//! | `TopRight`    | `a`, `a→`, `a→↓`                         |
//! | `BottomLeft`  | `a`, `a↓`, `a↓→`                         |
//! | `BottomRight` | `a↓`, `a↓→`, `a→` (the anchor is the notch) |
//!
//! Every piece fits in a 2×2 box whose top-left cell is the anchor.
//!
//! ## Value semantics
//!
//! `PuzzleState` is `Copy`. Moves either return a new snapshot
//! ([`PuzzleState::moved`], [`PuzzleState::apply`]) or mutate a copy the
//! caller owns ([`PuzzleState::move_tile`]). A snapshot held by a search node
//! is never changed behind its back.
//!
//! ## The reserved notch
//!
//! The `BottomRight` anchor is always reported as blocked by
//! [`PuzzleState::is_blocked`]. The one exception during move checks is the
//! `BottomRight` piece sliding into its own notch, which is allowed whenever
//! no footprint covers the cell.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, Direction};
use super::error::ConfigError;
use super::tile::{Move, Tile, TILE_COUNT};

/// Number of board rows.
pub const BOARD_HEIGHT: i32 = 4;

/// Number of board columns.
pub const BOARD_WIDTH: i32 = 6;

/// Cells covered by one piece.
pub type Footprint = SmallVec<[Coord; 4]>;

/// Legal moves keyed by tile.
///
/// Only one direction is kept per tile: when a tile can move in several
/// directions, the last one in scan order (`Up`, `Right`, `Down`, `Left`)
/// wins. Use [`PuzzleState::all_legal_moves`] for the complete list.
pub type LegalMoves = BTreeMap<Tile, Direction>;

/// Every legal move, in tile-then-direction order.
pub type MoveList = SmallVec<[Move; 8]>;

/// Positions of the five pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Coord; TILE_COUNT]", into = "[Coord; TILE_COUNT]")]
pub struct PuzzleState {
    anchors: [Coord; TILE_COUNT],
}

impl Default for PuzzleState {
    /// The starting layout of the puzzle.
    fn default() -> Self {
        Self {
            anchors: [
                Coord::new(0, 4),
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
                Coord::new(2, 2),
            ],
        }
    }
}

impl PuzzleState {
    /// Build a state from one anchor per tile, in tile index order.
    ///
    /// Fails if the slice does not hold exactly five anchors, if any anchor
    /// is off the board, or if any two footprints share a cell.
    ///
    /// ```
    /// use corner_puzzle::core::{Coord, PuzzleState, Tile};
    ///
    /// let state = PuzzleState::new(&[
    ///     Coord::new(1, 1),
    ///     Coord::new(0, 0),
    ///     Coord::new(0, 2),
    ///     Coord::new(2, 0),
    ///     Coord::new(2, 2),
    /// ])
    /// .unwrap();
    /// assert_eq!(state.position(Tile::Square), Coord::new(1, 1));
    /// assert!(state.is_goal());
    ///
    /// assert!(PuzzleState::new(&[Coord::new(0, 0)]).is_err());
    /// ```
    pub fn new(positions: &[Coord]) -> Result<Self, ConfigError> {
        let anchors: [Coord; TILE_COUNT] = positions
            .try_into()
            .map_err(|_| ConfigError::WrongPieceCount {
                found: positions.len(),
            })?;

        for tile in Tile::ALL {
            let position = anchors[tile.index()];
            if !Self::is_on_board(position) {
                return Err(ConfigError::OffBoard { tile, position });
            }
        }

        let state = Self { anchors };
        state.check_overlaps()?;
        Ok(state)
    }

    fn check_overlaps(&self) -> Result<(), ConfigError> {
        for (i, &first) in Tile::ALL.iter().enumerate() {
            let cells = self.footprint(first);
            for &second in &Tile::ALL[i + 1..] {
                let other = self.footprint(second);
                if let Some(&cell) = cells.iter().find(|c| other.contains(c)) {
                    return Err(ConfigError::Overlap {
                        first,
                        second,
                        cell,
                    });
                }
            }
        }
        Ok(())
    }

    /// Anchor of a tile.
    #[inline]
    #[must_use]
    pub fn position(&self, tile: Tile) -> Coord {
        self.anchors[tile.index()]
    }

    /// All anchors in tile index order.
    #[must_use]
    pub fn positions(&self) -> [Coord; TILE_COUNT] {
        self.anchors
    }

    /// Whether a coordinate lies on the board.
    #[inline]
    #[must_use]
    pub const fn is_on_board(coord: Coord) -> bool {
        coord.row >= 0 && coord.row < BOARD_HEIGHT && coord.col >= 0 && coord.col < BOARD_WIDTH
    }

    /// Cells covered by a tile.
    #[must_use]
    pub fn footprint(&self, tile: Tile) -> Footprint {
        let a = self.position(tile);
        match tile {
            Tile::Square => smallvec::smallvec![a, a.right(), a.down(), a.right().down()],
            Tile::TopLeft => smallvec::smallvec![a, a.right(), a.down()],
            Tile::TopRight => smallvec::smallvec![a, a.right(), a.right().down()],
            Tile::BottomLeft => smallvec::smallvec![a, a.down(), a.down().right()],
            Tile::BottomRight => smallvec::smallvec![a.down(), a.down().right(), a.right()],
        }
    }

    /// The tile whose footprint covers `coord`, if any.
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<Tile> {
        Tile::ALL
            .into_iter()
            .find(|&tile| self.footprint(tile).contains(&coord))
    }

    /// Whether a cell is unavailable: off the board, the `BottomRight`
    /// notch, or covered by a piece.
    ///
    /// The notch stays blocked for every other piece even when it is empty.
    /// A piece that slides out of the notch therefore cannot slide straight
    /// back, so a move followed by its reverse does not always restore the
    /// board.
    #[must_use]
    pub fn is_blocked(&self, coord: Coord) -> bool {
        !Self::is_on_board(coord)
            || coord == self.position(Tile::BottomRight)
            || self.occupant(coord).is_some()
    }

    /// Whether `tile` may slide onto `coord`.
    fn is_free_for(&self, tile: Tile, coord: Coord) -> bool {
        if tile == Tile::BottomRight && coord == self.position(Tile::BottomRight) {
            return Self::is_on_board(coord) && self.occupant(coord).is_none();
        }
        !self.is_blocked(coord)
    }

    /// Whether the puzzle is solved: every corner piece sits flush against
    /// the square from its own diagonal.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        let square = self.position(Tile::Square);
        square == self.position(Tile::TopLeft).right().down()
            && square == self.position(Tile::TopRight).left().down()
            && square == self.position(Tile::BottomLeft).right().up()
            && square == self.position(Tile::BottomRight).left().up()
    }

    /// Whether the tile's 2×2 box already touches the board edge on the
    /// `direction` side.
    fn at_edge(&self, tile: Tile, direction: Direction) -> bool {
        let a = self.position(tile);
        match direction {
            Direction::Up => a.row <= 0,
            Direction::Right => a.col + 1 >= BOARD_WIDTH - 1,
            Direction::Down => a.row + 1 >= BOARD_HEIGHT - 1,
            Direction::Left => a.col <= 0,
        }
    }

    /// Cells the tile newly covers after sliding one step in `direction`.
    fn entered_cells(&self, tile: Tile, direction: Direction) -> [Coord; 2] {
        let a = self.position(tile);
        match (direction, tile) {
            (Direction::Up, Tile::BottomLeft) => [a.up(), a.right()],
            (Direction::Up, Tile::BottomRight) => [a, a.up().right()],
            (Direction::Up, _) => [a.up(), a.up().right()],

            (Direction::Down, Tile::TopLeft) => [a.down().down(), a.right().down()],
            (Direction::Down, Tile::TopRight) => [a.down(), a.right().down().down()],
            (Direction::Down, _) => [a.down().down(), a.down().down().right()],

            (Direction::Left, Tile::TopRight) => [a.left(), a.down()],
            (Direction::Left, Tile::BottomRight) => [a, a.down().left()],
            (Direction::Left, _) => [a.left(), a.left().down()],

            (Direction::Right, Tile::TopLeft) => [a.right().right(), a.right().down()],
            (Direction::Right, Tile::BottomLeft) => [a.right(), a.right().right().down()],
            (Direction::Right, _) => [a.right().right(), a.right().right().down()],
        }
    }

    /// Whether `tile` can slide one cell in `direction`.
    #[must_use]
    pub fn can_move(&self, tile: Tile, direction: Direction) -> bool {
        !self.at_edge(tile, direction)
            && self
                .entered_cells(tile, direction)
                .into_iter()
                .all(|cell| self.is_free_for(tile, cell))
    }

    /// Slide a tile in place.
    ///
    /// The move must be legal; check [`can_move`](Self::can_move) first.
    /// Only call this on a copy nothing else is holding on to.
    pub fn move_tile(&mut self, tile: Tile, direction: Direction) {
        debug_assert!(
            self.can_move(tile, direction),
            "illegal move: {tile} {direction} from {self}"
        );
        let anchor = &mut self.anchors[tile.index()];
        *anchor = anchor.neighbor(direction);
    }

    /// A new state with the tile slid one cell.
    #[must_use]
    pub fn moved(&self, tile: Tile, direction: Direction) -> Self {
        let mut next = *self;
        next.move_tile(tile, direction);
        next
    }

    /// A new state with the move applied.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Self {
        self.moved(mv.tile, mv.direction)
    }

    /// Legal moves, one direction per tile.
    ///
    /// Directions are scanned in the outer loop, so for a tile with several
    /// legal directions only the last one survives.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        let mut moves = LegalMoves::new();
        for direction in Direction::ALL {
            for tile in Tile::ALL {
                if self.can_move(tile, direction) {
                    moves.insert(tile, direction);
                }
            }
        }
        moves
    }

    /// Every legal move, including all directions of multi-directional tiles.
    #[must_use]
    pub fn all_legal_moves(&self) -> MoveList {
        Tile::ALL
            .into_iter()
            .flat_map(|tile| Direction::ALL.into_iter().map(move |d| Move::new(tile, d)))
            .filter(|mv| self.can_move(mv.tile, mv.direction))
            .collect()
    }

    /// Draw the board, one line per row. Pieces are shown by their
    /// [`Tile::symbol`], free cells as `.`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(((BOARD_WIDTH + 1) * BOARD_HEIGHT) as usize);
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let symbol = self
                    .occupant(Coord::new(row, col))
                    .map_or('.', Tile::symbol);
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl TryFrom<[Coord; TILE_COUNT]> for PuzzleState {
    type Error = ConfigError;

    fn try_from(anchors: [Coord; TILE_COUNT]) -> Result<Self, Self::Error> {
        Self::new(&anchors)
    }
}

impl From<PuzzleState> for [Coord; TILE_COUNT] {
    fn from(state: PuzzleState) -> Self {
        state.anchors
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, anchor) in self.anchors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{anchor}")?;
        }
        f.write_str("]")
    }
}
