//! The board grid and its piece collection.
//!
//! The `Grid` owns both sides of occupancy:
//! - A fixed array of 64 tiles, each holding at most one `PieceId`
//! - The piece collection, where each alive piece points back at its tile
//!
//! Every mutation goes through a `Grid` method that updates both sides,
//! so a tile's occupant always points back at that tile and no piece is
//! referenced by two tiles.
//!
//! ## Usage
//!
//! ```
//! use mutation_chess::board::Grid;
//! use mutation_chess::core::{Color, Coord};
//! use mutation_chess::pieces::PieceKind;
//!
//! let mut grid = Grid::new();
//! let pawn = grid.spawn(PieceKind::Pawn, Color::White, Coord::new(4, 6)).unwrap();
//!
//! grid.relocate(pawn, Coord::new(4, 5)).unwrap();
//! assert_eq!(grid.occupant_id(Coord::new(4, 5)), Some(pawn));
//! assert!(!grid.is_occupied(Coord::new(4, 6)));
//! ```

use im::Vector;
use tracing::debug;

use super::layout::Layout;
use super::tile::{Tile, TileState};
use crate::core::{Color, Coord, EngineError, Result};
use crate::pieces::{Piece, PieceId, PieceKind, LifeState, RuleOverlay};

/// Fixed 8x8 tile array plus the piece collection.
///
/// The collection is an `im::Vector`, so cloning a grid for a read-only
/// snapshot is cheap.
#[derive(Clone, Debug)]
pub struct Grid {
    tiles: Vec<Tile>,
    pieces: Vector<Piece>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: Coord::all().map(Tile::new).collect(),
            pieces: Vector::new(),
        }
    }

    /// A board with `layout` spawned in order.
    pub fn from_layout(layout: &Layout) -> Result<Self> {
        let mut grid = Self::new();
        for p in layout.placements() {
            grid.spawn(p.kind, p.color, p.coord())?;
        }
        Ok(grid)
    }

    // === Tiles ===

    /// The tile at `coord`, or `None` off the board.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        coord.on_board().then(|| &self.tiles[coord.index()])
    }

    /// All tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Set every tile's display state to `Normal`.
    pub fn reset_tile_states(&mut self) {
        for tile in &mut self.tiles {
            tile.state = TileState::Normal;
        }
    }

    /// Set one tile's display state. Off-board coordinates are ignored.
    pub fn set_tile_state(&mut self, coord: Coord, state: TileState) {
        if coord.on_board() {
            self.tiles[coord.index()].state = state;
        }
    }

    // === Occupancy queries ===

    #[must_use]
    pub fn occupant_id(&self, coord: Coord) -> Option<PieceId> {
        self.tile_at(coord).and_then(Tile::occupant)
    }

    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<&Piece> {
        self.occupant_id(coord).and_then(|id| self.piece(id))
    }

    /// False for empty and off-board tiles.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupant_id(coord).is_some()
    }

    /// The piece on `coord` if it belongs to `color`'s opponent.
    #[must_use]
    pub fn enemy_at(&self, coord: Coord, color: Color) -> Option<PieceId> {
        let id = self.occupant_id(coord)?;
        self.piece(id).filter(|p| p.color != color).map(|_| id)
    }

    // === Pieces ===

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Number of slots in the collection, dead pieces included.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Every piece, alive or dead, in slot order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u32), p))
    }

    /// Alive pieces in slot order.
    pub fn alive_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces().filter(|(_, p)| p.is_alive())
    }

    /// Alive pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.alive_pieces().filter(move |(_, p)| p.color == color)
    }

    /// Dead pieces of one color, for graveyard accounting.
    pub fn graveyard(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces()
            .filter(move |(_, p)| !p.is_alive() && p.color == color)
    }

    // === Mutation ===

    /// Create a new alive piece on `coord`.
    pub fn spawn(&mut self, kind: PieceKind, color: Color, coord: Coord) -> Result<PieceId> {
        self.check_vacant(coord)?;
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push_back(Piece::new(kind, color));
        self.occupy(coord, id)?;
        Ok(id)
    }

    /// Place piece `id` on `coord`, leaving its previous tile empty.
    ///
    /// Fails if the tile is off the board or already holds a piece, or if
    /// the piece is dead or unknown. Nothing is mutated on failure.
    pub fn occupy(&mut self, coord: Coord, id: PieceId) -> Result<()> {
        self.check_vacant(coord)?;
        let piece = self
            .pieces
            .get_mut(id.index())
            .filter(|p| p.is_alive())
            .ok_or(EngineError::PieceNotOnBoard(id))?;

        let previous = piece.tile.replace(coord);
        if let Some(old) = previous {
            self.tiles[old.index()].set_occupant(None);
        }
        self.tiles[coord.index()].set_occupant(Some(id));
        Ok(())
    }

    /// Remove any occupant from `coord`. The piece keeps its life state
    /// but loses its tile reference.
    pub fn clear(&mut self, coord: Coord) -> Option<PieceId> {
        if !coord.on_board() {
            return None;
        }
        let id = self.tiles[coord.index()].occupant()?;
        self.tiles[coord.index()].set_occupant(None);
        if let Some(piece) = self.pieces.get_mut(id.index()) {
            piece.tile = None;
        }
        Some(id)
    }

    /// Move a placed piece to `to` and mark it as having moved.
    pub fn relocate(&mut self, id: PieceId, to: Coord) -> Result<()> {
        if self.piece(id).and_then(Piece::tile).is_none() {
            return Err(EngineError::PieceNotOnBoard(id));
        }
        self.occupy(to, id)?;
        if let Some(piece) = self.pieces.get_mut(id.index()) {
            piece.has_moved = true;
        }
        debug!(piece = %id, to = %to, "relocated");
        Ok(())
    }

    /// Take a piece off the board for good.
    ///
    /// Returns false if it was already dead or does not exist.
    pub fn kill(&mut self, id: PieceId) -> bool {
        let Some(tile) = self.piece(id).filter(|p| p.is_alive()).map(Piece::tile) else {
            return false;
        };
        if let Some(coord) = tile {
            self.clear(coord);
        }
        if let Some(piece) = self.pieces.get_mut(id.index()) {
            piece.life = LifeState::Dead;
            piece.tile = None;
        }
        debug!(piece = %id, "killed");
        true
    }

    /// Replace the piece in slot `id` with a fresh piece of `kind`.
    ///
    /// The new piece keeps the color, tile and `has_moved` flag; it does not
    /// inherit overlays. Returns the retired piece, now dead and off the
    /// board, or `None` if the piece is dead or unplaced (nothing changes).
    pub fn transform_piece(&mut self, id: PieceId, kind: PieceKind) -> Option<Piece> {
        let old = self.piece(id).filter(|p| p.is_alive())?;
        let coord = old.tile()?;

        let mut fresh = Piece::new(kind, old.color);
        fresh.has_moved = old.has_moved;
        fresh.tile = Some(coord);

        // The tile keeps pointing at slot `id`, which now holds `fresh`.
        let mut retired = self.pieces.set(id.index(), fresh);
        retired.life = LifeState::Dead;
        retired.tile = None;

        debug!(piece = %id, from = %retired.kind, to = %kind, at = %coord, "transformed");
        Some(retired)
    }

    /// Install alternate rules on an alive piece.
    pub fn set_overlay(&mut self, id: PieceId, overlay: RuleOverlay) -> Result<()> {
        let piece = self
            .pieces
            .get_mut(id.index())
            .filter(|p| p.is_alive())
            .ok_or(EngineError::PieceNotOnBoard(id))?;
        piece.overlay = overlay;
        Ok(())
    }

    /// Check the mutual occupancy invariant across the whole board.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let tiles_ok = self.tiles.iter().all(|tile| match tile.occupant() {
            Some(id) => self
                .piece(id)
                .is_some_and(|p| p.is_alive() && p.tile() == Some(tile.coord())),
            None => true,
        });
        let pieces_ok = self.pieces().all(|(id, p)| match p.tile() {
            Some(coord) => p.is_alive() && self.occupant_id(coord) == Some(id),
            None => true,
        });
        tiles_ok && pieces_ok
    }

    fn check_vacant(&self, coord: Coord) -> Result<()> {
        match self.tile_at(coord) {
            None => Err(EngineError::InvalidTile(coord)),
            Some(tile) if tile.is_occupied() => Err(EngineError::OccupiedTile(coord)),
            Some(_) => Ok(()),
        }
    }
}
