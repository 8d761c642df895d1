//! Effect resolution: applying effects to the grid.
//!
//! A batch is applied to a scratch copy of the grid and committed only if
//! every effect succeeds. The grid's piece collection is persistent, so the
//! scratch copy shares structure with the original until it diverges.

use tracing::debug;

use crate::board::Grid;
use crate::core::{EngineError, Result};

use super::{Effect, EffectBatch};

/// Applies effects to a [`Grid`].
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a batch atomically.
    ///
    /// On error the grid is left exactly as it was and the first failing
    /// effect's error is returned.
    pub fn resolve_batch(grid: &mut Grid, batch: &EffectBatch) -> Result<()> {
        let mut scratch = grid.clone();
        for effect in batch.iter() {
            Self::resolve_single(&mut scratch, effect).map_err(|err| {
                debug!(piece = %effect.piece(), %err, "batch rejected");
                err
            })?;
        }
        *grid = scratch;
        debug!(effects = batch.len(), "batch resolved");
        Ok(())
    }

    /// Resolve one effect in place. A failure may leave earlier effects of
    /// the same batch applied; use [`EffectResolver::resolve_batch`] for
    /// all-or-nothing semantics.
    pub fn resolve_single(grid: &mut Grid, effect: &Effect) -> Result<()> {
        match *effect {
            Effect::MovePiece { piece, to } => grid.relocate(piece, to),

            Effect::Transform { piece, kind } => grid
                .transform_piece(piece, kind)
                .map(|_| ())
                .ok_or(EngineError::PieceNotOnBoard(piece)),

            Effect::InstallOverlay { piece, overlay } => {
                grid.set_overlay(piece, overlay)?;
                debug!(piece = %piece, ?overlay, "overlay installed");
                Ok(())
            }

            Effect::Kill { piece } => {
                if grid.kill(piece) {
                    Ok(())
                } else {
                    Err(EngineError::PieceNotOnBoard(piece))
                }
            }
        }
    }
}
