//! The closed set of mutation cards.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, Selection, SelectionContext};
use crate::effects::{
    forward_of, free_cardinal_neighbors, Effect, EffectBatch, TargetFilter, TargetSelector,
    TargetSpec,
};
use crate::pieces::{PieceKind, RuleOverlay};

/// Identifies one catalog card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Onslaught,
    Polymorph,
    BizarreMutation,
    Draught,
    Telekinesis,
    TopsyTurvy,
}

impl CardKind {
    pub const ALL: [CardKind; 6] = [
        CardKind::Onslaught,
        CardKind::Polymorph,
        CardKind::BizarreMutation,
        CardKind::Draught,
        CardKind::Telekinesis,
        CardKind::TopsyTurvy,
    ];

    /// The static definition for this card.
    #[must_use]
    pub fn definition(self) -> &'static CardDefinition {
        match self {
            CardKind::Onslaught => &ONSLAUGHT,
            CardKind::Polymorph => &POLYMORPH,
            CardKind::BizarreMutation => &BIZARRE_MUTATION,
            CardKind::Draught => &DRAUGHT,
            CardKind::Telekinesis => &TELEKINESIS,
            CardKind::TopsyTurvy => &TOPSY_TURVY,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        self.definition().description
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pieces matching `spec`, each selected on its own tile.
fn select_pieces(ctx: &SelectionContext<'_>, spec: &TargetSpec) -> Vec<Selection> {
    TargetSelector::pieces(ctx.grid, ctx.player, spec)
        .into_iter()
        .map(|(id, at)| Selection::piece(id, at))
        .collect()
}

/// Every piece selected in stage 0 becomes `kind`.
fn transform_selected(ctx: &SelectionContext<'_>, kind: PieceKind) -> EffectBatch {
    ctx.stage(0)
        .iter()
        .filter_map(Selection::piece_id)
        .map(|id| Effect::transform(id, kind))
        .collect()
}

// === Onslaught ===

static ONSLAUGHT: CardDefinition = CardDefinition {
    name: "Onslaught",
    description: "Move up to three pawns one tile forward",
    stage_limits: &[3],
    selectables: onslaught_selectables,
    apply: onslaught_apply,
};

/// Each pawn is offered together with the tile ahead of it.
fn onslaught_selectables(ctx: &SelectionContext<'_>) -> Vec<Selection> {
    let spec = TargetSpec::own()
        .of_kinds([PieceKind::Pawn])
        .with(TargetFilter::ClearForward);
    select_pieces(ctx, &spec)
        .into_iter()
        .map(|s| s.affecting(forward_of(s.tile, ctx.player)))
        .collect()
}

fn onslaught_apply(ctx: &SelectionContext<'_>) -> EffectBatch {
    ctx.stage(0)
        .iter()
        .filter_map(|s| s.piece_id().map(|id| Effect::move_piece(id, s.affects)))
        .collect()
}

// === Polymorph ===

static POLYMORPH: CardDefinition = CardDefinition {
    name: "Polymorph",
    description: "Demote any bishop or rook to a knight",
    stage_limits: &[1],
    selectables: polymorph_selectables,
    apply: polymorph_apply,
};

fn polymorph_selectables(ctx: &SelectionContext<'_>) -> Vec<Selection> {
    select_pieces(ctx, &TargetSpec::any().of_kinds([PieceKind::Bishop, PieceKind::Rook]))
}

fn polymorph_apply(ctx: &SelectionContext<'_>) -> EffectBatch {
    transform_selected(ctx, PieceKind::Knight)
}

// === Bizarre Mutation ===

static BIZARRE_MUTATION: CardDefinition = CardDefinition {
    name: "Bizarre Mutation",
    description: "Promote a pawn to a jumper",
    stage_limits: &[1],
    selectables: bizarre_mutation_selectables,
    apply: bizarre_mutation_apply,
};

fn bizarre_mutation_selectables(ctx: &SelectionContext<'_>) -> Vec<Selection> {
    select_pieces(ctx, &TargetSpec::any().of_kinds([PieceKind::Pawn]))
}

fn bizarre_mutation_apply(ctx: &SelectionContext<'_>) -> EffectBatch {
    transform_selected(ctx, PieceKind::Jumper)
}

// === Draught ===

static DRAUGHT: CardDefinition = CardDefinition {
    name: "Draught",
    description: "Demote a rook, bishop or knight to a jumper",
    stage_limits: &[1],
    selectables: draught_selectables,
    apply: draught_apply,
};

fn draught_selectables(ctx: &SelectionContext<'_>) -> Vec<Selection> {
    let spec = TargetSpec::any().of_kinds([PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]);
    select_pieces(ctx, &spec)
}

fn draught_apply(ctx: &SelectionContext<'_>) -> EffectBatch {
    transform_selected(ctx, PieceKind::Jumper)
}

// === Telekinesis ===

static TELEKINESIS: CardDefinition = CardDefinition {
    name: "Telekinesis",
    description: "Push an enemy pawn onto a free adjacent tile",
    stage_limits: &[1, 1],
    selectables: telekinesis_selectables,
    apply: telekinesis_apply,
};

/// Stage 0: enemy pawns with room to move. Stage 1: the free cardinal
/// neighbors of the pawn picked in stage 0.
fn telekinesis_selectables(ctx: &SelectionContext<'_>) -> Vec<Selection> {
    match ctx.stage {
        0 => {
            let spec = TargetSpec::enemy()
                .of_kinds([PieceKind::Pawn])
                .with(TargetFilter::FreeCardinalNeighbor);
            select_pieces(ctx, &spec)
        }
        1 => match ctx.first(0) {
            Some(pawn) => free_cardinal_neighbors(pawn.tile, ctx.grid)
                .map(Selection::tile)
                .collect(),
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn telekinesis_apply(ctx: &SelectionContext<'_>) -> EffectBatch {
    let pawn = ctx.first(0).and_then(|s| s.piece_id());
    match (pawn, ctx.first(1)) {
        (Some(pawn), Some(dest)) => EffectBatch::new().with(Effect::move_piece(pawn, dest.affects)),
        _ => EffectBatch::new(),
    }
}

// === Topsy Turvy ===

static TOPSY_TURVY: CardDefinition = CardDefinition {
    name: "Topsy Turvy",
    description: "Your pawns move diagonally and capture straight ahead",
    stage_limits: &[1],
    selectables: topsy_turvy_selectables,
    apply: topsy_turvy_apply,
};

fn topsy_turvy_selectables(ctx: &SelectionContext<'_>) -> Vec<Selection> {
    select_pieces(ctx, &TargetSpec::own().of_kinds([PieceKind::Pawn]))
}

/// The stage-0 pick only triggers the card; every own pawn is affected.
fn topsy_turvy_apply(ctx: &SelectionContext<'_>) -> EffectBatch {
    ctx.grid
        .pieces_of(ctx.player)
        .filter(|(_, p)| p.kind == PieceKind::Pawn && p.tile().is_some())
        .map(|(id, _)| Effect::install_overlay(id, RuleOverlay::topsy_turvy()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Grid, Layout};
    use crate::core::{Color, Coord};

    #[test]
    fn test_definitions_well_formed() {
        for kind in CardKind::ALL {
            let def = kind.definition();
            assert!(def.stage_count() >= 1, "{kind} has no stages");
            assert!(def.stage_limits.iter().all(|&l| l >= 1), "{kind} has an empty stage");
            assert!(!def.description.is_empty());
        }
        assert_eq!(CardKind::Telekinesis.definition().stage_limits, &[1, 1]);
        assert_eq!(CardKind::Onslaught.definition().stage_limits, &[3]);
    }

    #[test]
    fn test_names() {
        assert_eq!(CardKind::BizarreMutation.to_string(), "Bizarre Mutation");
        assert_eq!(CardKind::TopsyTurvy.name(), "Topsy Turvy");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CardKind::TopsyTurvy).unwrap();
        assert_eq!(json, "\"topsy_turvy\"");
        let kind: CardKind = serde_json::from_str("\"bizarre_mutation\"").unwrap();
        assert_eq!(kind, CardKind::BizarreMutation);
    }

    #[test]
    fn test_standard_board_eligibility() {
        let grid = Grid::from_layout(&Layout::standard()).unwrap();
        for kind in CardKind::ALL {
            let ok = kind.definition().requirements_satisfied(&grid, Color::White);
            // Enemy pawns on the standard board are boxed in sideways but
            // free ahead, so every card has a play.
            assert!(ok, "{kind} should be playable at the start");
        }
    }

    #[test]
    fn test_onslaught_offers_forward_tile() {
        let mut grid = Grid::new();
        let white = grid.spawn(PieceKind::Pawn, Color::White, Coord::new(0, 6)).unwrap();
        let black = grid.spawn(PieceKind::Pawn, Color::Black, Coord::new(5, 1)).unwrap();

        let ctx = SelectionContext::initial(&grid, Color::White);
        let offered = onslaught_selectables(&ctx);
        let expected = Selection::piece(white, Coord::new(0, 6)).affecting(Coord::new(0, 5));
        assert_eq!(offered, vec![expected]);

        let ctx = SelectionContext::initial(&grid, Color::Black);
        let offered = onslaught_selectables(&ctx);
        assert_eq!(offered[0].piece_id(), Some(black));
        assert_eq!(offered[0].affects, Coord::new(5, 2));
    }

    #[test]
    fn test_telekinesis_second_stage() {
        let mut grid = Grid::new();
        let pawn = grid.spawn(PieceKind::Pawn, Color::Black, Coord::new(0, 0)).unwrap();
        grid.spawn(PieceKind::Rook, Color::White, Coord::new(1, 0)).unwrap();

        let selections = vec![vec![Selection::piece(pawn, Coord::new(0, 0))], vec![]];
        let ctx = SelectionContext {
            grid: &grid,
            player: Color::White,
            stage: 1,
            selections: &selections,
        };

        assert_eq!(telekinesis_selectables(&ctx), vec![Selection::tile(Coord::new(0, 1))]);
    }
}
