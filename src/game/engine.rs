//! The turn orchestrator.
//!
//! `Game` owns the grid, the turn state, the drawable cards and the RNG.
//! It gates input by phase:
//!
//! - `Normal`: [`Game::attempt_move`] and [`Game::select_piece`]
//! - `CardSelection`: [`Game::toggle_card_selection`], [`Game::confirm_card`]
//!   and [`Game::decline_card`]
//!
//! Every command validates fully before mutating anything. A rejected
//! command returns an outcome and leaves the game untouched.

use tracing::{debug, info, warn};

use super::outcome::{ActionOutcome, CardOutcome, MoveOutcome, MoveRejection};
use crate::board::{Grid, Tile, TileState};
use crate::cards::{ActiveCard, CardKind, CardRegistry, SelectTarget, SelectionOutcome};
use crate::core::{
    Action, Color, Coord, GameConfig, GameRng, GameRngState, GameState, Phase, Result,
};
use crate::effects::{Effect, EffectBatch, EffectResolver};
use crate::pieces::rules::{self, Destination};
use crate::pieces::{Piece, PieceId};

/// A game in progress.
///
/// Cloning is cheap enough to hand a snapshot to a renderer between events.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    registry: CardRegistry,
    rng: GameRng,
}

impl Game {
    /// Set up the board and start the first turn.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::from_layout(&config.layout)?;
        let mut game = Self {
            state: GameState::new(config.starting_player),
            registry: config.deck.iter().copied().collect(),
            rng: GameRng::new(config.seed),
            grid,
            config,
        };
        game.start_turn();
        Ok(game)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.state.current_player()
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.state.turn_count()
    }

    #[must_use]
    pub fn active_card(&self) -> Option<&ActiveCard> {
        self.state.active_card()
    }

    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.grid.tile_at(coord)
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.grid.pieces()
    }

    /// Captured and retired pieces of `color`.
    pub fn graveyard(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.grid.graveyard(color)
    }

    /// Cards the current player could be dealt right now.
    #[must_use]
    pub fn eligible_cards(&self) -> Vec<CardKind> {
        self.registry.eligible(&self.grid, self.current_player())
    }

    /// Checkpoint of the card-draw RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume card draws from a checkpoint taken with [`Game::rng_state`].
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
        debug!(seed = state.seed, "draw rng restored");
    }

    // === Turns ===

    /// Count a new turn and draw a card on every draw turn.
    fn start_turn(&mut self) {
        let turn = self.state.advance_turn();
        let player = self.current_player();
        info!(turn, %player, "turn started");

        if turn % self.config.card_draw_interval != 0 {
            return;
        }
        match self.registry.draw(&self.grid, player, &mut self.rng) {
            Some(kind) => {
                let card = ActiveCard::new(kind, player, &self.grid);
                self.state.begin_card(card);
                self.refresh_card_display();
                info!(turn, card = %kind, "card drawn");
            }
            None => warn!(turn, "no eligible card to draw"),
        }
    }

    /// Hand the move to the other player and start their turn.
    ///
    /// Moves end the turn on their own; this is for hosts that let a player
    /// pass. Returns false, changing nothing, while a card is being played.
    pub fn end_turn(&mut self) -> bool {
        if self.phase() != Phase::Normal {
            return false;
        }
        self.state.pass_turn();
        self.start_turn();
        true
    }

    // === Movement ===

    /// Move or capture with the current player's piece on `from`.
    ///
    /// A capture is checked before a plain move. On success the captured
    /// pieces are dead, the piece stands on `to`, and the turn has ended.
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome> {
        let rejected = |why| Ok(MoveOutcome::Rejected(why));

        if self.phase() != Phase::Normal {
            return rejected(MoveRejection::WrongPhase);
        }
        if !from.on_board() || !to.on_board() {
            return rejected(MoveRejection::OffBoard);
        }
        let Some(id) = self.grid.occupant_id(from) else {
            return rejected(MoveRejection::NoPiece);
        };
        let Some(piece) = self.grid.piece(id) else {
            return rejected(MoveRejection::NoPiece);
        };
        if piece.color != self.current_player() {
            return rejected(MoveRejection::NotYourPiece);
        }

        let capture = rules::capture(piece, to, &self.grid);
        let mut batch = EffectBatch::new();
        if capture.valid {
            for &victim in &capture.captured {
                batch.add(Effect::kill(victim));
            }
        } else if !rules::can_move(piece, to, &self.grid) {
            return rejected(MoveRejection::IllegalDestination);
        }
        batch.add(Effect::move_piece(id, to));

        EffectResolver::resolve_batch(&mut self.grid, &batch)?;
        self.grid.reset_tile_states();

        let outcome = if capture.valid {
            debug!(piece = %id, %from, %to, captured = ?capture.captured, "capture");
            MoveOutcome::Captured(capture.captured)
        } else {
            debug!(piece = %id, %from, %to, "move");
            MoveOutcome::Moved
        };

        self.state.pass_turn();
        self.start_turn();
        Ok(outcome)
    }

    /// Highlight where the current player's piece on `at` may go.
    ///
    /// Move destinations become `Selectable`, capture destinations
    /// `Threatened`, and the piece's own tile `Selected`. Returns the number
    /// of highlighted destinations. Only display state changes; outside the
    /// normal phase nothing changes at all.
    pub fn select_piece(&mut self, at: Coord) -> usize {
        if self.phase() != Phase::Normal {
            return 0;
        }
        self.grid.reset_tile_states();

        let player = self.current_player();
        let Some(piece) = self.grid.occupant(at).filter(|p| p.color == player) else {
            return 0;
        };
        let destinations = rules::legal_destinations(piece, &self.grid);

        self.grid.set_tile_state(at, TileState::Selected);
        for dest in &destinations {
            let state = match dest {
                Destination::Move(_) => TileState::Selectable,
                Destination::Capture(..) => TileState::Threatened,
            };
            self.grid.set_tile_state(dest.coord(), state);
        }
        destinations.len()
    }

    // === Cards ===

    /// Toggle a card selection at `at`: the piece standing there, or the
    /// tile itself when empty.
    pub fn toggle_card_selection(&mut self, at: Coord) -> SelectionOutcome {
        if !at.on_board() {
            return SelectionOutcome::Ignored;
        }
        let target = match self.grid.occupant_id(at) {
            Some(id) => SelectTarget::Piece(id),
            None => SelectTarget::Tile(at),
        };
        let Some(card) = self.state.active_card_mut() else {
            return SelectionOutcome::Ignored;
        };

        let outcome = card.toggle_selection(target, &self.grid);
        if outcome.changed() {
            self.refresh_card_display();
        }
        outcome
    }

    /// Execute the active card once it is on its last stage, then return
    /// to normal play.
    ///
    /// The card's effects are applied as one batch; if the batch fails the
    /// error is returned and the game, card included, is unchanged.
    pub fn confirm_card(&mut self) -> Result<CardOutcome> {
        let Some(card) = self.state.active_card() else {
            return Ok(CardOutcome::NoActiveCard);
        };
        let Some(batch) = card.execute(&self.grid) else {
            return Ok(CardOutcome::NotReady);
        };
        let kind = card.kind();

        EffectResolver::resolve_batch(&mut self.grid, &batch)?;
        self.state.end_card();
        self.grid.reset_tile_states();
        info!(card = %kind, effects = batch.len(), "card executed");
        Ok(CardOutcome::Executed(kind))
    }

    /// Discard the active card without applying anything. Always allowed.
    pub fn decline_card(&mut self) -> CardOutcome {
        let Some(card) = self.state.end_card() else {
            return CardOutcome::NoActiveCard;
        };
        self.grid.reset_tile_states();
        info!(card = %card.kind(), stage = card.current_stage(), "card declined");
        CardOutcome::Declined(card.kind())
    }

    // === Input ===

    /// Dispatch one input event.
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome> {
        if !action.is_on_board() {
            return Ok(ActionOutcome::Ignored);
        }
        Ok(match action {
            Action::Move { from, to } => ActionOutcome::Move(self.attempt_move(from, to)?),
            Action::Select { at } => ActionOutcome::Selection(self.toggle_card_selection(at)),
            Action::Confirm => ActionOutcome::Card(self.confirm_card()?),
            Action::Decline => ActionOutcome::Card(self.decline_card()),
        })
    }

    /// Reset the board highlights to reflect the active card.
    fn refresh_card_display(&mut self) {
        self.grid.reset_tile_states();
        let Some(card) = self.state.active_card() else {
            return;
        };
        for selectable in card.selectables() {
            self.grid.set_tile_state(selectable.tile, TileState::Selectable);
        }
        for stage in 0..=card.current_stage() {
            for selection in card.selections(stage) {
                self.grid.set_tile_state(selection.affects, TileState::Selected);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Layout;
    use crate::pieces::PieceKind;

    fn game_with(layout: Layout, interval: u32) -> Game {
        let config = GameConfig::new().with_layout(layout).with_card_draw_interval(interval);
        Game::new(config).unwrap()
    }

    #[test]
    fn test_new_game_starts_first_turn() {
        let game = Game::new(GameConfig::new()).unwrap();
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.phase(), Phase::Normal);
        assert_eq!(game.pieces().count(), 32);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Game::new(GameConfig::new().with_card_draw_interval(0)).is_err());
    }

    #[test]
    fn test_move_ends_turn() {
        let mut game = Game::new(GameConfig::new()).unwrap();

        let outcome = game.attempt_move(Coord::new(4, 6), Coord::new(4, 4)).unwrap();

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.turn_count(), 2);
        assert!(game.grid().is_occupied(Coord::new(4, 4)));
    }

    #[test]
    fn test_rejections_change_nothing() {
        let mut game = Game::new(GameConfig::new()).unwrap();
        let before = game.grid().clone();

        let cases = [
            (Coord::new(4, 4), Coord::new(4, 3), MoveRejection::NoPiece),
            (Coord::new(4, 1), Coord::new(4, 2), MoveRejection::NotYourPiece),
            (Coord::new(4, 6), Coord::new(4, 3), MoveRejection::IllegalDestination),
            (Coord::new(4, 6), Coord::new(4, 8), MoveRejection::OffBoard),
        ];
        for (from, to, why) in cases {
            assert_eq!(game.attempt_move(from, to).unwrap(), MoveOutcome::Rejected(why));
        }

        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.grid().tiles(), before.tiles());
    }

    #[test]
    fn test_capture_kills_victim() {
        let layout = Layout::empty()
            .with(PieceKind::Rook, Color::White, 0, 7)
            .with(PieceKind::Knight, Color::Black, 0, 2);
        let mut game = game_with(layout, 100);

        let outcome = game.attempt_move(Coord::new(0, 7), Coord::new(0, 2)).unwrap();

        assert_eq!(outcome, MoveOutcome::Captured([PieceId(1)].into_iter().collect()));
        assert_eq!(game.graveyard(Color::Black).count(), 1);
        assert_eq!(game.grid().occupant_id(Coord::new(0, 2)), Some(PieceId(0)));
        assert!(game.grid().is_consistent());
    }

    #[test]
    fn test_card_drawn_on_interval() {
        let layout = Layout::empty()
            .with(PieceKind::Pawn, Color::White, 0, 6)
            .with(PieceKind::Pawn, Color::Black, 7, 1);
        let config = GameConfig::new()
            .with_layout(layout)
            .with_deck([CardKind::BizarreMutation]);
        let mut game = Game::new(config).unwrap();

        game.attempt_move(Coord::new(0, 6), Coord::new(0, 5)).unwrap();
        assert_eq!(game.phase(), Phase::Normal);
        game.attempt_move(Coord::new(7, 1), Coord::new(7, 2)).unwrap();

        assert_eq!(game.turn_count(), 3);
        assert_eq!(game.phase(), Phase::CardSelection);
        let card = game.active_card().unwrap();
        assert_eq!(card.kind(), CardKind::BizarreMutation);
        assert_eq!(card.player(), Color::White);
        assert_eq!(
            game.tile_at(Coord::new(0, 5)).unwrap().state,
            TileState::Selectable
        );
    }

    #[test]
    fn test_no_eligible_card_stays_normal() {
        let layout = Layout::empty()
            .with(PieceKind::King, Color::White, 4, 7)
            .with(PieceKind::King, Color::Black, 4, 0);
        let mut game = game_with(layout, 2);

        game.attempt_move(Coord::new(4, 7), Coord::new(4, 6)).unwrap();

        assert_eq!(game.turn_count(), 2);
        assert_eq!(game.phase(), Phase::Normal);
    }

    #[test]
    fn test_moves_blocked_during_card_phase() {
        let mut game = game_with(Layout::standard(), 1);
        assert_eq!(game.phase(), Phase::CardSelection);

        let outcome = game.attempt_move(Coord::new(4, 6), Coord::new(4, 4)).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::WrongPhase));
        assert_eq!(game.select_piece(Coord::new(4, 6)), 0);
        assert!(!game.end_turn());
    }

    #[test]
    fn test_decline_returns_to_normal() {
        let mut game = game_with(Layout::standard(), 1);
        let kind = game.active_card().unwrap().kind();

        assert_eq!(game.decline_card(), CardOutcome::Declined(kind));
        assert_eq!(game.phase(), Phase::Normal);
        assert!(game.tiles().iter().all(|t| t.state == TileState::Normal));
        assert_eq!(game.decline_card(), CardOutcome::NoActiveCard);
        // Declining does not end the turn
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.turn_count(), 1);
    }

    #[test]
    fn test_confirm_with_nothing_selected() {
        let layout = Layout::empty()
            .with(PieceKind::Pawn, Color::White, 0, 6)
            .with(PieceKind::King, Color::Black, 4, 0);
        let config = GameConfig::new()
            .with_layout(layout)
            .with_card_draw_interval(1)
            .with_deck([CardKind::Onslaught]);
        let mut game = Game::new(config).unwrap();
        assert_eq!(game.phase(), Phase::CardSelection);

        assert_eq!(game.confirm_card().unwrap(), CardOutcome::Executed(CardKind::Onslaught));
        assert_eq!(game.phase(), Phase::Normal);
        assert_eq!(game.grid().occupant_id(Coord::new(0, 6)), Some(PieceId(0)));
        assert!(!game.grid().piece(PieceId(0)).unwrap().has_moved);
    }

    #[test]
    fn test_onslaught_display_marks_destination() {
        let layout = Layout::empty()
            .with(PieceKind::Pawn, Color::White, 0, 6)
            .with(PieceKind::Pawn, Color::White, 1, 6);
        let config = GameConfig::new()
            .with_layout(layout)
            .with_card_draw_interval(1)
            .with_deck([CardKind::Onslaught]);
        let mut game = Game::new(config).unwrap();

        game.toggle_card_selection(Coord::new(0, 6));

        let state = |x, y| game.tile_at(Coord::new(x, y)).unwrap().state;
        assert_eq!(state(0, 5), TileState::Selected);
        assert_eq!(state(0, 6), TileState::Selectable);
        assert_eq!(state(1, 6), TileState::Selectable);
        assert_eq!(state(1, 5), TileState::Normal);
    }

    #[test]
    fn test_rng_checkpoint_replays_draws() {
        let config = GameConfig::new().with_seed(21).with_card_draw_interval(1);
        let mut game = Game::new(config.clone()).unwrap();
        let checkpoint = game.rng_state();

        let mut replay = Game::new(config.with_seed(4)).unwrap();
        replay.restore_rng(&checkpoint);

        for (from, to) in [((0, 6), (0, 5)), ((0, 1), (0, 2)), ((1, 6), (1, 5))] {
            for g in [&mut game, &mut replay] {
                g.decline_card();
                let (from, to) = (Coord::new(from.0, from.1), Coord::new(to.0, to.1));
                assert!(g.attempt_move(from, to).unwrap().is_applied());
            }
            assert_eq!(
                game.active_card().map(ActiveCard::kind),
                replay.active_card().map(ActiveCard::kind)
            );
        }
        assert_eq!(game.rng_state(), replay.rng_state());
    }

    #[test]
    fn test_select_piece_highlights() {
        let mut game = Game::new(GameConfig::new()).unwrap();

        assert_eq!(game.select_piece(Coord::new(1, 7)), 2);
        assert_eq!(game.tile_at(Coord::new(1, 7)).unwrap().state, TileState::Selected);
        assert_eq!(game.tile_at(Coord::new(0, 5)).unwrap().state, TileState::Selectable);
        assert_eq!(game.tile_at(Coord::new(2, 5)).unwrap().state, TileState::Selectable);

        // Enemy piece: highlights cleared, nothing selected
        assert_eq!(game.select_piece(Coord::new(1, 0)), 0);
        assert!(game.tiles().iter().all(|t| t.state == TileState::Normal));
    }

    #[test]
    fn test_select_piece_threatened() {
        let layout = Layout::empty()
            .with(PieceKind::Pawn, Color::White, 3, 4)
            .with(PieceKind::Rook, Color::Black, 4, 3);
        let mut game = game_with(layout, 100);

        // Single step and the diagonal capture; off the start rank there
        // is no double step even for an unmoved pawn
        assert_eq!(game.select_piece(Coord::new(3, 4)), 2);
        assert_eq!(game.tile_at(Coord::new(4, 3)).unwrap().state, TileState::Threatened);
        assert_eq!(game.tile_at(Coord::new(3, 3)).unwrap().state, TileState::Selectable);
        assert_eq!(game.tile_at(Coord::new(3, 2)).unwrap().state, TileState::Normal);
    }

    #[test]
    fn test_apply_ignores_off_board() {
        let mut game = Game::new(GameConfig::new()).unwrap();
        let outcome = game.apply(Action::Select { at: Coord::new(-1, 3) }).unwrap();
        assert_eq!(outcome, ActionOutcome::Ignored);

        let outcome = game
            .apply(Action::Move { from: Coord::new(6, 6), to: Coord::new(6, 5) })
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Move(MoveOutcome::Moved));
    }
}
