/*
Game: Memory Match
Flip two hidden tiles per turn. A matching pair locks in face up, a mismatch
hides again after a short delay, and a limited flip budget bounds the session.
*/

use std::collections::HashSet;
use std::time::Duration;

use enum_iterator::all;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use super::deck::{self, Symbol, Tile};

/// How long a mismatched pair stays on display before it is hidden again.
pub const FLIP_DELAY: Duration = Duration::from_millis(500);
/// Flip actions granted to a fresh standard board.
pub const DEFAULT_FLIP_BUDGET: i32 = 30;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum State {
    /// No tile selected, waiting for the first flip of a pair
    #[default]
    Idle,
    /// One tile face up, waiting for the second flip
    OneSelected,
    /// A mismatched pair is on display until the re-hide fires
    Resolving,
    GameOverWin,
    GameOverLose,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChangeType {
    #[default]
    Deal,
    Shuffle,
    Reveal,
    Conceal,
    Match,
    Mismatch,
    ShowPlayable,
    HidePlayable,
    OptionalPause,
    UpdateBudget,
    Message,
    GameOver,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    #[default]
    Board,
    Budget,
    Message,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub change_type: ChangeType,
    #[serde(rename(serialize = "id", deserialize = "id"))]
    pub object_id: i32,
    pub dest: Location,
    pub offset: usize,
    pub length: usize,
    pub highlight: bool,
    pub message: Option<String>,
    pub tile: Option<Tile>,
}

/// One-shot token for the scheduled re-hide of a mismatched pair. The host
/// waits out `delay` and hands the token back via `fire_rehide`. Its
/// generation binds it to the session it was scheduled for; a token from a
/// superseded session is ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RehideTimer {
    generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMatchGame {
    // Current machine state
    pub state: State,
    // Board in display order
    pub tiles: Vec<Tile>,
    // Tiles of the pair currently under evaluation (at most two, no duplicates)
    pub selected: Vec<Tile>,
    // Ids of tiles locked in by a successful match
    pub matched_ids: HashSet<i32>,
    // Flip actions left before a forced loss
    pub flips_remaining: i32,
    // Some(true) = win, Some(false) = loss
    pub winner: Option<bool>,
    // List of list of animations to run after a move is made to get from the current state to the next state
    pub changes: Vec<Vec<Change>>,
    // When running simulations we save time by not creating vecs and structs to be added to the change animation list
    pub no_changes: bool,
    // Catalog-order deck, reshuffled into a fresh board on every reset
    catalog: Vec<Tile>,
    // Budget a new session starts with
    initial_budget: i32,
    // Bumped on every reset so a timer scheduled against a superseded session no-ops
    generation: u64,
    // The scheduled re-hide, if a mismatched pair is on display
    pending_rehide: Option<RehideTimer>,
}

impl MemoryMatchGame {
    pub fn new() -> Self {
        Self::with_options(&all::<Symbol>().collect::<Vec<_>>(), DEFAULT_FLIP_BUDGET)
    }

    /// A fresh session over one pair per symbol in `pair_symbols`.
    pub fn with_options(pair_symbols: &[Symbol], flip_budget: i32) -> Self {
        Self::start(deck::build_catalog(pair_symbols), flip_budget, true)
    }

    /// A session over an explicit tile set laid out in the given display
    /// order. Panics if the tiles do not form a paired deck.
    pub fn from_tiles(tiles: Vec<Tile>, flip_budget: i32) -> Self {
        deck::assert_paired(&tiles);
        Self::start(tiles, flip_budget, false)
    }

    fn start(catalog: Vec<Tile>, flip_budget: i32, shuffled: bool) -> Self {
        let mut game = Self {
            state: State::Idle,
            tiles: vec![],
            selected: vec![],
            matched_ids: HashSet::new(),
            flips_remaining: flip_budget,
            winner: None,
            changes: vec![],
            no_changes: false,
            catalog,
            initial_budget: flip_budget,
            generation: 0,
            pending_rehide: None,
        };
        game.deal(shuffled);
        game
    }

    pub fn with_no_changes(&mut self) {
        self.no_changes = true;
    }

    // Called at the start of a session and on every reset
    fn deal(&mut self, shuffled: bool) {
        self.tiles = if shuffled {
            deck::shuffle(&self.catalog, &mut thread_rng())
        } else {
            self.catalog.clone()
        };
        let shuffle_index = self.new_change();
        self.add_change(
            shuffle_index,
            Change {
                change_type: ChangeType::Shuffle,
                object_id: -1,
                dest: Location::Board,
                ..Default::default()
            },
        );
        let deal_index = self.new_change();
        let length = self.tiles.len();
        let board = self.tiles.clone();
        for (offset, tile) in board.iter().enumerate() {
            self.add_change(
                deal_index,
                Change {
                    change_type: ChangeType::Deal,
                    object_id: tile.id,
                    dest: Location::Board,
                    offset,
                    length,
                    ..Default::default()
                },
            );
        }
        self.update_budget();
        self.show_playable();
    }

    /// Ids a flip request would currently be accepted for. Empty while a pair
    /// is resolving, once the budget is exhausted, and after game over.
    pub fn get_moves(&self) -> Vec<i32> {
        match self.state {
            State::GameOverWin | State::GameOverLose | State::Resolving => vec![],
            State::Idle | State::OneSelected => {
                if self.flips_remaining <= 0 {
                    return vec![];
                }
                self.tiles
                    .iter()
                    .map(|t| t.id)
                    .filter(|id| !self.matched_ids.contains(id))
                    .filter(|id| !self.selected.iter().any(|s| s.id == *id))
                    .collect()
            }
        }
    }

    /// Flip request for the tile with `tile_id`. Requests outside
    /// `get_moves` are ignored with no state change and no animations.
    pub fn select_tile(&mut self, tile_id: i32) {
        self.changes = vec![vec![]];
        if !self.get_moves().contains(&tile_id) {
            return;
        }
        let tile = *self
            .tiles
            .iter()
            .find(|t| t.id == tile_id)
            .expect("selectable tile is on the board");

        self.selected.push(tile);
        self.flips_remaining -= 1;
        let flip_index = self.changes.len() - 1;
        self.add_change(
            flip_index,
            Change {
                change_type: ChangeType::Reveal,
                object_id: tile.id,
                dest: Location::Board,
                offset: self.tile_offset(tile.id),
                tile: Some(tile),
                ..Default::default()
            },
        );
        self.update_budget();

        if self.selected.len() < 2 {
            self.state = State::OneSelected;
            self.show_playable();
            return;
        }

        // Second flip of the pair: resolve match, win and loss synchronously
        // before anything is scheduled
        let first = self.selected[0];
        let second = self.selected[1];
        let matched = first.symbol == second.symbol;
        if matched {
            // Matched tiles live in matched_ids from here on and render
            // face up without waiting for any delay
            self.matched_ids.insert(first.id);
            self.matched_ids.insert(second.id);
            self.selected.clear();
            let match_index = self.new_change();
            for tile in [first, second] {
                self.add_change(
                    match_index,
                    Change {
                        change_type: ChangeType::Match,
                        object_id: tile.id,
                        dest: Location::Board,
                        offset: self.tile_offset(tile.id),
                        tile: Some(tile),
                        ..Default::default()
                    },
                );
            }
        } else {
            let mismatch_index = self.new_change();
            for tile in [first, second] {
                self.add_change(
                    mismatch_index,
                    Change {
                        change_type: ChangeType::Mismatch,
                        object_id: tile.id,
                        dest: Location::Board,
                        offset: self.tile_offset(tile.id),
                        highlight: true,
                        tile: Some(tile),
                        ..Default::default()
                    },
                );
            }
        }

        // Win takes precedence when the final flip both completes the last
        // pair and exhausts the budget
        if self.matched_ids.len() == self.tiles.len() {
            self.game_over(true);
            return;
        }
        if self.flips_remaining == 0 {
            self.game_over(false);
            return;
        }

        if matched {
            self.state = State::Idle;
            self.show_playable();
            return;
        }

        // Mismatch stays on display until the one-shot re-hide fires; until
        // then every flip request is rejected, so at most one pair is ever
        // under evaluation
        self.state = State::Resolving;
        self.pending_rehide = Some(RehideTimer {
            generation: self.generation,
            delay: FLIP_DELAY,
        });
        let pause_index = self.new_change();
        self.add_change(
            pause_index,
            Change {
                change_type: ChangeType::OptionalPause,
                object_id: -1,
                dest: Location::Board,
                ..Default::default()
            },
        );
        self.hide_playable();
    }

    /// Hands the scheduled re-hide to the host, which waits out
    /// `timer.delay` and then calls `fire_rehide`.
    pub fn take_rehide_timer(&mut self) -> Option<RehideTimer> {
        self.pending_rehide.take()
    }

    /// The only path from Resolving back to Idle: hides the mismatched pair.
    /// A timer scheduled against a session that has since been reset is a
    /// no-op, as is a token that already fired.
    pub fn fire_rehide(&mut self, timer: RehideTimer) {
        if timer.generation != self.generation || self.state != State::Resolving {
            return;
        }
        self.changes = vec![vec![]];
        let conceal_index = self.changes.len() - 1;
        let cleared: Vec<Tile> = self.selected.drain(..).collect();
        for tile in cleared {
            self.add_change(
                conceal_index,
                Change {
                    change_type: ChangeType::Conceal,
                    object_id: tile.id,
                    dest: Location::Board,
                    offset: self.tile_offset(tile.id),
                    ..Default::default()
                },
            );
        }
        self.state = State::Idle;
        self.show_playable();
    }

    /// Replaces the whole session with a freshly shuffled one: full budget,
    /// nothing selected, nothing matched. Any in-flight re-hide is
    /// invalidated and can no longer touch the new session.
    pub fn reset_game(&mut self) {
        self.generation += 1;
        self.pending_rehide = None;
        self.state = State::Idle;
        self.selected.clear();
        self.matched_ids.clear();
        self.flips_remaining = self.initial_budget;
        self.winner = None;
        self.changes = vec![];
        self.deal(true);
    }

    fn game_over(&mut self, won: bool) {
        self.state = if won {
            State::GameOverWin
        } else {
            State::GameOverLose
        };
        self.winner = Some(won);
        let message = if won {
            "You win! All pairs matched.".to_string()
        } else {
            "Game over! Out of flips.".to_string()
        };
        let index = self.new_change();
        self.add_change(
            index,
            Change {
                change_type: ChangeType::Message,
                object_id: -1,
                dest: Location::Message,
                message: Some(message),
                ..Default::default()
            },
        );
        self.add_change(
            index,
            Change {
                change_type: ChangeType::GameOver,
                object_id: -1,
                dest: Location::Board,
                ..Default::default()
            },
        );
    }

    fn tile_offset(&self, tile_id: i32) -> usize {
        self.tiles
            .iter()
            .position(|t| t.id == tile_id)
            .expect("tile is on the board")
    }

    fn update_budget(&mut self) {
        let index = self.changes.len().saturating_sub(1);
        self.add_change(
            index,
            Change {
                change_type: ChangeType::UpdateBudget,
                object_id: -1,
                dest: Location::Budget,
                length: self.flips_remaining as usize,
                ..Default::default()
            },
        );
    }

    #[inline]
    fn new_change(&mut self) -> usize {
        self.changes.push(vec![]);
        self.changes.len() - 1
    }

    #[inline]
    fn add_change(&mut self, index: usize, change: Change) {
        if self.no_changes {
            return;
        }
        self.changes[index].push(change);
    }

    fn show_playable(&mut self) {
        if self.no_changes {
            return;
        }
        let change_index = self.new_change();
        for id in self.get_moves() {
            self.add_change(
                change_index,
                Change {
                    change_type: ChangeType::ShowPlayable,
                    object_id: id,
                    dest: Location::Board,
                    highlight: true,
                    ..Default::default()
                },
            );
        }
    }

    fn hide_playable(&mut self) {
        if self.no_changes {
            return;
        }
        let change_index = self.new_change();
        let hidden: Vec<i32> = self
            .tiles
            .iter()
            .map(|t| t.id)
            .filter(|id| !self.matched_ids.contains(id))
            .collect();
        for id in hidden {
            self.add_change(
                change_index,
                Change {
                    change_type: ChangeType::HidePlayable,
                    object_id: id,
                    dest: Location::Board,
                    ..Default::default()
                },
            );
        }
    }
}

impl Default for MemoryMatchGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::memorymatch::deck::build_catalog;

    fn fixed_game(symbols: &[Symbol], budget: i32) -> MemoryMatchGame {
        // Catalog order lays pairs out adjacently: ids 1,2 share the first
        // symbol, ids 3,4 the second, and so on
        MemoryMatchGame::from_tiles(build_catalog(symbols), budget)
    }

    #[test]
    fn test_new_game_inits_properly() {
        let game = MemoryMatchGame::new();
        assert_eq!(game.tiles.len(), 12);
        assert_eq!(game.state, State::Idle);
        assert!(game.selected.is_empty());
        assert!(game.matched_ids.is_empty());
        assert_eq!(game.flips_remaining, DEFAULT_FLIP_BUDGET);
        assert_eq!(game.winner, None);
        assert_eq!(game.get_moves().len(), 12);
    }

    #[test]
    fn test_first_flip_selects_and_spends_budget() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        assert_eq!(game.state, State::OneSelected);
        assert_eq!(game.selected, vec![game.tiles[0]]);
        assert_eq!(game.flips_remaining, 9);
        // The selected tile is no longer offered
        assert!(!game.get_moves().contains(&1));
    }

    #[test]
    fn test_budget_tracks_accepted_flips_only() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(1); // duplicate, rejected
        game.select_tile(99); // off the board, rejected
        assert_eq!(game.flips_remaining, 9);
        game.select_tile(3); // mismatch
        assert_eq!(game.flips_remaining, 8);
        // Resolving: every request is rejected until the re-hide fires
        game.select_tile(2);
        game.select_tile(4);
        assert_eq!(game.flips_remaining, 8);
        assert_eq!(game.selected.len(), 2);
    }

    #[test]
    fn test_match_locks_in_immediately() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(2);
        assert_eq!(game.matched_ids, HashSet::from([1, 2]));
        // Matched tiles leave the selection as soon as they match
        assert!(game.selected.is_empty());
        assert_eq!(game.state, State::Idle);
        assert!(game.take_rehide_timer().is_none());
        // The matched pair is never offered again
        assert_eq!(game.get_moves(), vec![3, 4]);
    }

    #[test]
    fn test_win_on_last_pair() {
        let mut game = fixed_game(&[Symbol::Watermelon], 2);
        game.select_tile(1);
        game.select_tile(2);
        assert_eq!(game.matched_ids, HashSet::from([1, 2]));
        assert_eq!(game.state, State::GameOverWin);
        assert_eq!(game.winner, Some(true));
        assert!(game.get_moves().is_empty());
    }

    #[test]
    fn test_win_takes_precedence_over_exhausted_budget() {
        // The final flip both completes the last pair and spends the last
        // budget unit
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 4);
        game.select_tile(1);
        game.select_tile(2);
        game.select_tile(3);
        game.select_tile(4);
        assert_eq!(game.flips_remaining, 0);
        assert_eq!(game.state, State::GameOverWin);
        assert_eq!(game.winner, Some(true));
    }

    #[test]
    fn test_loss_when_budget_runs_out() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 2);
        game.select_tile(1); // 🍉
        game.select_tile(3); // 🍌
        assert_eq!(game.flips_remaining, 0);
        assert!(game.matched_ids.is_empty());
        assert_eq!(game.state, State::GameOverLose);
        assert_eq!(game.winner, Some(false));
        // No re-hide is scheduled once the session is over
        assert!(game.take_rehide_timer().is_none());
    }

    #[test]
    fn test_match_on_last_flips_without_full_board_is_a_loss() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 2);
        game.select_tile(1);
        game.select_tile(2);
        assert_eq!(game.matched_ids, HashSet::from([1, 2]));
        assert_eq!(game.state, State::GameOverLose);
        assert_eq!(game.winner, Some(false));
    }

    #[test]
    fn test_terminal_rejects_everything() {
        let mut game = fixed_game(&[Symbol::Watermelon], 2);
        game.select_tile(1);
        game.select_tile(2);
        let snapshot = game.clone();
        game.select_tile(1);
        game.select_tile(2);
        assert_eq!(game.state, snapshot.state);
        assert_eq!(game.selected, snapshot.selected);
        assert_eq!(game.matched_ids, snapshot.matched_ids);
        assert_eq!(game.flips_remaining, snapshot.flips_remaining);
        assert_eq!(game.winner, snapshot.winner);
    }

    #[test]
    fn test_mismatch_then_rehide() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(3);
        assert_eq!(game.state, State::Resolving);
        assert_eq!(game.selected.len(), 2);
        assert!(game.matched_ids.is_empty());

        let timer = game.take_rehide_timer().expect("re-hide scheduled");
        assert_eq!(timer.delay, FLIP_DELAY);
        game.fire_rehide(timer);

        // The re-hide only clears the selection
        assert!(game.selected.is_empty());
        assert_eq!(game.state, State::Idle);
        assert!(game.matched_ids.is_empty());
        assert_eq!(game.flips_remaining, 8);
        assert_eq!(game.get_moves(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rehide_token_fires_once() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(3);
        let timer = game.take_rehide_timer().unwrap();
        game.fire_rehide(timer);
        game.select_tile(2);
        let snapshot = game.clone();
        // Replaying the spent token must not disturb the new selection
        game.fire_rehide(timer);
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_stale_timer_cannot_touch_a_reset_session() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(3);
        let timer = game.take_rehide_timer().unwrap();

        game.reset_game();
        game.select_tile(game.tiles[0].id);
        game.select_tile(game.tiles[1].id);
        let snapshot = game.clone();

        // The timer was scheduled against the session that was discarded
        game.fire_rehide(timer);
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_reset_invalidates_pending_timer() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(3);
        game.reset_game();
        assert!(game.take_rehide_timer().is_none());
    }

    #[test]
    fn test_reset_restores_a_fresh_session() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 6);
        game.select_tile(1);
        game.select_tile(2);
        game.select_tile(3);
        game.reset_game();

        assert_eq!(game.state, State::Idle);
        assert!(game.selected.is_empty());
        assert!(game.matched_ids.is_empty());
        assert_eq!(game.flips_remaining, 6);
        assert_eq!(game.winner, None);

        let mut ids: Vec<i32> = game.tiles.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reset_reshuffles_the_board() {
        let mut game = MemoryMatchGame::new();
        let before: Vec<i32> = game.tiles.iter().map(|t| t.id).collect();
        let mut reordered = false;
        for _ in 0..5 {
            game.reset_game();
            let after: Vec<i32> = game.tiles.iter().map(|t| t.id).collect();
            if after != before {
                reordered = true;
                break;
            }
        }
        assert!(reordered, "five resets never reordered a 12 tile board");
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(2); // matched
        game.select_tile(3);
        let snapshot = game.clone();

        game.select_tile(1); // already matched
        assert_eq!(game.selected, snapshot.selected);
        assert_eq!(game.flips_remaining, snapshot.flips_remaining);
        game.select_tile(3); // already selected
        assert_eq!(game.selected, snapshot.selected);
        assert_eq!(game.flips_remaining, snapshot.flips_remaining);
        game.select_tile(0); // never on the board
        assert_eq!(game.selected, snapshot.selected);
        assert_eq!(game.flips_remaining, snapshot.flips_remaining);
    }

    #[test]
    fn test_moves_empty_while_resolving() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(3);
        assert!(game.get_moves().is_empty());
    }

    #[test]
    fn test_moves_empty_once_budget_is_spent() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 3);
        game.select_tile(1);
        game.select_tile(3);
        let timer = game.take_rehide_timer().unwrap();
        game.fire_rehide(timer);
        // One budget unit left: the orphan flip is accepted, then nothing is
        game.select_tile(2);
        assert_eq!(game.flips_remaining, 0);
        assert!(game.get_moves().is_empty());
        game.select_tile(4);
        assert_eq!(game.selected.len(), 1);
        assert_eq!(game.state, State::OneSelected);
    }

    #[test]
    fn test_flip_changes_carry_the_revealed_tile() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        let flips: Vec<&Change> = game
            .changes
            .iter()
            .flatten()
            .filter(|c| c.change_type == ChangeType::Reveal)
            .collect();
        assert_eq!(flips.len(), 1);
        assert_eq!(flips[0].object_id, 1);
        assert_eq!(
            flips[0].tile,
            Some(Tile {
                id: 1,
                symbol: Symbol::Watermelon
            })
        );
    }

    #[test]
    fn test_rejected_request_emits_no_animations() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(99);
        assert_eq!(game.changes, vec![vec![]]);
    }

    #[test]
    fn test_no_changes_skips_animation_metadata() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.with_no_changes();
        game.select_tile(1);
        game.select_tile(3);
        assert!(game.changes.iter().all(|batch| batch.is_empty()));
        // The state machine itself is unaffected
        assert_eq!(game.state, State::Resolving);
    }

    #[test]
    fn test_serde_round_trip_mid_session() {
        let mut game = fixed_game(&[Symbol::Watermelon, Symbol::Banana], 10);
        game.select_tile(1);
        game.select_tile(3);
        let encoded = serde_json::to_string(&game).unwrap();
        let decoded: MemoryMatchGame = serde_json::from_str(&encoded).unwrap();
        assert_eq!(game, decoded);
    }

    #[test]
    #[should_panic(expected = "expected 2")]
    fn test_unpaired_tiles_are_a_construction_error() {
        let tiles = vec![
            Tile {
                id: 1,
                symbol: Symbol::Cherry,
            },
            Tile {
                id: 2,
                symbol: Symbol::Peach,
            },
        ];
        MemoryMatchGame::from_tiles(tiles, 10);
    }
}
