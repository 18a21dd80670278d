//! Read-only derivations over a game value: the win/loss/in-progress status
//! and the per-tile rows a frontend renders from. Recomputed on every
//! observation, never cached.

use serde::{Deserialize, Serialize};

use super::deck::Symbol;
use super::game::{MemoryMatchGame, State};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Win,
    Loss,
    InProgress { flips_remaining: i32 },
}

/// Status of the session. Win and loss require a terminal game; everything
/// else is in progress, however few moves remain.
pub fn status(game: &MemoryMatchGame) -> Status {
    let terminal = matches!(game.state, State::GameOverWin | State::GameOverLose);
    if terminal && game.matched_ids.len() == game.tiles.len() {
        Status::Win
    } else if terminal {
        Status::Loss
    } else {
        Status::InProgress {
            flips_remaining: game.flips_remaining,
        }
    }
}

/// Presentation tag for a single tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TileTag {
    Matched,
    SelectedPending,
    SelectedMismatched,
    Hidden,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    pub id: i32,
    /// The symbol to render, or None for the hidden placeholder
    pub face: Option<Symbol>,
    pub tag: TileTag,
}

/// One row per tile in display order. A face shows when the tile is matched,
/// part of the pair under evaluation, or the session is over.
pub fn tile_views(game: &MemoryMatchGame) -> Vec<TileView> {
    let terminal = matches!(game.state, State::GameOverWin | State::GameOverLose);
    let mismatched =
        game.selected.len() == 2 && game.selected[0].symbol != game.selected[1].symbol;
    game.tiles
        .iter()
        .map(|tile| {
            let matched = game.matched_ids.contains(&tile.id);
            let selected = game.selected.iter().any(|s| s.id == tile.id);
            let tag = if matched {
                TileTag::Matched
            } else if selected && mismatched {
                TileTag::SelectedMismatched
            } else if selected {
                TileTag::SelectedPending
            } else {
                TileTag::Hidden
            };
            TileView {
                id: tile.id,
                face: (matched || selected || terminal).then_some(tile.symbol),
                tag,
            }
        })
        .collect()
}
