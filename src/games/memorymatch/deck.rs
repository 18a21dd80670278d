use std::collections::{HashMap, HashSet};

use enum_iterator::{all, Sequence};
use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

/// Tile faces for the standard board, one pair per symbol.
#[derive(
    Debug, Clone, Copy, Sequence, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum Symbol {
    Watermelon,
    Banana,
    Grape,
    Strawberry,
    Cherry,
    Peach,
}

impl Symbol {
    pub fn emoji(&self) -> &'static str {
        match self {
            Symbol::Watermelon => "🍉",
            Symbol::Banana => "🍌",
            Symbol::Grape => "🍇",
            Symbol::Strawberry => "🍓",
            Symbol::Cherry => "🍒",
            Symbol::Peach => "🍑",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: i32,
    pub symbol: Symbol,
}

static CANONICAL_DECK: Lazy<Vec<Tile>> =
    Lazy::new(|| build_catalog(&all::<Symbol>().collect::<Vec<_>>()));

/// The full paired deck in catalog order. Reused as the shuffle source for
/// every new board.
pub fn canonical_deck() -> &'static [Tile] {
    &CANONICAL_DECK
}

/// Two tiles per symbol, ids 1..=2P in catalog order.
pub fn build_catalog(pair_symbols: &[Symbol]) -> Vec<Tile> {
    let distinct: HashSet<Symbol> = pair_symbols.iter().copied().collect();
    assert!(
        distinct.len() == pair_symbols.len(),
        "catalog symbols must be distinct"
    );
    let mut tiles = Vec::with_capacity(pair_symbols.len() * 2);
    let mut id = 1;
    for &symbol in pair_symbols {
        for _ in 0..2 {
            tiles.push(Tile { id, symbol });
            id += 1;
        }
    }
    tiles
}

/// Uniform random permutation of the deck. Leaves the input untouched so the
/// canonical deck can be reshuffled on every reset.
pub fn shuffle(tiles: &[Tile], rng: &mut impl Rng) -> Vec<Tile> {
    let mut shuffled = tiles.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Panics unless `tiles` is a well-formed paired deck: even count, every
/// symbol on exactly two tiles, ids unique.
pub fn assert_paired(tiles: &[Tile]) {
    assert!(tiles.len() % 2 == 0, "tile count must be even");
    let ids: HashSet<i32> = tiles.iter().map(|t| t.id).collect();
    assert!(ids.len() == tiles.len(), "tile ids must be unique");
    let mut counts: HashMap<Symbol, usize> = HashMap::new();
    for tile in tiles {
        *counts.entry(tile.symbol).or_insert(0) += 1;
    }
    for (symbol, count) in counts {
        assert!(
            count == 2,
            "symbol {:?} appears on {} tiles, expected 2",
            symbol,
            count
        );
    }
}
