pub mod deck;
pub mod game;
pub mod status;

// Re-export the main types
pub use deck::{build_catalog, canonical_deck, shuffle, Symbol, Tile};
pub use game::{
    Change, ChangeType, Location, MemoryMatchGame, RehideTimer, State, DEFAULT_FLIP_BUDGET,
    FLIP_DELAY,
};
pub use status::{status, tile_views, Status, TileTag, TileView};
