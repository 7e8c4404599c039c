//! Conway's Game of Life on a fixed-size grid with a zero-filled boundary.

pub mod engine;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod pos;
pub mod snapshot;

pub use engine::{GridEngine, SEED_CELLS, SEED_MIN_HEIGHT, SEED_MIN_WIDTH};
pub use error::{Error, Result};
pub use event::{Controller, Event, EventSink, GridDisplay};
pub use grid::{Cell, Grid};
pub use layout::CellLayout;
pub use pos::Pos2;
pub use snapshot::Snapshot;
