//! `rollbook-layout` — alphabetical grouping and the paginated index grid.
//!
//! Pure engine crate: consumes reconciled students, emits letter groups
//! and grid coordinates for an external renderer. No IO dependencies.

pub mod config;
pub mod cursor;
pub mod error;
pub mod group;

pub use config::{LayoutConfig, ENTRY_ROWS, GROUP_WIDTH, HEADER_ROWS};
pub use cursor::{EntryPosition, GridPosition, HeaderPosition, PageCursor};
pub use cursor::{lay_out, PlacedEntry, PlacedGroup};
pub use error::LayoutError;
pub use group::{letter_groups, LetterGroup, LetterGroups};
