//! Library layer for the passenger table: the load-and-render state machine,
//! display-target abstractions, row rendering, and localized labels.
//!
//! Wraps the `passengers_api` client; nothing here talks HTTP directly.

pub mod display;
pub mod error;
pub mod labels;
pub mod loader;
pub mod render;
pub mod trigger;

pub use passengers_api;
pub use passengers_api::types;

pub use display::{HtmlTableBody, LoadingIndicator, TableBody, VisibilityFlag};
pub use error::Error;
pub use labels::{Labels, Language};
pub use loader::{LoadOutcome, LoadState, PassengerTableLoader};
pub use render::{PassengerRow, TableRow, COLUMN_COUNT, COLUMN_HEADERS};
pub use trigger::{bind_trigger, BoundTrigger};
