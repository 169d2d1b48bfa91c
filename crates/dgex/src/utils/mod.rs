//! Utility modules shared by the components.

pub mod formatting;
pub mod signal_cell;

pub use formatting::format_grouped;
pub use signal_cell::{SignalCell, SignalExt};
