//! Focus mode: a timed session over the day's tasks.

pub mod engine;
pub mod ticker;

pub use engine::{format_elapsed_hms, FocusEngine, FocusSignal};
pub use ticker::Ticker;
