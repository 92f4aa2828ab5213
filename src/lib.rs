//! focusdo - a to-do list with a distraction-free focus mode
//!
//! This crate provides task capture, day/week/later lists, and timed
//! focus sessions over today's tasks, all from the terminal.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod focus;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FocusdoError;
pub use storage::TaskStore;
