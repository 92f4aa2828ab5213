//! Command-line interface for focusdo.

pub mod args;
pub mod commands;
