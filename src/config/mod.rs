//! Configuration management for focusdo.
//!
//! This module handles loading and saving configuration from `~/.focusdo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, FocusConfig, GeneralConfig};
