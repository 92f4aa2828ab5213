//! `SQLite` storage layer.

pub mod database;
pub mod migrations;
pub mod tasks;

pub use database::Database;
pub use tasks::TaskStore;
