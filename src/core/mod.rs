//! Core domain types and controllers.

pub mod controller;
pub mod datetime;
pub mod task;
pub mod traits;
pub mod watch;

pub use controller::TaskController;
pub use task::{Category, Priority, Task, TaskDraft};
pub use traits::TaskRepository;
pub use watch::{TaskPublisher, TaskWatch};
