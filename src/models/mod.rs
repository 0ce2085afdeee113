pub mod task;

// Export the model types for use throughout the app
pub use task::{Priority, Task, TaskDraft, TimeOfDay};
