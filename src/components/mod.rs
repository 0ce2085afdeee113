pub mod add_task_modal;
pub mod column;
pub mod edit_task_modal;
pub mod task_card;
pub mod view_task_modal;

pub use add_task_modal::AddTaskModal;
pub use column::TaskColumn;
pub use edit_task_modal::EditTaskModal;
pub use task_card::TaskCard;
pub use view_task_modal::ViewTaskModal;
