pub mod enums;
pub mod task;

pub use enums::{FormField, Mode, UiMode};
pub use task::{format_date, next_task_id, Task, TaskDate, TaskId};
