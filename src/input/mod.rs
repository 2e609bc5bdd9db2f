pub mod handler;

pub use handler::handle_key;

use crate::domain::TaskId;

/// A user intent, resolved from a key press against the rendered rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectUp,
    SelectDown,
    OpenAddForm,
    ToggleTask(TaskId),
    RequestDelete(TaskId),
    ToggleViewMode,
    CopyShareLink,
    Quit,
}
