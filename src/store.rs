use crate::domain::{next_task_id, FormField, Mode, Task, TaskDate, TaskId};
use crate::location::Location;
use crate::persistence::{read_stored_tasks, write_tasks, Storage, StoredTasks};
use chrono::Local;
use thiserror::Error;

/// Rejected add-task input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter the task text!")]
    EmptyText,
    #[error("Pick a date!")]
    MissingDate,
}

impl ValidationError {
    /// The form field that needs fixing
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::EmptyText => FormField::Text,
            ValidationError::MissingDate => FormField::Date,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Owner of the task list and the board mode.
///
/// Every mutation rewrites the whole list to storage and regenerates the
/// share link.
pub struct TaskStore {
    tasks: Vec<Task>,
    mode: Mode,
    location: Location,
    share_link: String,
    storage: Box<dyn Storage>,
    storage_key: String,
}

impl TaskStore {
    /// Open the store: load persisted tasks and take the mode from the location
    pub fn open(storage: Box<dyn Storage>, storage_key: &str, location: Location) -> Self {
        let mode = location.mode();
        let share_link = location.share_link(Local::now().timestamp_millis());
        let mut store = Self {
            tasks: Vec::new(),
            mode,
            location,
            share_link,
            storage,
            storage_key: storage_key.to_string(),
        };
        store.load();
        store
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// Missing data leaves the list as it is; unreadable data counts as an
    /// empty list.
    pub fn load(&mut self) {
        match read_stored_tasks(self.storage.as_ref(), &self.storage_key) {
            Ok(StoredTasks::Tasks(mut tasks)) => {
                for task in tasks.iter_mut() {
                    if task.normalize() {
                        tracing::warn!(id = task.id, completed = task.completed, "Fixed completion date of stored task");
                    }
                }
                tracing::debug!(count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
            }
            Ok(StoredTasks::Missing) => {
                tracing::debug!(key = %self.storage_key, "No stored tasks");
            }
            Ok(StoredTasks::Malformed(reason)) => {
                tracing::warn!(%reason, "Stored tasks are malformed, starting with an empty list");
                self.tasks.clear();
            }
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "Failed to read stored tasks, starting with an empty list");
                self.tasks.clear();
            }
        }
    }

    /// Write the full list to storage and refresh the share link
    pub fn save(&mut self) -> Result<(), StoreError> {
        write_tasks(self.storage.as_mut(), &self.storage_key, &self.tasks)?;
        self.regenerate_share_link();
        Ok(())
    }

    /// Add a task at the top of the list, returning its id
    pub fn add_task(&mut self, date: Option<TaskDate>, text: &str) -> Result<TaskId, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText.into());
        }
        let Some(date) = date else {
            return Err(ValidationError::MissingDate.into());
        };

        let id = next_task_id(&self.tasks, Local::now().timestamp_millis());
        self.tasks.insert(0, Task::new(id, date, text.to_string()));
        tracing::info!(id, %date, "Added task");
        self.save()?;
        Ok(id)
    }

    /// Flip completion of a task; ignored in View mode and for unknown ids.
    ///
    /// Returns whether anything changed.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<bool, StoreError> {
        self.toggle_task_on(id, Local::now().date_naive().into())
    }

    fn toggle_task_on(&mut self, id: TaskId, today: TaskDate) -> Result<bool, StoreError> {
        if self.mode.is_read_only() {
            return Ok(false);
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };

        task.toggle(today);
        tracing::info!(id, completed = task.completed, "Toggled task");
        self.save()?;
        Ok(true)
    }

    /// Delete a task after `confirm` approves it; ignored in View mode and
    /// for unknown ids.
    ///
    /// Returns the removed task.
    pub fn delete_task<F>(&mut self, id: TaskId, confirm: F) -> Result<Option<Task>, StoreError>
    where
        F: FnOnce(&Task) -> bool,
    {
        if self.mode.is_read_only() {
            return Ok(None);
        }
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        if !confirm(&self.tasks[index]) {
            return Ok(None);
        }

        let removed = self.tasks.remove(index);
        tracing::info!(id, "Deleted task");
        self.save()?;
        Ok(Some(removed))
    }

    /// Switch between Edit and View, rewriting the location query
    pub fn toggle_view_mode(&mut self) -> Mode {
        self.mode = self.mode.other();
        self.location.set_mode(self.mode);
        self.regenerate_share_link();
        tracing::info!(mode = ?self.mode, location = %self.location.as_str(), "Switched mode");
        self.mode
    }

    fn regenerate_share_link(&mut self) {
        self.share_link = self.location.share_link(Local::now().timestamp_millis());
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn share_link(&self) -> &str {
        &self.share_link
    }
}
