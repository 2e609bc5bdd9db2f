use crate::clipboard::{self, ClipboardError, CopyMethod};
use crate::domain::{FormField, Mode, TaskDate, TaskId, UiMode};
use crate::input::Action;
use crate::store::{StoreError, TaskStore};
use anyhow::Result;
use chrono::Local;
use std::time::{Duration, Instant};

/// Add-task form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFormState {
    /// Raw date input, `YYYY-MM-DD`
    pub date: String,
    pub text: String,
    pub field: FormField,
}

impl AddFormState {
    fn new(today: TaskDate) -> Self {
        Self {
            date: today.to_string(),
            text: String::new(),
            field: FormField::Text,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Date => &mut self.date,
            FormField::Text => &mut self.text,
        }
    }
}

/// Blocking message shown over the add form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
    /// Field that gets focus once the alert is dismissed
    pub return_to: FormField,
}

/// State of the share bar's copy button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareStatus {
    Idle,
    /// "Copied!" until the deadline; a new copy replaces the deadline
    Copied { revert_at: Instant },
    Failed(String),
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    /// Task ids of the rows drawn by the last render, top to bottom
    pub row_bindings: Vec<TaskId>,
    pub add_form: Option<AddFormState>,
    pub alert: Option<AlertState>,
    pub pending_delete: Option<TaskId>,
    pub share_status: ShareStatus,
    pub copy_feedback: Duration,
    pub date_separator: char,
}

impl AppState {
    pub fn new(store: TaskStore, date_separator: char, copy_feedback: Duration) -> Self {
        Self {
            store,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            row_bindings: Vec::new(),
            add_form: None,
            alert: None,
            pending_delete: None,
            share_status: ShareStatus::Idle,
            copy_feedback,
            date_separator,
        }
    }

    /// Run a user action; returns true when the app should quit
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::SelectUp => self.move_selection_up(),
            Action::SelectDown => self.move_selection_down(),
            Action::OpenAddForm => self.start_add_task(),
            Action::ToggleTask(id) => {
                self.store.toggle_task(id)?;
            }
            Action::RequestDelete(id) => self.request_delete(id),
            Action::ToggleViewMode => self.toggle_view_mode(),
            Action::CopyShareLink => self.copy_share_link(),
            Action::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Record which task each drawn row shows
    pub fn bind_rows(&mut self, ids: Vec<TaskId>) {
        self.row_bindings = ids;
        self.clamp_selection();
    }

    /// Task bound to the selected row
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.row_bindings.get(self.selected_index).copied()
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.row_bindings.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.row_bindings.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.row_bindings.len() {
            self.selected_index = self.row_bindings.len() - 1;
        }
    }

    /// Open the add form; not available in View mode
    pub fn start_add_task(&mut self) {
        if self.store.mode().is_read_only() {
            return;
        }
        self.add_form = Some(AddFormState::new(Local::now().date_naive().into()));
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.add_form {
            form.field = form.field.next();
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.add_form {
            form.field_mut().push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.add_form {
            form.field_mut().pop();
        }
    }

    /// Submit the add form.
    ///
    /// On success the text is cleared and keeps focus for the next task. On
    /// a validation failure an alert is raised and the form is kept.
    pub fn submit_input_form(&mut self) -> Result<()> {
        let Some(form) = &self.add_form else {
            return Ok(());
        };
        let date = form.date.parse::<TaskDate>().ok();
        let text = form.text.clone();

        match self.store.add_task(date, &text) {
            Ok(_) => {
                if let Some(form) = &mut self.add_form {
                    form.text.clear();
                    form.field = FormField::Text;
                }
                self.selected_index = 0;
                Ok(())
            }
            Err(StoreError::Invalid(invalid)) => {
                self.alert = Some(AlertState {
                    message: invalid.to_string(),
                    return_to: invalid.field(),
                });
                self.ui_mode = UiMode::Alert;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.add_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Close the alert and put focus back on the field it complained about
    pub fn dismiss_alert(&mut self) {
        if let Some(alert) = self.alert.take() {
            if let Some(form) = &mut self.add_form {
                form.field = alert.return_to;
            }
        }
        self.ui_mode = if self.add_form.is_some() {
            UiMode::AddingTask
        } else {
            UiMode::Normal
        };
    }

    /// Ask for confirmation before deleting a task
    pub fn request_delete(&mut self, id: TaskId) {
        if self.store.mode().is_read_only() || self.store.task(id).is_none() {
            return;
        }
        self.pending_delete = Some(id);
        self.ui_mode = UiMode::ConfirmDelete;
    }

    /// Answer the pending delete confirmation
    pub fn answer_delete(&mut self, confirmed: bool) -> Result<()> {
        self.ui_mode = UiMode::Normal;
        if let Some(id) = self.pending_delete.take() {
            if self.store.delete_task(id, |_| confirmed)?.is_some() {
                let remaining: Vec<TaskId> = self.store.tasks().iter().map(|t| t.id).collect();
                self.bind_rows(remaining);
            }
        }
        Ok(())
    }

    pub fn toggle_view_mode(&mut self) {
        if self.store.toggle_view_mode() == Mode::View && self.add_form.is_some() {
            self.cancel_input_form();
        }
    }

    pub fn copy_share_link(&mut self) {
        let result = clipboard::copy_to_clipboard(self.store.share_link());
        self.record_copy_result(result, Instant::now());
    }

    /// Update the copy button after a copy attempt.
    ///
    /// A success restarts the revert deadline; a failure stays visible until
    /// the next attempt.
    pub fn record_copy_result(&mut self, result: Result<CopyMethod, ClipboardError>, now: Instant) {
        match result {
            Ok(method) => {
                tracing::info!(via = method.name(), "Copied share link");
                self.share_status = ShareStatus::Copied {
                    revert_at: now + self.copy_feedback,
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to copy share link");
                self.share_status = ShareStatus::Failed(e.to_string());
            }
        }
    }

    /// Advance time-based UI state
    pub fn tick(&mut self, now: Instant) {
        if let ShareStatus::Copied { revert_at } = self.share_status {
            if now >= revert_at {
                self.share_status = ShareStatus::Idle;
            }
        }
    }

    pub fn copy_button_label(&self) -> &'static str {
        match self.share_status {
            ShareStatus::Copied { .. } => "✓ Copied!",
            _ => "Copy link",
        }
    }
}
