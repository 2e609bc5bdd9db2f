use super::Action;
use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => match normal_mode_action(app, key) {
            Some(action) => app.dispatch(action),
            None => Ok(false),
        },
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_mode(app, key),
        UiMode::Alert => handle_alert_mode(app, key),
    }
}

/// Map a key in normal mode to an action, resolving row actions through the
/// selected row's binding
fn normal_mode_action(app: &AppState, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectDown),

        // Toggle completion of the selected task
        KeyCode::Enter | KeyCode::Char(' ') => app.selected_task_id().map(Action::ToggleTask),

        // Delete the selected task (asks first)
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.selected_task_id().map(Action::RequestDelete)
        }

        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::OpenAddForm),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(Action::ToggleViewMode),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::CopyShareLink),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),

        _ => None,
    }
}

/// Handle keys while the add form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form()?,
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab | KeyCode::BackTab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the delete confirmation modal
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.answer_delete(true)?,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_delete(false)?,
        _ => {}
    }
    Ok(false)
}

/// Any dismiss key closes the alert
fn handle_alert_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mode, Task};
    use crate::location::Location;
    use crate::persistence::storage::MemoryStorage;
    use crate::persistence::write_tasks;
    use crate::store::TaskStore;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        let mut storage = MemoryStorage::default();
        let tasks = vec![
            Task::new(20, "2026-04-02".parse().unwrap(), "Second".to_string()),
            Task::new(10, "2026-04-01".parse().unwrap(), "First".to_string()),
        ];
        write_tasks(&mut storage, "brutalTasks", &tasks).unwrap();
        let location = Location::parse("http://localhost/index.html").unwrap();
        let store = TaskStore::open(Box::new(storage), "brutalTasks", location);
        let mut app = AppState::new(store, '.', Duration::from_secs(2));
        app.bind_rows(vec![20, 10]);
        app
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_toggle_acts_on_bound_row() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.store.task(10).unwrap().completed);
        assert!(!app.store.task(20).unwrap().completed);
    }

    #[test]
    fn test_delete_flow() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.tasks().len(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.tasks().len(), 1);
        assert!(app.store.task(20).is_none());
    }

    #[test]
    fn test_add_form_typing() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('a'));
        for c in "Buy milk".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.store.tasks()[0].text, "Buy milk");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_keys_typed_into_form_are_not_shortcuts() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Char('v'));

        assert_eq!(app.store.mode(), Mode::Edit);
        assert_eq!(app.add_form.as_ref().unwrap().text, "qv");
    }

    #[test]
    fn test_alert_dismissed_by_enter() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::Alert);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.ui_mode, UiMode::Alert);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_mode_toggle_and_quit() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.store.mode(), Mode::View);
        assert_eq!(app.store.location().as_str(), "http://localhost/index.html?mode=view");

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.ui_mode, UiMode::Normal);

        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.store.location().as_str(), "http://localhost/index.html");

        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap());
    }
}
