pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod plain;
pub mod share_bar;
pub mod styles;
pub mod task_table;

use crate::app::AppState;
use crate::domain::{TaskId, UiMode};
use chrono::Local;
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_alert_modal, render_confirm_delete_modal};
use ratatui::Frame;
use share_bar::render_share_bar;
use task_table::render_task_table;

/// Main render function - draws the entire UI.
///
/// Reads the store and records the task id behind each drawn row so key
/// handling can act on the row under the cursor.
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);
    let mode = app.store.mode();

    let rows: Vec<TaskId> = app.store.tasks().iter().map(|t| t.id).collect();
    app.bind_rows(rows);

    render_keybindings(f, mode, layout.keybindings_area);
    render_header(
        f,
        mode,
        Local::now().date_naive(),
        app.date_separator,
        layout.header_area,
    );
    render_task_table(f, app, layout.tasks_area);
    render_share_bar(f, app, layout.share_area);

    if app.add_form.is_some() {
        render_input_form(f, app, size);
    }

    match app.ui_mode {
        UiMode::ConfirmDelete => render_confirm_delete_modal(f, app, size),
        UiMode::Alert => render_alert_modal(f, app, size),
        UiMode::Normal | UiMode::AddingTask => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::location::Location;
    use crate::persistence::storage::MemoryStorage;
    use crate::persistence::{seed_demo_tasks, write_tasks};
    use crate::store::TaskStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn app_with(storage: MemoryStorage, url: &str) -> AppState {
        let store = TaskStore::open(Box::new(storage), "brutalTasks", Location::parse(url).unwrap());
        AppState::new(store, '.', Duration::from_secs(2))
    }

    fn demo_app(url: &str) -> AppState {
        let mut storage = MemoryStorage::default();
        seed_demo_tasks(&mut storage, "brutalTasks").unwrap();
        app_with(storage, url)
    }

    fn draw(app: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_demo_board() {
        let mut app = demo_app("http://localhost/index.html");
        let screen = draw(&mut app);

        assert!(screen.contains("Edit mode"));
        assert!(screen.contains("[v] View mode"));
        assert!(screen.contains("Tasks (5)"));
        // 2026-02-29 rolls over to the first of March
        assert!(screen.contains("01.03.2026"));
        assert!(screen.contains("[x] 28.02.2026"));
        assert!(screen.contains("Deploy the board"));
        assert!(screen.contains("mark done"));
        assert!(screen.contains("http://localhost/index.html?mode=view&v="));
        assert_eq!(app.row_bindings, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_render_view_mode() {
        let mut app = demo_app("http://localhost/index.html?mode=view");
        let screen = draw(&mut app);

        assert!(screen.contains("View mode"));
        assert!(screen.contains("[v] Edit mode"));
        assert!(!screen.contains("mark done"));
        assert!(!screen.contains("a add"));
    }

    #[test]
    fn test_render_empty_state() {
        let mut app = app_with(MemoryStorage::default(), "http://localhost/index.html");
        let screen = draw(&mut app);

        assert!(screen.contains("No tasks yet"));
        assert!(screen.contains("Tasks (0)"));
        assert!(app.row_bindings.is_empty());
    }

    #[test]
    fn test_render_after_delete_rebinds_rows() {
        let mut storage = MemoryStorage::default();
        let tasks = vec![
            Task::new(2, "2026-04-02".parse().unwrap(), "Keep me".to_string()),
            Task::new(1, "2026-04-01".parse().unwrap(), "Drop me".to_string()),
        ];
        write_tasks(&mut storage, "brutalTasks", &tasks).unwrap();
        let mut app = app_with(storage, "http://localhost/index.html");

        draw(&mut app);
        app.move_selection_down();
        app.request_delete(app.selected_task_id().unwrap());
        let screen = draw(&mut app);
        assert!(screen.contains("Delete task?"));

        app.answer_delete(true).unwrap();
        let screen = draw(&mut app);
        assert!(!screen.contains("Drop me"));
        assert_eq!(app.row_bindings, vec![2]);
        assert_eq!(app.selected_task_id(), Some(2));
    }

    #[test]
    fn test_render_form_and_alert() {
        let mut app = demo_app("http://localhost/index.html");
        app.start_add_task();
        let screen = draw(&mut app);
        assert!(screen.contains("Add Task"));

        app.submit_input_form().unwrap();
        let screen = draw(&mut app);
        assert!(screen.contains("Enter the task text!"));
    }

    #[test]
    fn test_render_copy_feedback() {
        let mut app = demo_app("http://localhost/index.html");
        app.record_copy_result(Ok(crate::clipboard::CopyMethod::Osc52), Instant::now());

        let screen = draw(&mut app);
        assert!(screen.contains("Copied!"));
    }
}
