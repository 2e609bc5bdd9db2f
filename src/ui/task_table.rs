use crate::app::AppState;
use crate::domain::{Mode, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, done_text_style, header_row_style, hint_style,
    selected_style, title_style,
};
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

/// Completion cell: check box plus the completion date when done
pub fn completion_label(task: &Task, separator: char) -> String {
    match (task.completed, task.completed_date) {
        (true, Some(done)) => format!("[x] {}", done.display_with(separator)),
        (true, None) => "[x]".to_string(),
        (false, _) => "[ ]".to_string(),
    }
}

/// Action hints for a row (toggle, delete)
pub fn action_label(task: &Task, mode: Mode) -> &'static str {
    match (mode, task.completed) {
        (Mode::View, _) => "",
        (Mode::Edit, true) => "⏎ mark undone · d delete",
        (Mode::Edit, false) => "⏎ mark done · d delete",
    }
}

fn task_row(task: &Task, mode: Mode, separator: char) -> Row<'static> {
    let (text_style, check_style) = if task.completed {
        (done_text_style(), done_style())
    } else {
        (default_style(), default_style())
    };

    Row::new(vec![
        Cell::from(task.date.display_with(separator)),
        Cell::from(Span::styled(task.text.clone(), text_style)),
        Cell::from(Span::styled(completion_label(task, separator), check_style)),
        Cell::from(Span::styled(action_label(task, mode), hint_style())),
    ])
}

/// Render the task table, or the empty state when there are no tasks
pub fn render_task_table(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.store.tasks();
    let mode = app.store.mode();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(format!(" Tasks ({}) ", tasks.len()), title_style()));

    if tasks.is_empty() {
        let hint = match mode {
            Mode::Edit => "No tasks yet. Press [a] to add one.",
            Mode::View => "No tasks yet.",
        };
        let empty = Paragraph::new(vec![Line::raw(""), Line::styled(hint, hint_style())])
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = tasks
        .iter()
        .map(|task| task_row(task, mode, app.date_separator))
        .collect();
    let header = Row::new(vec!["Due", "Task", "Done", ""]).style(header_row_style());

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(26),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(selected_style())
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(table, area, &mut state);
}
