use crate::domain::{format_date, Mode};
use crate::store::TaskStore;
use crate::ui::task_table::completion_label;
use chrono::NaiveDate;

/// Plain-text rendering of the board for non-interactive output
pub fn render_plain(store: &TaskStore, today: NaiveDate, separator: char) -> String {
    let mode = store.mode();
    let mut output = format!("● {}   {}\n", mode.label(), format_date(today, separator));
    if mode == Mode::View {
        output.push_str("(read-only)\n");
    }
    output.push('\n');

    if store.tasks().is_empty() {
        output.push_str("No tasks yet.\n");
        return output;
    }

    for task in store.tasks() {
        output.push_str(&format!(
            "{:>13}  {}  {:<14}  {}\n",
            task.id,
            task.date.display_with(separator),
            completion_label(task, separator),
            task.text
        ));
    }
    output
}
