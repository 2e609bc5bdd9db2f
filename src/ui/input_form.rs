use crate::app::AppState;
use crate::domain::FormField;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_lines<'a>(label: &'a str, value: &'a str, focused: bool) -> [Line<'a>; 2] {
    let label = if focused {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label)
    };
    let value = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if focused {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);
    [label, value]
}

/// Render the add-task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.add_form {
        let modal_area = create_modal_area(area, 12);

        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw("")];
        lines.extend(field_lines("Date (YYYY-MM-DD):", &form.date, form.field == FormField::Date));
        lines.push(Line::raw(""));
        lines.extend(field_lines("Task:", &form.text, form.field == FormField::Text));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to close"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
