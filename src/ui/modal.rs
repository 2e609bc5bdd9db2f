use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn render_modal_box(f: &mut Frame, title: &str, lines: Vec<Line>, area: Rect) {
    let modal_area = create_modal_area(area, 9);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the delete confirmation
pub fn render_confirm_delete_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(task) = app.pending_delete.and_then(|id| app.store.task(id)) else {
        return;
    };

    let lines = vec![
        Line::raw(""),
        Line::raw("  Delete task?"),
        Line::raw(format!("  \"{}\"", task.text)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Delete  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Keep"),
        ]),
    ];

    render_modal_box(f, " Confirm ", lines, area);
}

/// Render a blocking validation alert
pub fn render_alert_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(alert) = &app.alert {
        let lines = vec![
            Line::raw(""),
            Line::styled(format!("  {}", alert.message), error_style()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [Enter]", modal_title_style()),
                Span::raw(" OK"),
            ]),
        ];

        render_modal_box(f, " ⚠ Check the form ", lines, area);
    }
}
