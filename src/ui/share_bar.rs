use crate::app::{AppState, ShareStatus};
use crate::ui::styles::{
    border_style, button_style, default_style, done_style, error_style, hint_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the share link, its copy button and the current page location
pub fn render_share_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let button_style = match app.share_status {
        ShareStatus::Copied { .. } => done_style(),
        _ => button_style(),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(app.store.share_link().to_string(), default_style()),
        Span::raw("  "),
        Span::styled(format!(" [c] {} ", app.copy_button_label()), button_style),
    ])];
    lines.push(Line::styled(
        format!("page: {}", app.store.location().as_str()),
        hint_style(),
    ));

    if let ShareStatus::Failed(message) = &app.share_status {
        lines.push(Line::styled(message.clone(), error_style()));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Share (read-only link) ", title_style())),
    );
    f.render_widget(paragraph, area);
}
