use crate::domain::{format_date, Mode};
use crate::ui::styles::{border_style, button_style, default_style, mode_indicator_style, title_style};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the mode toggle: it names the mode the button switches to
pub fn toggle_button_label(mode: Mode) -> String {
    format!(" [v] {} ", mode.other().label())
}

/// Header line: status dot, status label, today's date, mode toggle
pub fn header_line(mode: Mode, today: NaiveDate, separator: char) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ● ", mode_indicator_style(mode)),
        Span::styled(mode.label(), mode_indicator_style(mode)),
        Span::raw("   "),
        Span::styled(format_date(today, separator), default_style()),
        Span::raw("   "),
        Span::styled(toggle_button_label(mode), button_style()),
    ])
}

/// Render the board header
pub fn render_header(f: &mut Frame, mode: Mode, today: NaiveDate, separator: char, area: Rect) {
    let paragraph = Paragraph::new(header_line(mode, today, separator)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Taskboard ", title_style())),
    );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_toggle_button_names_other_mode() {
        assert_eq!(toggle_button_label(Mode::Edit), " [v] View mode ");
        assert_eq!(toggle_button_label(Mode::View), " [v] Edit mode ");
    }

    #[test]
    fn test_header_line() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let edit = line_text(&header_line(Mode::Edit, today, '.'));
        assert!(edit.contains("Edit mode"));
        assert!(edit.contains("19.10.2026"));
        assert!(edit.contains("[v] View mode"));

        let view = header_line(Mode::View, today, '.');
        assert!(line_text(&view).contains("[v] Edit mode"));
        assert_ne!(view.spans[0].style, header_line(Mode::Edit, today, '.').spans[0].style);
    }
}
