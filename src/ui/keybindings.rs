use crate::domain::Mode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the current mode; editing keys are hidden in View mode
pub fn keybinding_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Edit => {
            " ↑/↓ select   a add   Enter/Space done   d delete   v view mode   c copy link   q quit"
        }
        Mode::View => " ↑/↓ select   v edit mode   c copy link   q quit",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: Mode, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(keybinding_hints(mode))).style(hint_style());
    f.render_widget(paragraph, area);
}
