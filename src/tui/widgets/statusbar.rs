use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::ThemeName;
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, pal: &Palette, theme: ThemeName) {
    let theme_hint = format!(" theme {}  ", theme.icon());
    let hints = [
        ("[t]", theme_hint.as_str()),
        ("[g]", " qibla  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, pal.gold()));
        spans.push(Span::styled(*label, pal.dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
