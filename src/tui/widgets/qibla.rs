use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme::Palette;

/// Popup with the one-shot qibla report. Dismissed by any key.
pub fn render(frame: &mut Frame, area: Rect, pal: &Palette, report: &str) {
    let popup_area = Rect {
        x: area.width / 6,
        y: area.height / 3,
        width: area.width * 2 / 3,
        height: (report.lines().count() as u16 + 5).min(area.height),
    };

    frame.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("")];
    for row in report.lines() {
        lines.push(Line::from(Span::styled(format!("  {}", row), pal.bold())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  [any key] close", pal.dim())));

    let block = Block::default()
        .title(Span::styled(" Qibla ", pal.gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pal.amber())
        .style(pal.surface());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
