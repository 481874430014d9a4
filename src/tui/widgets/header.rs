use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Palette;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    pal: &Palette,
    location: &str,
    date_line: &str,
    hijri_line: &str,
) {
    let title_line = Line::from(vec![
        Span::styled("  مِحْرَاب  ", pal.gold().add_modifier(Modifier::BOLD)),
        Span::styled("mihrab", pal.gold()),
        Span::styled("  ·  ", pal.dim()),
        Span::styled(location, pal.dim()),
    ]);

    let date_row = Line::from(vec![
        Span::styled(hijri_line, pal.amber()),
        Span::styled("  ·  ", pal.dim()),
        Span::styled(date_line, pal.dim()),
    ]);

    let text = vec![title_line, Line::from(""), date_row];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pal.gold().add_modifier(Modifier::BOLD))
        .style(pal.base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
