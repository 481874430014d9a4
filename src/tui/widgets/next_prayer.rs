use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::timetable::ScheduleStatus;
use crate::tui::theme::Palette;
use crate::utils::format::format_duration_mins;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    pal: &Palette,
    status: &ScheduleStatus,
    countdown_mins: Option<u32>,
) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", pal.gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pal.border_style())
        .style(pal.surface());

    let current_line = match status.current {
        Some(current) => Line::from(vec![
            Span::styled("  now   ", pal.dim()),
            Span::styled(current.display_name(), pal.green()),
        ]),
        None => Line::from(Span::styled("  before Fajar", pal.dim())),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", status.next.display_name().to_uppercase()),
            pal.gold().add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(mins) = countdown_mins {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled("  in  ", pal.dim()),
            Span::styled(
                format_duration_mins(mins),
                pal.amber().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    content.push(Line::from(""));
    content.push(current_line);

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
