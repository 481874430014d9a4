use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::tui::theme::Palette;

/// The live clock, redrawn every tick.
pub fn render(frame: &mut Frame, area: Rect, pal: &Palette, time_line: &str) {
    let block = Block::default()
        .title(Span::styled(" Clock ", pal.gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pal.border_style())
        .style(pal.surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let clock = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(pal.gold())
        .lines(vec![time_line.to_string().into()])
        .build();

    frame.render_widget(clock, inner);
}
