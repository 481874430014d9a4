use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::PrayerKey;
use crate::timetable::{ScheduleStatus, Timetable};
use crate::tui::theme::Palette;
use crate::utils::format::{display_value, pad_columns, TIME_PLACEHOLDER};

/// Display order of the cards: the five daily prayers, then Juma.
pub const CARD_ORDER: [PrayerKey; 6] = [
    PrayerKey::Fajar,
    PrayerKey::Zohar,
    PrayerKey::Asar,
    PrayerKey::Maghrib,
    PrayerKey::Isha,
    PrayerKey::Juma,
];

/// View-model for one rendered card. Rows are populated once at startup;
/// the current/next markers are reapplied from scratch every frame.
#[derive(Debug, Clone)]
pub struct PrayerCard {
    pub key: PrayerKey,
    pub rows: Vec<(String, String)>,
}

/// One-time population pass. A key missing from the timetable gets no card
/// at all; a missing field value renders as the placeholder.
pub fn build_cards(table: &Timetable) -> Vec<PrayerCard> {
    CARD_ORDER
        .iter()
        .filter_map(|&key| {
            let record = table.get(key)?;
            let rows = record
                .fields
                .iter()
                .map(|f| (f.label.to_string(), display_value(f.value)))
                .collect();
            Some(PrayerCard { key, rows })
        })
        .collect()
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    pal: &Palette,
    cards: &[PrayerCard],
    status: &ScheduleStatus,
) {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let mut cells: Vec<Rect> = Vec::with_capacity(6);
    for row in row_areas.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        cells.extend(cols.iter().copied());
    }

    for (card, cell) in cards.iter().zip(cells) {
        render_card(frame, cell, pal, card, status);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    pal: &Palette,
    card: &PrayerCard,
    status: &ScheduleStatus,
) {
    let is_current = status.current == Some(card.key);
    let is_next = status.next == card.key;

    let (border_style, marker) = if is_current {
        (pal.green().add_modifier(Modifier::BOLD), " · now")
    } else if is_next {
        (pal.amber().add_modifier(Modifier::BOLD), " · next")
    } else {
        (pal.border_style(), "")
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {}{} ", card.key.display_name(), marker),
            border_style,
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(pal.surface());

    let lines: Vec<Line> = card
        .rows
        .iter()
        .map(|(label, value)| {
            let value_style = if value == TIME_PLACEHOLDER {
                pal.dim()
            } else {
                pal.bold()
            };
            Line::from(vec![
                Span::styled(format!("  {}", pad_columns(label, 16)), pal.dim()),
                Span::styled(value.clone(), value_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::{kadapa, PrayerRecord, TimeField, Timetable};

    #[test]
    fn test_build_cards_covers_all_kadapa_prayers() {
        let cards = build_cards(&kadapa());
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].key, PrayerKey::Fajar);
        assert_eq!(cards[5].key, PrayerKey::Juma);
    }

    #[test]
    fn test_missing_prayer_gets_no_card() {
        let table = Timetable::new(
            "test",
            vec![PrayerRecord {
                key: PrayerKey::Fajar,
                fields: vec![TimeField {
                    name: "awwal",
                    label: "Awwal",
                    value: Some("05:25"),
                }],
            }],
        );
        let cards = build_cards(&table);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].key, PrayerKey::Fajar);
    }

    #[test]
    fn test_absent_values_render_as_placeholder() {
        let cards = build_cards(&kadapa());
        let fajar = &cards[0];
        assert_eq!(fajar.rows[0], ("Awwal".to_string(), "05:25".to_string()));
        assert_eq!(fajar.rows[1], ("Jamaat".to_string(), "--:--".to_string()));
    }
}
