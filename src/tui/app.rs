use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::repository::ThemeRepo;
use crate::location::{qibla_report, ConfigLocation, LocationSource};
use crate::models::ThemeName;
use crate::timetable::{current_and_next, kadapa, minutes_until, ScheduleStatus, Timetable};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme::Palette;
use crate::tui::widgets::cards::{build_cards, PrayerCard};
use crate::tui::widgets::{cards, clock, header, next_prayer, qibla, statusbar};
use crate::utils::format;
use crate::utils::hijri;

pub struct App {
    pub config: AppConfig,
    pub theme: ThemeName,
    pub palette: Palette,
    pub timetable: Timetable,
    pub cards: Vec<PrayerCard>,
    pub location: Option<ConfigLocation>,

    // Rendered lines, refreshed on tick
    pub time_line: String,
    pub date_line: String,
    pub hijri_line: String,
    hijri_day: NaiveDate,

    pub status: ScheduleStatus,
    pub countdown_mins: Option<u32>,

    pub qibla_popup: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, theme: ThemeName) -> Self {
        let timetable = kadapa();
        let cards = build_cards(&timetable);
        let location = Some(ConfigLocation::from_config(&config.location));

        let now = Local::now().naive_local();
        let status = current_and_next(&timetable, now.time());
        let countdown_mins = minutes_until(&timetable, status.next, now.time());

        App {
            config,
            theme,
            palette: Palette::for_theme(theme),
            cards,
            location,
            time_line: format::clock_line(now),
            date_line: format::date_line(now),
            hijri_line: hijri::approximate_date(),
            hijri_day: now.date(),
            status,
            countdown_mins,
            timetable,
            qibla_popup: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn tick(&mut self) {
        self.refresh(Local::now().naive_local());
    }

    /// One render tick: clock, date, highlighting, countdown. The Hijri
    /// line only refreshes when the calendar day rolls over.
    fn refresh(&mut self, now: NaiveDateTime) {
        self.time_line = format::clock_line(now);
        self.date_line = format::date_line(now);
        self.status = current_and_next(&self.timetable, now.time());
        self.countdown_mins = minutes_until(&self.timetable, self.status.next, now.time());

        if now.date() != self.hijri_day {
            self.hijri_line = hijri::approximate_date();
            self.hijri_day = now.date();
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        // Ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }

        // An open qibla popup swallows the key that closes it
        if self.qibla_popup.is_some() {
            self.qibla_popup = None;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('t') => {
                self.toggle_theme(conn);
            }
            KeyCode::Char('g') => {
                self.open_qibla();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }

    /// Flip the palette and persist the choice. A failed write keeps the
    /// in-memory flip so the UI still responds.
    fn toggle_theme(&mut self, conn: &Connection) {
        self.theme = self.theme.toggled();
        self.palette = Palette::for_theme(self.theme);
        if let Err(e) = ThemeRepo::store(conn, self.theme) {
            log::warn!("could not persist theme preference: {}", e);
        }
    }

    fn open_qibla(&mut self) {
        let source = self.location.as_ref().map(|l| l as &dyn LocationSource);
        self.qibla_popup = Some(qibla_report(source));
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Block::default().style(self.palette.base()), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer[0],
            &self.palette,
            &self.config.location.name,
            &self.date_line,
            &self.hijri_line,
        );
        statusbar::render(frame, outer[2], &self.palette, self.theme);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(outer[1]);

        cards::render(frame, columns[0], &self.palette, &self.cards, &self.status);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),  // clock
                Constraint::Length(10), // next prayer
                Constraint::Min(0),
            ])
            .split(columns[1]);

        clock::render(frame, right[0], &self.palette, &self.time_line);
        next_prayer::render(
            frame,
            right[1],
            &self.palette,
            &self.status,
            self.countdown_mins,
        );

        if self.show_help {
            self.draw_help_overlay(frame);
        }

        if let Some(report) = &self.qibla_popup {
            qibla::render(frame, area, &self.palette, report);
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let pal = &self.palette;

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                pal.gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [t]    ", pal.gold()),
                Span::styled("Toggle light/dark theme", pal.dim()),
            ]),
            Line::from(vec![
                Span::styled("  [g]    ", pal.gold()),
                Span::styled("Qibla report for your location", pal.dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]    ", pal.gold()),
                Span::styled("Toggle help", pal.dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]  ", pal.gold()),
                Span::styled("Quit", pal.dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", pal.gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(pal.gold())
            .style(pal.surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let theme = ThemeRepo::load(&conn)?;
    let tick_ms = config.ui.tick_ms;
    let mut app = App::new(config, theme);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_ms);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick();
            }
        }
    }

    ratatui::restore();
    Ok(())
}
