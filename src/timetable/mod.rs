pub mod evaluator;
pub mod table;

pub use evaluator::{current_and_next, minutes_until, ScheduleStatus};
pub use table::{kadapa, PrayerRecord, TimeField, Timetable};
