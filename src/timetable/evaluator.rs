use chrono::{NaiveTime, Timelike};

use crate::models::PrayerKey;
use crate::timetable::table::Timetable;

/// Where the day stands relative to the five daily prayers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStatus {
    pub current: Option<PrayerKey>,
    pub next: PrayerKey,
}

/// Determine the current and next prayer for `now`. Seconds are ignored.
///
/// A prayer whose `awwal` is missing or unparseable is dropped from the
/// ordering entirely and can never be picked by the scan. Past the last
/// start of the day the answer is always Isha/Fajar, whether or not Isha
/// itself survived the filter; before the first start there is no current
/// prayer and the next one is always Fajar.
pub fn current_and_next(table: &Timetable, now: NaiveTime) -> ScheduleStatus {
    let now_minutes = now.hour() * 60 + now.minute();

    let starts: Vec<(PrayerKey, u32)> = PrayerKey::DAILY
        .iter()
        .filter_map(|&key| table.awwal_minutes(key).map(|m| (key, m)))
        .collect();

    let mut current = None;
    let mut next = None;
    for (i, &(key, start)) in starts.iter().enumerate() {
        if now_minutes < start {
            next = Some(key);
            if i > 0 {
                current = Some(starts[i - 1].0);
            }
            break;
        }
    }

    match next {
        None => ScheduleStatus {
            current: Some(PrayerKey::Isha),
            next: PrayerKey::Fajar,
        },
        Some(_) if current.is_none() => ScheduleStatus {
            current: None,
            next: PrayerKey::Fajar,
        },
        Some(next) => ScheduleStatus { current, next },
    }
}

/// Whole minutes from `now` until `key`'s start, wrapping past midnight when
/// the start has already gone by today. None when the prayer has no usable
/// `awwal` (the countdown simply disappears rather than erroring).
pub fn minutes_until(table: &Timetable, key: PrayerKey, now: NaiveTime) -> Option<u32> {
    let start = table.awwal_minutes(key)?;
    let now_minutes = now.hour() * 60 + now.minute();
    if start > now_minutes {
        Some(start - now_minutes)
    } else {
        Some(24 * 60 - now_minutes + start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::table::{kadapa, PrayerRecord, TimeField, Timetable};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn record(key: PrayerKey, awwal: Option<&'static str>) -> PrayerRecord {
        PrayerRecord {
            key,
            fields: vec![TimeField {
                name: "awwal",
                label: "Awwal",
                value: awwal,
            }],
        }
    }

    #[test]
    fn test_between_two_prayers() {
        // 13:00 against the Kadapa table: Zohar started 12:29, Asar at 16:43
        let status = current_and_next(&kadapa(), at(13, 0));
        assert_eq!(status.current, Some(PrayerKey::Zohar));
        assert_eq!(status.next, PrayerKey::Asar);
    }

    #[test]
    fn test_every_interval_of_the_day() {
        let table = kadapa();
        let expected = [
            (at(5, 30), Some(PrayerKey::Fajar), PrayerKey::Zohar),
            (at(12, 29), Some(PrayerKey::Zohar), PrayerKey::Asar),
            (at(17, 0), Some(PrayerKey::Asar), PrayerKey::Maghrib),
            (at(18, 30), Some(PrayerKey::Maghrib), PrayerKey::Isha),
        ];
        for (now, current, next) in expected {
            let status = current_and_next(&table, now);
            assert_eq!(status.current, current, "at {}", now);
            assert_eq!(status.next, next, "at {}", now);
        }
    }

    #[test]
    fn test_before_fajar() {
        let status = current_and_next(&kadapa(), at(4, 0));
        assert_eq!(status.current, None);
        assert_eq!(status.next, PrayerKey::Fajar);
    }

    #[test]
    fn test_after_isha_wraps_to_fajar() {
        let status = current_and_next(&kadapa(), at(23, 50));
        assert_eq!(status.current, Some(PrayerKey::Isha));
        assert_eq!(status.next, PrayerKey::Fajar);

        // Exactly at Isha's start counts as after it (strict comparison)
        let status = current_and_next(&kadapa(), at(19, 33));
        assert_eq!(status.current, Some(PrayerKey::Isha));
        assert_eq!(status.next, PrayerKey::Fajar);
    }

    #[test]
    fn test_missing_awwal_is_invisible_to_the_scan() {
        // Zohar has no awwal: at 13:00 the scan jumps straight from Fajar
        // to Asar as if Zohar did not exist.
        let table = Timetable::new(
            "test",
            vec![
                record(PrayerKey::Fajar, Some("05:25")),
                record(PrayerKey::Zohar, None),
                record(PrayerKey::Asar, Some("16:43")),
                record(PrayerKey::Maghrib, Some("18:24")),
                record(PrayerKey::Isha, Some("19:33")),
            ],
        );
        let status = current_and_next(&table, at(13, 0));
        assert_eq!(status.current, Some(PrayerKey::Fajar));
        assert_eq!(status.next, PrayerKey::Asar);
    }

    #[test]
    fn test_wrap_around_ignores_missing_isha() {
        // Isha's awwal is gone, so the scan never sees it, yet past the last
        // remaining start the answer is still the fixed Isha/Fajar pair.
        let table = Timetable::new(
            "test",
            vec![
                record(PrayerKey::Fajar, Some("05:25")),
                record(PrayerKey::Zohar, Some("12:29")),
                record(PrayerKey::Asar, Some("16:43")),
                record(PrayerKey::Maghrib, Some("18:24")),
                record(PrayerKey::Isha, None),
            ],
        );
        let status = current_and_next(&table, at(20, 0));
        assert_eq!(status.current, Some(PrayerKey::Isha));
        assert_eq!(status.next, PrayerKey::Fajar);
    }

    #[test]
    fn test_seconds_are_ignored() {
        let table = kadapa();
        let with_seconds = NaiveTime::from_hms_opt(13, 0, 59).unwrap();
        assert_eq!(
            current_and_next(&table, with_seconds),
            current_and_next(&table, at(13, 0))
        );
    }

    #[test]
    fn test_minutes_until_same_day_and_wrapped() {
        let table = kadapa();
        // 13:00 -> Asar 16:43
        assert_eq!(
            minutes_until(&table, PrayerKey::Asar, at(13, 0)),
            Some(3 * 60 + 43)
        );
        // 23:50 -> Fajar 05:25 next day
        assert_eq!(
            minutes_until(&table, PrayerKey::Fajar, at(23, 50)),
            Some(10 + 5 * 60 + 25)
        );
        // Juma has no awwal
        assert_eq!(minutes_until(&table, PrayerKey::Juma, at(13, 0)), None);
    }
}
