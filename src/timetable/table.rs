use serde::Serialize;

use crate::models::PrayerKey;
use crate::utils::format::minutes_of_day;

/// One labelled time slot on a prayer card, e.g. `awwal` or `qaza`.
/// `value` is an "HH:MM" 24-hour string, or None when the slot does not
/// apply to this prayer. Values are carried as-is; nothing validates them.
#[derive(Debug, Clone, Serialize)]
pub struct TimeField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: Option<&'static str>,
}

/// One prayer's entry in the timetable.
#[derive(Debug, Clone, Serialize)]
pub struct PrayerRecord {
    pub key: PrayerKey,
    pub fields: Vec<TimeField>,
}

impl PrayerRecord {
    pub fn field(&self, name: &str) -> Option<&'static str> {
        self.fields.iter().find(|f| f.name == name).and_then(|f| f.value)
    }

    /// The earliest permissible start time, the one the evaluator runs on.
    pub fn awwal(&self) -> Option<&'static str> {
        self.field("awwal")
    }
}

/// The day's timetable for one location. Built once at startup, passed by
/// reference everywhere, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Timetable {
    pub location: String,
    records: Vec<PrayerRecord>,
}

impl Timetable {
    pub fn new(location: impl Into<String>, records: Vec<PrayerRecord>) -> Self {
        Self {
            location: location.into(),
            records,
        }
    }

    pub fn get(&self, key: PrayerKey) -> Option<&PrayerRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn records(&self) -> &[PrayerRecord] {
        &self.records
    }

    /// `awwal` converted to minutes since midnight; None when the prayer is
    /// missing from the table or its `awwal` slot is empty or unparseable.
    pub fn awwal_minutes(&self, key: PrayerKey) -> Option<u32> {
        self.get(key)?.awwal().and_then(minutes_of_day)
    }
}

fn field(name: &'static str, label: &'static str, value: Option<&'static str>) -> TimeField {
    TimeField { name, label, value }
}

/// The hardcoded Kadapa timetable.
pub fn kadapa() -> Timetable {
    Timetable::new(
        "Kadapa",
        vec![
            PrayerRecord {
                key: PrayerKey::Fajar,
                fields: vec![
                    field("awwal", "Awwal", Some("05:25")),
                    field("jamaat", "Jamaat", None),
                    field("qaza", "Qaza", Some("06:37")),
                    field("ishraq", "Ishraq", Some("06:57")),
                    field("chaasht", "Chaasht", Some("09:33")),
                ],
            },
            PrayerRecord {
                key: PrayerKey::Zohar,
                fields: vec![
                    field("awwal", "Awwal", Some("12:29")),
                    field("jamaat", "Jamaat", None),
                    field("zawaal", "Zawaal", Some("12:24")),
                    field("qaza_hanafi", "Qaza (Hanafi)", Some("16:43")),
                    field("qaza_shafai", "Qaza (Shafai)", Some("15:50")),
                ],
            },
            PrayerRecord {
                key: PrayerKey::Asar,
                fields: vec![
                    field("awwal", "Awwal", Some("16:43")),
                    field("jamaat", "Jamaat", None),
                    field("awwal_hanafi", "Awwal (Hanafi)", Some("16:43")),
                    field("awwal_shafai", "Awwal (Shafai)", Some("15:50")),
                    field("qaza", "Qaza", Some("18:21")),
                ],
            },
            PrayerRecord {
                key: PrayerKey::Maghrib,
                fields: vec![
                    field("awwal", "Awwal", Some("18:24")),
                    field("jamaat", "Jamaat", Some("18:24")),
                    field("sunset", "Sunset", Some("18:21")),
                    field("iftaar", "Iftaar", Some("18:24")),
                    field("qaza", "Qaza", Some("19:33")),
                ],
            },
            PrayerRecord {
                key: PrayerKey::Isha,
                fields: vec![
                    field("awwal", "Awwal", Some("19:33")),
                    field("jamaat", "Jamaat", None),
                    field("qaza", "Qaza", Some("05:25")),
                    field("tahajjud", "Tahajjud", Some("03:34")),
                    field("khatm_sehri", "Khatm-e-Sehri", Some("05:15")),
                ],
            },
            PrayerRecord {
                key: PrayerKey::Juma,
                fields: vec![
                    field("khutba", "Khutba", Some("13:30")),
                    field("khutba1", "Khutba 1", Some("13:00")),
                    field("khutba2", "Khutba 2", Some("13:15")),
                    field("khutba3", "Khutba 3", None),
                    field("khutba4", "Khutba 4", None),
                ],
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kadapa_has_all_six_prayers() {
        let table = kadapa();
        for key in [
            PrayerKey::Fajar,
            PrayerKey::Zohar,
            PrayerKey::Asar,
            PrayerKey::Maghrib,
            PrayerKey::Isha,
            PrayerKey::Juma,
        ] {
            assert!(table.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_field_lookup() {
        let table = kadapa();
        let fajar = table.get(PrayerKey::Fajar).unwrap();
        assert_eq!(fajar.field("awwal"), Some("05:25"));
        assert_eq!(fajar.field("jamaat"), None);
        assert_eq!(fajar.field("no_such_field"), None);
    }

    #[test]
    fn test_awwal_minutes() {
        let table = kadapa();
        assert_eq!(table.awwal_minutes(PrayerKey::Fajar), Some(325));
        assert_eq!(table.awwal_minutes(PrayerKey::Isha), Some(19 * 60 + 33));
        // Juma has no awwal slot at all
        assert_eq!(table.awwal_minutes(PrayerKey::Juma), None);
    }
}
