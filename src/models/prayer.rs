#![allow(dead_code)]
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKey {
    Fajar,
    Zohar,
    Asar,
    Maghrib,
    Isha,
    Juma,
}

impl PrayerKey {
    /// The five daily prayers in schedule order. Juma is weekly and never
    /// takes part in current/next evaluation.
    pub const DAILY: [PrayerKey; 5] = [
        PrayerKey::Fajar,
        PrayerKey::Zohar,
        PrayerKey::Asar,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerKey::Fajar => "fajar",
            PrayerKey::Zohar => "zohar",
            PrayerKey::Asar => "asar",
            PrayerKey::Maghrib => "maghrib",
            PrayerKey::Isha => "isha",
            PrayerKey::Juma => "juma",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerKey::Fajar => "Fajar",
            PrayerKey::Zohar => "Zohar",
            PrayerKey::Asar => "Asar",
            PrayerKey::Maghrib => "Maghrib",
            PrayerKey::Isha => "Isha",
            PrayerKey::Juma => "Juma",
        }
    }
}

impl std::fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajar" | "fajr" => Ok(PrayerKey::Fajar),
            "zohar" | "zuhr" | "dhuhr" => Ok(PrayerKey::Zohar),
            "asar" | "asr" => Ok(PrayerKey::Asar),
            "maghrib" => Ok(PrayerKey::Maghrib),
            "isha" => Ok(PrayerKey::Isha),
            "juma" | "jumma" => Ok(PrayerKey::Juma),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}
