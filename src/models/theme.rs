use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The persisted color preference. Stored as the literal string "light" or
/// "dark"; anything else read back from storage falls back to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> ThemeName {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Glyph shown next to the theme hint: sun for light, moon for dark.
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeName::Light => "☀",
            ThemeName::Dark => "🌙",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(anyhow::anyhow!("Unknown theme: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_is_identity() {
        assert_eq!(ThemeName::Light.toggled().toggled(), ThemeName::Light);
        assert_eq!(ThemeName::Dark.toggled().toggled(), ThemeName::Dark);
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("dark".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert!("solarized".parse::<ThemeName>().is_err());
    }
}
