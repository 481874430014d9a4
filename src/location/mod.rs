use thiserror::Error;

use crate::config::settings::LocationConfig;

/// Reference coordinates of the Kaaba. Shown in the qibla report for
/// orientation; no bearing is derived from them yet.
pub const MECCA_LATITUDE: f64 = 21.3891;
pub const MECCA_LONGITUDE: f64 = 39.8579;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location services are disabled or unavailable")]
    Unavailable,
}

/// Where the widget gets its position from. The shipped source reads the
/// coordinates out of the config file; anything that can answer a one-shot
/// position query can stand in for it (tests use fixed values).
pub trait LocationSource {
    fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Position source backed by the `[location]` section of the config file.
/// Missing coordinates read as "position unavailable", not as an error in
/// the config itself.
pub struct ConfigLocation {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl ConfigLocation {
    pub fn from_config(config: &LocationConfig) -> Self {
        Self {
            latitude: config.latitude,
            longitude: config.longitude,
        }
    }
}

impl LocationSource for ConfigLocation {
    fn current_position(&self) -> Result<Coordinates, LocationError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(LocationError::Unavailable),
        }
    }
}

/// One-shot qibla report. `source` is None when no position source exists in
/// this environment at all. Each call is independent; nothing is retried or
/// remembered.
pub fn qibla_report(source: Option<&dyn LocationSource>) -> String {
    let Some(source) = source else {
        return "Location lookup is not supported in this environment.".to_string();
    };

    match source.current_position() {
        Ok(pos) => format!(
            "Your location: {:.4}, {:.4}\nKaaba reference: {:.4}, {:.4}\nQibla bearing calculation is not implemented yet.",
            pos.latitude, pos.longitude, MECCA_LATITUDE, MECCA_LONGITUDE
        ),
        Err(LocationError::Unavailable) => {
            "Unable to access location. Enable location services to use the qibla helper."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Coordinates);

    impl LocationSource for Fixed {
        fn current_position(&self) -> Result<Coordinates, LocationError> {
            Ok(self.0)
        }
    }

    struct Denied;

    impl LocationSource for Denied {
        fn current_position(&self) -> Result<Coordinates, LocationError> {
            Err(LocationError::Unavailable)
        }
    }

    #[test]
    fn test_report_formats_coordinates_to_four_places() {
        let source = Fixed(Coordinates {
            latitude: 14.46741234,
            longitude: 78.82410001,
        });
        let report = qibla_report(Some(&source));
        assert!(report.contains("Your location: 14.4674, 78.8241"));
        assert!(report.contains("not implemented"));
    }

    #[test]
    fn test_report_when_position_unavailable() {
        let report = qibla_report(Some(&Denied));
        assert!(report.contains("Enable location services"));
    }

    #[test]
    fn test_report_without_any_source() {
        let report = qibla_report(None);
        assert!(report.contains("not supported"));
    }

    #[test]
    fn test_config_location_requires_both_coordinates() {
        let partial = ConfigLocation {
            latitude: Some(14.4674),
            longitude: None,
        };
        assert!(partial.current_position().is_err());
    }
}
