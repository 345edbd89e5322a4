//! Reproducible description of a field plot.
//!
//! A [`Scenario`] captures everything needed to recreate a plot: the bodies,
//! the frame rotation rate, the sampling parameters, and the colour-scale
//! masking factor. Scenarios round-trip through JSON; optional fields fall
//! back to the library defaults.
//!
//! ```json
//! {
//!   "name": "earth-moon",
//!   "angular_velocity": 2.5972e-6,
//!   "bodies": [
//!     { "mu": 3.986004418e14, "position": [0.0, 0.0], "radius": 6.371e6 },
//!     { "mu": 4.9048695e12, "position": [384.4e6, 0.0], "radius": 1.7374e6 }
//!   ],
//!   "resolution": 500
//! }
//! ```

use crate::body::{Body, FieldConfig};
use crate::error::FieldError;
use crate::sampler::{SamplingParams, DEFAULT_LIMIT_FACTOR, DEFAULT_RESOLUTION};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::path::Path;

/// Default divisor applied to the mean field magnitude to get the colour
/// scale ceiling.
pub const DEFAULT_MASKING_FACTOR: f64 = 2.0;

/// Names of the built-in scenarios.
const PRESET_NAMES: &[&str] = &["earth-moon", "sun-jupiter"];

/// Seconds in a day.
const DAY: f64 = 24.0 * 3600.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub bodies: Vec<Body>,
    pub angular_velocity: f64,
    #[serde(default = "default_limit_factor")]
    pub limit_factor: f64,
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    #[serde(default = "default_masking_factor")]
    pub masking_factor: f64,
}

fn default_limit_factor() -> f64 {
    DEFAULT_LIMIT_FACTOR
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_masking_factor() -> f64 {
    DEFAULT_MASKING_FACTOR
}

impl Scenario {
    /// Creates a scenario with default sampling and masking parameters.
    pub fn new(name: &str, bodies: Vec<Body>, angular_velocity: f64) -> Self {
        Self {
            name: name.to_string(),
            bodies,
            angular_velocity,
            limit_factor: DEFAULT_LIMIT_FACTOR,
            resolution: DEFAULT_RESOLUTION,
            masking_factor: DEFAULT_MASKING_FACTOR,
        }
    }

    /// Earth and Moon in SI units, frame rotating once every 28 days.
    pub fn earth_moon() -> Self {
        Self::new(
            "earth-moon",
            vec![
                Body {
                    mu: 3.986004418e14,
                    position: DVec2::ZERO,
                    radius: 6.371e6,
                },
                Body {
                    mu: 4.9048695e12,
                    position: DVec2::new(384.4e6, 0.0),
                    radius: 1.7374e6,
                },
            ],
            TAU / (28.0 * DAY),
        )
    }

    /// Sun and Jupiter in SI units, frame rotating once per Jovian year.
    pub fn sun_jupiter() -> Self {
        Self::new(
            "sun-jupiter",
            vec![
                Body {
                    mu: 1.32712440018e20,
                    position: DVec2::ZERO,
                    radius: 6.957e8,
                },
                Body {
                    mu: 1.26686534e17,
                    position: DVec2::new(7.7857e11, 0.0),
                    radius: 6.9911e7,
                },
            ],
            TAU / (4332.59 * DAY),
        )
    }

    /// Looks up a built-in scenario by name.
    ///
    /// Returns `FieldError::UnknownPreset` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "earth-moon" => Ok(Self::earth_moon()),
            "sun-jupiter" => Ok(Self::sun_jupiter()),
            _ => Err(FieldError::UnknownPreset(name.to_string())),
        }
    }

    /// Names accepted by [`Scenario::from_name`].
    pub fn list_names() -> &'static [&'static str] {
        PRESET_NAMES
    }

    /// Parses a scenario from JSON text and validates it.
    pub fn from_json(text: &str) -> Result<Self, FieldError> {
        let scenario: Self = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reads and validates a JSON scenario file.
    pub fn load(path: &Path) -> Result<Self, FieldError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FieldError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, FieldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn field_config(&self) -> FieldConfig {
        FieldConfig::new(self.bodies.clone(), self.angular_velocity)
    }

    pub fn sampling_params(&self) -> SamplingParams {
        SamplingParams {
            limit_factor: self.limit_factor,
            resolution: self.resolution,
        }
    }

    /// Checks bodies, sampling parameters, and the masking factor.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_config().validate()?;
        self.sampling_params().validate()?;
        if !self.masking_factor.is_finite() || self.masking_factor <= 0.0 {
            return Err(FieldError::InvalidMaskingFactor(self.masking_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn earth_moon_matches_reference_values() {
        let s = Scenario::earth_moon();
        assert_eq!(s.bodies.len(), 2);
        assert!((s.bodies[0].mu - 3.986004418e14).abs() < 1.0);
        assert!((s.bodies[1].position.x - 384.4e6).abs() < 1e-6);
        let period = TAU / s.angular_velocity;
        assert!((period - 28.0 * 86400.0).abs() < 1e-6);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn every_listed_preset_resolves_and_validates() {
        for name in Scenario::list_names() {
            let s = Scenario::from_name(name).unwrap();
            assert_eq!(&s.name, name);
            assert!(s.validate().is_ok(), "{name} failed validation");
        }
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(matches!(
            Scenario::from_name("pluto-charon"),
            Err(FieldError::UnknownPreset(_))
        ));
    }

    #[test]
    fn from_json_fills_defaults() {
        let text = json!({
            "bodies": [{"mu": 1.0, "position": [1.0, 0.0], "radius": 0.1}],
            "angular_velocity": 1.0
        })
        .to_string();
        let s = Scenario::from_json(&text).unwrap();
        assert_eq!(s.resolution, DEFAULT_RESOLUTION);
        assert!((s.limit_factor - DEFAULT_LIMIT_FACTOR).abs() < f64::EPSILON);
        assert_eq!(s.masking_factor, DEFAULT_MASKING_FACTOR);
        assert_eq!(s.name, "");
    }

    #[test]
    fn from_json_rejects_empty_bodies() {
        let text = json!({"bodies": [], "angular_velocity": 0.0}).to_string();
        assert!(matches!(
            Scenario::from_json(&text),
            Err(FieldError::NoBodies)
        ));
    }

    #[test]
    fn from_json_rejects_bad_masking_factor() {
        let text = json!({
            "bodies": [{"mu": 1.0, "position": [1.0, 0.0]}],
            "angular_velocity": 0.0,
            "masking_factor": 0.0
        })
        .to_string();
        assert!(matches!(
            Scenario::from_json(&text),
            Err(FieldError::InvalidMaskingFactor(_))
        ));
    }

    #[test]
    fn from_json_reports_syntax_errors() {
        assert!(matches!(
            Scenario::from_json("{\"bodies\": ["),
            Err(FieldError::Scenario(_))
        ));
    }

    #[test]
    fn json_round_trip() {
        let mut s = Scenario::earth_moon();
        s.resolution = 64;
        s.masking_factor = 3.0;
        let restored = Scenario::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(s, restored);
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        std::fs::write(&path, Scenario::sun_jupiter().to_json().unwrap()).unwrap();
        let s = Scenario::load(&path).unwrap();
        assert_eq!(s.name, "sun-jupiter");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Scenario::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, FieldError::Io(_)));
    }
}
