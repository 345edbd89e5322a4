//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: field error (bad scenario values, degenerate grid, bad masking factor)
//! - 11: I/O error (scenario read, PNG write)
//! - 12: input error (unknown preset or palette, malformed probe point)
//! - 13: serialization error (scenario or output JSON)

use gravity_field_core::FieldError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    Field(FieldError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Field(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Field(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<FieldError> for CliError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::Io(msg) => CliError::Io(msg),
            FieldError::Scenario(msg) => CliError::Serialization(msg),
            FieldError::UnknownPreset(_) | FieldError::UnknownPalette(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Field(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_exit_code_is_10() {
        let err = CliError::from(FieldError::NoBodies);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::from(FieldError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn unknown_palette_routes_to_input() {
        let err = CliError::from(FieldError::UnknownPalette("rainbow".into()));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("rainbow"));
    }

    #[test]
    fn unknown_preset_routes_to_input() {
        let err = CliError::from(FieldError::UnknownPreset("pluto".into()));
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn scenario_parse_error_routes_to_serialization() {
        let err = CliError::from(FieldError::Scenario("expected value".into()));
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
