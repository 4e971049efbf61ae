//! Failure mode configuration for the recording logger

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

/// Environment variable read by [`FailureMode::from_env`]
pub const FAILURE_MODE_ENV: &str = "LOGGERKIT_FAILURE_MODE";

/// Accepted spellings, matched case-insensitively
static MODE_ALIASES: Lazy<HashMap<&'static str, FailureMode>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("strict", FailureMode::Strict);
    m.insert("fail", FailureMode::Strict);
    m.insert("never-fail", FailureMode::NeverFail);
    m.insert("never_fail", FailureMode::NeverFail);
    m.insert("nonfailing", FailureMode::NeverFail);
    m.insert("lenient", FailureMode::NeverFail);
    m
});

/// Errors that can occur while reading logger configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown failure mode: {0:?}")]
    UnknownFailureMode(String),

    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What error, fatal, and panic calls do to the running test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FailureMode {
    /// Failures go to the reporter's own error/fatal/halt primitives
    #[default]
    Strict,
    /// Failures are counted and logged as plain lines; nothing halts
    NeverFail,
}

impl FailureMode {
    /// Whether failure calls are downgraded to plain log lines
    pub fn never_fails(self) -> bool {
        matches!(self, FailureMode::NeverFail)
    }

    /// Read the mode from `LOGGERKIT_FAILURE_MODE`
    ///
    /// Returns `Ok(None)` when the variable is unset or blank.
    pub fn from_env() -> ConfigResult<Option<Self>> {
        match env::var(FAILURE_MODE_ENV) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => value.parse().map(Some),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                var: FAILURE_MODE_ENV,
            }),
        }
    }
}

impl FromStr for FailureMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        MODE_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnknownFailureMode(s.to_string()))
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMode::Strict => write!(f, "strict"),
            FailureMode::NeverFail => write!(f, "never-fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(FailureMode::default(), FailureMode::Strict);
        assert!(!FailureMode::Strict.never_fails());
        assert!(FailureMode::NeverFail.never_fails());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("strict".parse::<FailureMode>().unwrap(), FailureMode::Strict);
        assert_eq!("FAIL".parse::<FailureMode>().unwrap(), FailureMode::Strict);
        assert_eq!(" Never-Fail ".parse::<FailureMode>().unwrap(), FailureMode::NeverFail);
        assert_eq!("never_fail".parse::<FailureMode>().unwrap(), FailureMode::NeverFail);
        assert_eq!("lenient".parse::<FailureMode>().unwrap(), FailureMode::NeverFail);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sometimes".parse::<FailureMode>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFailureMode(ref s) if s == "sometimes"));
        assert_eq!(err.to_string(), "Unknown failure mode: \"sometimes\"");
    }

    #[test]
    fn test_display_parses_back() {
        for mode in [FailureMode::Strict, FailureMode::NeverFail] {
            assert_eq!(mode.to_string().parse::<FailureMode>().unwrap(), mode);
        }
    }

    // Every env-dependent assertion lives in this one test so parallel
    // tests never observe each other's values.
    #[test]
    fn test_from_env() {
        use crate::testing::{RecordingLogger, TestContext};

        let ctx = TestContext::new("from_env");

        env::remove_var(FAILURE_MODE_ENV);
        assert!(FailureMode::from_env().unwrap().is_none());
        assert_eq!(RecordingLogger::from_env(&ctx).unwrap().mode(), FailureMode::Strict);

        env::set_var(FAILURE_MODE_ENV, "  ");
        assert!(FailureMode::from_env().unwrap().is_none());

        env::set_var(FAILURE_MODE_ENV, "nonfailing");
        assert_eq!(FailureMode::from_env().unwrap(), Some(FailureMode::NeverFail));
        assert_eq!(RecordingLogger::from_env(&ctx).unwrap().mode(), FailureMode::NeverFail);

        env::set_var(FAILURE_MODE_ENV, "bogus");
        assert!(matches!(
            FailureMode::from_env(),
            Err(ConfigError::UnknownFailureMode(_))
        ));
        assert!(RecordingLogger::from_env(&ctx).is_err());

        env::remove_var(FAILURE_MODE_ENV);
        assert!(!ctx.finish().failed);
    }
}
