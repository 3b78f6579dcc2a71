//! Validated runtime configuration.

use std::time::Duration;

use crate::error::{ClickerError, Result};
use crate::keys::{FunctionKey, MouseButton};

pub const DEFAULT_CPS: f64 = 10.0;

/// Shortest allowed gap between two clicks, in seconds.
pub const MIN_INTERVAL_SECS: f64 = 0.0005;

/// Immutable settings built once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub cps: f64,
    pub button: MouseButton,
    pub toggle_key: FunctionKey,
    pub quit_key: FunctionKey,
}

impl Config {
    pub fn new(
        cps: f64,
        button: MouseButton,
        toggle_key: FunctionKey,
        quit_key: FunctionKey,
    ) -> Result<Self> {
        let config = Self {
            cps,
            button,
            toggle_key,
            quit_key,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_cps(self.cps)?;

        if self.toggle_key == self.quit_key {
            return Err(ClickerError::ConflictingHotkeys {
                key: self.toggle_key,
            });
        }

        Ok(())
    }

    /// Delay between two clicks: `1 / cps`, never below [`MIN_INTERVAL_SECS`].
    pub fn interval(&self) -> Duration {
        interval_for(self.cps)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cps: DEFAULT_CPS,
            button: MouseButton::Left,
            toggle_key: FunctionKey::F8,
            quit_key: FunctionKey::F9,
        }
    }
}

/// Saturates at [`Duration::MAX`] for rates too slow to represent.
pub fn interval_for(cps: f64) -> Duration {
    Duration::try_from_secs_f64((1.0 / cps).max(MIN_INTERVAL_SECS)).unwrap_or(Duration::MAX)
}

/// Parse a clicks-per-second argument. Accepts any positive finite number whose
/// interval fits in a [`Duration`].
pub fn parse_cps(value: &str) -> Result<f64> {
    let cps: f64 = value
        .trim()
        .parse()
        .map_err(|_| ClickerError::invalid_cps(value, "not a number"))?;

    validate_cps(cps).map_err(|e| match e {
        ClickerError::InvalidCps { reason, .. } => ClickerError::invalid_cps(value, reason),
        other => other,
    })?;
    Ok(cps)
}

fn validate_cps(cps: f64) -> Result<()> {
    if !cps.is_finite() || cps <= 0.0 {
        return Err(ClickerError::invalid_cps(
            cps.to_string(),
            "must be a positive number",
        ));
    }
    if Duration::try_from_secs_f64(1.0 / cps).is_err() {
        return Err(ClickerError::invalid_cps(
            cps.to_string(),
            "rate is too small; the gap between clicks would be unrepresentable",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_reciprocal_of_cps() {
        assert_eq!(interval_for(10.0), Duration::from_millis(100));
        assert_eq!(interval_for(20.0), Duration::from_millis(50));
        assert_eq!(interval_for(0.5), Duration::from_secs(2));
    }

    #[test]
    fn test_interval_is_floored() {
        assert_eq!(interval_for(2000.0), Duration::from_micros(500));
        assert_eq!(interval_for(1_000_000.0), Duration::from_micros(500));
        assert_eq!(interval_for(f64::MAX), Duration::from_micros(500));
    }

    #[test]
    fn test_tiny_rates_are_rejected() {
        let err = parse_cps("1e-20").unwrap_err();
        assert!(err.to_string().contains("too small"));
        assert!(err.to_string().contains("1e-20"));

        assert!(parse_cps(&f64::MIN_POSITIVE.to_string()).is_err());
        assert!(Config::new(f64::MIN_POSITIVE, MouseButton::Left, FunctionKey::F6, FunctionKey::F7).is_err());
        assert!(Config::new(1e-20, MouseButton::Left, FunctionKey::F6, FunctionKey::F7).is_err());

        // Slow but representable rates are still accepted.
        assert_eq!(parse_cps("0.001").unwrap(), 0.001);
        assert_eq!(interval_for(0.001), Duration::from_secs(1000));
    }

    #[test]
    fn test_interval_saturates_instead_of_panicking() {
        assert_eq!(interval_for(1e-20), Duration::MAX);
        assert_eq!(interval_for(f64::MIN_POSITIVE), Duration::MAX);
    }

    #[test]
    fn test_parse_cps() {
        assert_eq!(parse_cps("12").unwrap(), 12.0);
        assert_eq!(parse_cps(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_cps("1e3").unwrap(), 1000.0);

        assert!(parse_cps("0").is_err());
        assert!(parse_cps("-4").is_err());
        assert!(parse_cps("abc").is_err());
        assert!(parse_cps("").is_err());
        assert!(parse_cps("NaN").is_err());
        assert!(parse_cps("inf").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cps, 10.0);
        assert_eq!(config.button, MouseButton::Left);
        assert_eq!(config.toggle_key, FunctionKey::F8);
        assert_eq!(config.quit_key, FunctionKey::F9);
        assert!(config.validate().is_ok());
        assert_eq!(config.interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_config_validation_errors() {
        let err = Config::new(5.0, MouseButton::Left, FunctionKey::F6, FunctionKey::F6).unwrap_err();
        assert!(matches!(
            err,
            ClickerError::ConflictingHotkeys {
                key: FunctionKey::F6
            }
        ));

        assert!(Config::new(0.0, MouseButton::Left, FunctionKey::F6, FunctionKey::F7).is_err());
        assert!(Config::new(-1.0, MouseButton::Left, FunctionKey::F6, FunctionKey::F7).is_err());
        assert!(Config::new(f64::NAN, MouseButton::Left, FunctionKey::F6, FunctionKey::F7).is_err());
    }
}
