//! Cursor configuration.

use crate::binding::constants::{
    DEFAULT_FETCH_SIZE, DEFAULT_MAX_STRING_LENGTH, MAX_FETCH_SIZE, MAX_STRING_LENGTH,
};
use crate::error::{Error, Result};

/// Options controlling how a cursor binds and fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorOptions {
    /// Rows per fetch (rowset size).
    pub fetch_size: usize,
    /// Upper bound on bytes bound per string value.
    pub max_string_length: usize,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            fetch_size: DEFAULT_FETCH_SIZE,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }
}

impl CursorOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rowset size (clamped to `1..=MAX_FETCH_SIZE`).
    pub fn with_fetch_size(mut self, fetch_size: usize) -> Self {
        self.fetch_size = fetch_size.clamp(1, MAX_FETCH_SIZE);
        self
    }

    /// Set the maximum bound string length (clamped to `1..=MAX_STRING_LENGTH`).
    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length.clamp(1, MAX_STRING_LENGTH);
        self
    }

    /// Check that both limits are in range.
    ///
    /// The fields are public, so a cursor re-checks them before binding.
    pub fn validate(&self) -> Result<()> {
        check_range("fetch_size", self.fetch_size, MAX_FETCH_SIZE)?;
        check_range("max_string_length", self.max_string_length, MAX_STRING_LENGTH)
    }

    /// Parse an attribute string like "fetch_size=500;max_string_length=64".
    ///
    /// Keys are case-insensitive and empty segments are ignored. Missing
    /// keys keep their defaults.
    pub fn parse(options: &str) -> Result<Self> {
        let mut parsed = Self::default();

        for part in options.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                Error::invalid_options(format!("Expected key=value, got '{}'", part))
            })?;
            let value = value.trim();
            let number = value.parse::<usize>().map_err(|_| {
                Error::invalid_options(format!("Invalid value for {}: {}", key.trim(), value))
            })?;

            match key.trim().to_ascii_lowercase().as_str() {
                "fetch_size" => parsed.fetch_size = number,
                "max_string_length" => parsed.max_string_length = number,
                other => {
                    return Err(Error::invalid_options(format!("Unknown option: {}", other)))
                }
            }
        }

        parsed.validate()?;
        Ok(parsed)
    }
}

fn check_range(key: &str, value: usize, max: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::invalid_options(format!("{} must be positive", key)));
    }
    if value > max {
        return Err(Error::invalid_options(format!(
            "{} must be at most {}, got {}",
            key, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CursorOptions::default();
        assert_eq!(options.fetch_size, 100);
        assert_eq!(options.max_string_length, 1024);
    }

    #[test]
    fn test_builder() {
        let options = CursorOptions::new()
            .with_fetch_size(0)
            .with_max_string_length(64);
        assert_eq!(options.fetch_size, 1);
        assert_eq!(options.max_string_length, 64);
    }

    #[test]
    fn test_parse() {
        let options = CursorOptions::parse(" FETCH_SIZE = 500 ; max_string_length=64;").unwrap();
        assert_eq!(options.fetch_size, 500);
        assert_eq!(options.max_string_length, 64);

        assert_eq!(CursorOptions::parse("").unwrap(), CursorOptions::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            CursorOptions::parse("fetch_size"),
            Err(Error::InvalidOptions { .. })
        ));
        assert!(CursorOptions::parse("fetch_size=lots").is_err());
        assert!(CursorOptions::parse("fetch_size=0").is_err());
        assert!(CursorOptions::parse("timeout=5").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_values() {
        assert!(matches!(
            CursorOptions::parse("max_string_length=18446744073709551615"),
            Err(Error::InvalidOptions { .. })
        ));
        assert!(matches!(
            CursorOptions::parse("fetch_size=4611686018427387904"),
            Err(Error::InvalidOptions { .. })
        ));
        let at_limit = format!("fetch_size={}", MAX_FETCH_SIZE);
        assert_eq!(CursorOptions::parse(&at_limit).unwrap().fetch_size, MAX_FETCH_SIZE);
    }

    #[test]
    fn test_builder_clamps_to_limits() {
        let options = CursorOptions::new()
            .with_fetch_size(usize::MAX)
            .with_max_string_length(usize::MAX);
        assert_eq!(options.fetch_size, MAX_FETCH_SIZE);
        assert_eq!(options.max_string_length, MAX_STRING_LENGTH);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_fields_set_directly() {
        let mut options = CursorOptions::default();
        options.max_string_length = usize::MAX;
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidOptions { .. })
        ));
        options.max_string_length = 64;
        options.fetch_size = 0;
        assert!(options.validate().is_err());
    }
}
