use thiserror::Error;

use crate::scanner::{DEFAULT_TRAILING_CHARS, DoiScanner};

/// Number of leading pages read when nothing else is configured.
pub const DEFAULT_MAX_PAGES: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_pages must be at least 1")]
    ZeroPages,
    #[error("trailing character set must not be empty")]
    EmptyTrailingChars,
}

/// Settings for a DOI extraction run.
///
/// Use [`ScanConfigBuilder`] to override the defaults.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub(crate) max_pages: usize,
    pub(crate) trailing_chars: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            trailing_chars: DEFAULT_TRAILING_CHARS.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn trailing_chars(&self) -> &str {
        &self.trailing_chars
    }

    /// A scanner that strips this config's trailing characters.
    pub fn scanner(&self) -> DoiScanner {
        DoiScanner::with_trailing_chars(self.trailing_chars.clone())
    }
}

/// Builder for [`ScanConfig`]. Validation happens in [`build()`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ScanConfigBuilder {
    max_pages: Option<usize>,
    trailing_chars: Option<String>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_pages(mut self, pages: usize) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Characters stripped from the end of a match. Must be non-empty.
    pub fn trailing_chars(mut self, chars: &str) -> Self {
        self.trailing_chars = Some(chars.to_string());
        self
    }

    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        let defaults = ScanConfig::default();
        let max_pages = self.max_pages.unwrap_or(defaults.max_pages);
        if max_pages == 0 {
            return Err(ConfigError::ZeroPages);
        }
        let trailing_chars = self.trailing_chars.unwrap_or(defaults.trailing_chars);
        if trailing_chars.is_empty() {
            return Err(ConfigError::EmptyTrailingChars);
        }
        Ok(ScanConfig {
            max_pages,
            trailing_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfigBuilder::new().build().unwrap();
        assert_eq!(config.max_pages(), 3);
        assert_eq!(config.trailing_chars(), ".,;)]");
    }

    #[test]
    fn test_overrides() {
        let config = ScanConfig::builder()
            .max_pages(1)
            .trailing_chars(".")
            .build()
            .unwrap();
        assert_eq!(config.max_pages(), 1);
        assert_eq!(config.scanner().trailing_chars(), ".");
    }

    #[test]
    fn test_zero_pages_rejected() {
        let err = ScanConfig::builder().max_pages(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroPages);
    }

    #[test]
    fn test_empty_trailing_set_rejected() {
        let err = ScanConfig::builder().trailing_chars("").build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyTrailingChars);
    }

    #[test]
    fn test_zero_pages_checked_before_trailing_set() {
        let err = ScanConfig::builder()
            .max_pages(0)
            .trailing_chars("")
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroPages);
    }
}
