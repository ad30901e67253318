//! Scanner configuration.
//!
//! A [`LexerConfig`] is fixed for the lifetime of a scanner. It can be
//! built in code with the setter methods or loaded from a TOML table:
//!
//! ```toml
//! strict_mode = true
//! capture_trivia = false
//! signed_numeric_literals = false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options that change how source text is scanned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Use the strict mode reserved word set.
    #[serde(default)]
    pub strict_mode: bool,

    /// Emit white space and comment tokens instead of skipping them.
    #[serde(default = "default_true")]
    pub capture_trivia: bool,

    /// Scan `-` directly before a digit as part of the numeric literal.
    #[serde(default = "default_true")]
    pub signed_numeric_literals: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            capture_trivia: true,
            signed_numeric_literals: true,
        }
    }
}

impl LexerConfig {
    /// Parse a configuration from TOML; missing keys take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use escan_lex::LexerConfig;
    ///
    /// let config = LexerConfig::from_toml_str("strict_mode = true").unwrap();
    /// assert!(config.strict_mode);
    /// assert!(config.capture_trivia);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Set `strict_mode`.
    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Set `capture_trivia`.
    pub fn capture_trivia(mut self, capture: bool) -> Self {
        self.capture_trivia = capture;
        self
    }

    /// Set `signed_numeric_literals`.
    pub fn signed_numeric_literals(mut self, signed: bool) -> Self {
        self.signed_numeric_literals = signed;
        self
    }
}
