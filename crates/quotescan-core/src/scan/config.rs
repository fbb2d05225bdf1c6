//! Scanner configuration.
//!
//! A [`ScanConfig`] can be built in code or loaded from YAML:
//!
//! ```yaml
//! quote_chars: ["'", "`"]
//! case: insensitive
//! escape: doubled_char
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How characters are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    Sensitive,
    #[default]
    Insensitive,
}

/// How a quote character is written inside its own quoted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeConvention {
    /// Two consecutive quote characters are one literal quote (`'isn''t'`).
    #[default]
    DoubledChar,
    /// The first repeat of the opening quote always closes the region.
    None,
}

/// Quote set, case mode and escape convention shared by every scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Characters that open a quoted region. Each region is closed only by the
    /// character that opened it. Empty means plain search/split.
    pub quote_chars: Vec<char>,

    /// Case mode for needle matching and quote detection.
    pub case: CaseMode,

    pub escape: EscapeConvention,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            quote_chars: vec!['\''],
            case: CaseMode::default(),
            escape: EscapeConvention::default(),
        }
    }
}

impl ScanConfig {
    pub fn new(quote_chars: impl Into<Vec<char>>) -> Self {
        Self {
            quote_chars: quote_chars.into(),
            ..Default::default()
        }
    }

    /// Single quotes and MySQL-style backticks, case-sensitive quote detection.
    pub fn sql() -> Self {
        Self {
            quote_chars: vec!['\'', '`'],
            case: CaseMode::Sensitive,
            escape: EscapeConvention::DoubledChar,
        }
    }

    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    pub fn with_escape(mut self, escape: EscapeConvention) -> Self {
        self.escape = escape;
        self
    }

    /// Load a scan config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read scan config: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid scan config: {}", path.display()))
    }

    /// Parse a scan config from a YAML string. Missing fields take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("failed to parse scan config YAML")
    }
}

/// Options for [`split_outside_quotes`](super::split_outside_quotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Append the matched split token to the segment it terminates.
    pub include_token: bool,
    /// Never emit a segment that is empty after trimming. The blank text is
    /// carried into the next segment rather than dropped.
    pub trim_results: bool,
    /// Case mode for matching the split token. Quote detection follows
    /// [`ScanConfig::case`].
    pub token_case: CaseMode,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            include_token: false,
            trim_results: true,
            token_case: CaseMode::Insensitive,
        }
    }
}

impl SplitOptions {
    pub fn including_token(mut self) -> Self {
        self.include_token = true;
        self
    }

    pub fn untrimmed(mut self) -> Self {
        self.trim_results = false;
        self
    }

    pub fn with_token_case(mut self, case: CaseMode) -> Self {
        self.token_case = case;
        self
    }
}
