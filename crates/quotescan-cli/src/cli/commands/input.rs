//! Input and scan-config resolution shared by every command.

use anyhow::Context;
use quotescan_core::{CaseMode, EscapeConvention, ScanConfig};
use std::io::Read;
use std::path::Path;

use crate::cli::args::{InputArgs, QuoteArgs};

/// Resolve the text to scan: the positional argument, then `--file`, then stdin.
///
/// A single trailing line break is stripped from stdin so `echo ... |` works.
pub fn read_input(args: &InputArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input: {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Load `--config` (or the default) and apply command-line overrides.
pub fn scan_config(config: Option<&Path>, overrides: &QuoteArgs) -> anyhow::Result<ScanConfig> {
    let mut cfg = match config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };
    if !overrides.quotes.is_empty() {
        cfg.quote_chars = overrides.quotes.clone();
    }
    if overrides.case_sensitive {
        cfg.case = CaseMode::Sensitive;
    }
    if overrides.no_escape {
        cfg.escape = EscapeConvention::None;
    }
    tracing::debug!(
        quotes = ?cfg.quote_chars,
        case = ?cfg.case,
        escape = ?cfg.escape,
        "resolved scan config"
    );
    Ok(cfg)
}
