//! Quote-aware containment, splitting and rewriting.
//!
//! All operations share one engine parameterised by [`ScanConfig`]; the
//! differences between case-sensitive and case-insensitive scans, or between
//! quote sets, are configuration rather than separate code paths.

pub mod config;
pub(crate) mod engine;
pub mod errors;

use serde::Serialize;
use tracing::debug;

use engine::Scanner;

pub use config::{CaseMode, EscapeConvention, ScanConfig, SplitOptions};
pub use errors::ScanError;

/// Does `needle` occur in `input` outside every quoted region?
///
/// Matching honours [`ScanConfig::case`], as does quote detection. The scan
/// stops at the first match.
///
/// ```
/// use quotescan_core::scan::{contains_outside_quotes, ScanConfig};
///
/// let cfg = ScanConfig::default();
/// let found = contains_outside_quotes("This is 'a test' isn''t it?", "test", &cfg).unwrap();
/// assert!(!found);
/// ```
pub fn contains_outside_quotes(
    input: &str,
    needle: &str,
    config: &ScanConfig,
) -> Result<bool, ScanError> {
    if needle.is_empty() {
        return Err(ScanError::EmptyNeedle);
    }
    let needle: Vec<char> = needle.chars().collect();
    let scanner = Scanner::new(input, config);

    let mut i = 0;
    while let Some(c) = scanner.char_at(i) {
        if let Some(region) = scanner.quoted_region_at(i) {
            i = region.next;
            continue;
        }
        if scanner.match_at(i, &needle, config.case).is_some() {
            return Ok(true);
        }
        i += c.len_utf8();
    }
    Ok(false)
}

/// Split `input` on `token`, never splitting inside a quoted region.
///
/// Segments come back in input order. A segment is emitted only when it is
/// non-empty and, with [`SplitOptions::trim_results`], not blank; a blank
/// segment is held over and prefixes the next one. With
/// [`SplitOptions::include_token`] the matched input text is kept at the end
/// of the segment it terminates.
pub fn split_outside_quotes(
    input: &str,
    token: &str,
    options: SplitOptions,
    config: &ScanConfig,
) -> Result<Vec<String>, ScanError> {
    if token.is_empty() {
        return Err(ScanError::EmptySplitToken);
    }
    let token: Vec<char> = token.chars().collect();
    Ok(split_on(input, &token, options, config))
}

/// Split on a token already known to be non-empty.
pub(crate) fn split_on(
    input: &str,
    token: &[char],
    options: SplitOptions,
    config: &ScanConfig,
) -> Vec<String> {
    let scanner = Scanner::new(input, config);

    let mut segments = Vec::new();
    let mut buf = String::with_capacity(input.len().min(256));
    let mut i = 0;

    while let Some(c) = scanner.char_at(i) {
        if let Some(region) = scanner.quoted_region_at(i) {
            buf.push_str(scanner.slice(i, region.next));
            i = region.next;
            continue;
        }
        if let Some(end) = scanner.match_at(i, token, options.token_case) {
            if options.include_token {
                buf.push_str(scanner.slice(i, end));
            }
            flush_segment(&mut buf, &mut segments, options.trim_results);
            i = end;
            continue;
        }
        buf.push(c);
        i += c.len_utf8();
    }
    flush_segment(&mut buf, &mut segments, options.trim_results);

    debug!(segments = segments.len(), "split outside quotes");
    segments
}

fn flush_segment(buf: &mut String, segments: &mut Vec<String>, trim_results: bool) {
    if !buf.is_empty() && (!trim_results || !buf.trim().is_empty()) {
        segments.push(std::mem::take(buf));
    }
}

/// Rewrite only the unquoted parts of `input`.
///
/// `transform` is called once for each maximal non-empty unquoted span, in
/// order. Quoted spans, delimiters included, are copied through unchanged.
///
/// ```
/// use quotescan_core::scan::{operate_on_unquoted, ScanConfig};
///
/// let out = operate_on_unquoted("select 'Keep Me' from t", |s| s.to_uppercase(), &ScanConfig::default());
/// assert_eq!(out, "SELECT 'Keep Me' FROM T");
/// ```
pub fn operate_on_unquoted<F>(input: &str, mut transform: F, config: &ScanConfig) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(input.len());
    for span in quoted_spans(input, config) {
        let text = span.text(input);
        match span.kind {
            SpanKind::Unquoted => out.push_str(&transform(text)),
            SpanKind::Quoted | SpanKind::UnterminatedQuote => out.push_str(text),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Unquoted,
    Quoted,
    /// A quoted region that ran to the end of input.
    UnterminatedQuote,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Unquoted => "unquoted",
            SpanKind::Quoted => "quoted",
            SpanKind::UnterminatedQuote => "unterminated_quote",
        }
    }
}

/// A byte range of the input. Quoted spans include their delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

/// Partition `input` into alternating unquoted and quoted spans.
///
/// The spans are contiguous, cover the whole input, and never include an
/// empty unquoted span.
pub fn quoted_spans(input: &str, config: &ScanConfig) -> Vec<Span> {
    let scanner = Scanner::new(input, config);
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while let Some(c) = scanner.char_at(i) {
        let Some(region) = scanner.quoted_region_at(i) else {
            i += c.len_utf8();
            continue;
        };
        if start < i {
            spans.push(Span {
                kind: SpanKind::Unquoted,
                start,
                end: i,
            });
        }
        spans.push(Span {
            kind: if region.terminated {
                SpanKind::Quoted
            } else {
                SpanKind::UnterminatedQuote
            },
            start: i,
            end: region.next,
        });
        i = region.next;
        start = i;
    }
    if start < input.len() {
        spans.push(Span {
            kind: SpanKind::Unquoted,
            start,
            end: input.len(),
        });
    }
    spans
}
