//! The quote-tracking state machine shared by every scan.
//!
//! Cursors are byte offsets into the input and always sit on a char
//! boundary. The scanner answers two questions at a cursor: does a quoted
//! region open here (and where does it end), and does a pattern match here.
//! Nothing is decoded ahead of the cursor, so a scan that stops early pays
//! only for what it read. Callers own the cursor, so the in-quote state never
//! outlives a single call.

use tracing::trace;

use super::config::{CaseMode, EscapeConvention, ScanConfig};
use crate::chars::{contains_with_mode, equals_with_mode};

/// A quoted region opening at some cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuotedRegion {
    /// Byte offset just past the region: past the closing quote when
    /// terminated, the input length otherwise.
    pub next: usize,
    pub terminated: bool,
}

pub(crate) struct Scanner<'a> {
    input: &'a str,
    config: &'a ScanConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, config: &'a ScanConfig) -> Self {
        Self { input, config }
    }

    /// The char starting at `idx`; `None` at or past the end.
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.input.get(idx..)?.chars().next()
    }

    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.input[from..to]
    }

    /// If a quote character sits at `idx`, find where its region ends.
    ///
    /// Only the opening character closes the region. Under
    /// [`EscapeConvention::DoubledChar`] a closing candidate immediately
    /// followed by a second copy is consumed as a literal quote. An
    /// unterminated region runs to the end of input.
    pub fn quoted_region_at(&self, idx: usize) -> Option<QuotedRegion> {
        let mut rest = self.input.get(idx..)?.char_indices();
        let (_, open) = rest.next()?;
        if !contains_with_mode(&self.config.quote_chars, open, self.config.case) {
            return None;
        }

        let mut rest = rest.peekable();
        while let Some((offset, c)) = rest.next() {
            if !self.same_quote(c, open) {
                continue;
            }
            let doubled = self.config.escape == EscapeConvention::DoubledChar
                && rest.next_if(|&(_, n)| self.same_quote(n, open)).is_some();
            if !doubled {
                return Some(QuotedRegion {
                    next: idx + offset + c.len_utf8(),
                    terminated: true,
                });
            }
        }

        trace!(
            offset = idx,
            quote = %open,
            "unterminated quoted region closed at end of input"
        );
        Some(QuotedRegion {
            next: self.input.len(),
            terminated: false,
        })
    }

    /// If `pattern` matches starting at `idx`, the byte offset just past it.
    pub fn match_at(&self, idx: usize, pattern: &[char], case: CaseMode) -> Option<usize> {
        let mut rest = self.input.get(idx..)?.chars();
        let mut end = idx;
        for &p in pattern {
            let c = rest.next().filter(|&c| equals_with_mode(c, p, case))?;
            end += c.len_utf8();
        }
        Some(end)
    }

    fn same_quote(&self, c: char, open: char) -> bool {
        equals_with_mode(c, open, self.config.case)
    }
}
