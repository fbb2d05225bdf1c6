//! A naive single-statement SQL tokenizer.
//!
//! This is not a parser. It flattens a statement into identifier runs,
//! single-quoted literals and the one recognised function call `NOW()`.
//! Whitespace, parentheses and commas separate tokens and are never emitted,
//! so `COUNT(x)` lexes as `COUNT`, `x` rather than gluing the call name to its
//! argument.
//!
//! Literals are found by the shared quote scanner configured with
//! [`EscapeConvention::None`]: a literal ends at the next `'` and doubled
//! quotes are not unescaped, so `'it''s'` lexes as two literals. Use
//! [`crate::scan`] with the default config when the doubled-quote convention
//! matters.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::scan::engine::Scanner;
use crate::scan::{CaseMode, EscapeConvention, ScanConfig};

const NOW_CALL: &str = "NOW()";
const LITERAL_QUOTE: char = '\'';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum SqlToken {
    /// A keyword, name, number or operator run.
    Identifier(String),
    /// A literal, re-wrapped in its single quotes.
    StringLiteral(String),
    /// Currently only `NOW()`.
    FunctionCall(String),
}

impl SqlToken {
    pub fn as_str(&self) -> &str {
        match self {
            SqlToken::Identifier(s) | SqlToken::StringLiteral(s) | SqlToken::FunctionCall(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            SqlToken::Identifier(s) | SqlToken::StringLiteral(s) | SqlToken::FunctionCall(s) => s,
        }
    }
}

impl fmt::Display for SqlToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// `position` is the byte offset of the opening quote.
    #[error("unterminated string literal starting at byte {position}")]
    UnterminatedLiteral { position: usize },
}

/// Tokenize one SQL statement, left to right.
///
/// ```
/// use quotescan_core::sql::{lex_sql, SqlToken};
///
/// let tokens = lex_sql("SELECT 'a,b', NOW() FROM t").unwrap();
/// assert_eq!(tokens[1], SqlToken::StringLiteral("'a,b'".into()));
/// assert_eq!(tokens[2], SqlToken::FunctionCall("NOW()".into()));
/// ```
pub fn lex_sql(input: &str) -> Result<Vec<SqlToken>, LexError> {
    let config = literal_config();
    let scanner = Scanner::new(input, &config);
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while let Some(c) = scanner.char_at(i) {
        if let Some(region) = scanner.quoted_region_at(i) {
            flush_identifier(&mut current, &mut tokens);
            if !region.terminated {
                debug!(position = i, "unterminated SQL string literal");
                return Err(LexError::UnterminatedLiteral { position: i });
            }
            tokens.push(SqlToken::StringLiteral(
                scanner.slice(i, region.next).to_string(),
            ));
            i = region.next;
            continue;
        }

        let mut next = i + c.len_utf8();
        match c {
            ' ' | '\r' | '\n' | '\t' => {
                flush_identifier(&mut current, &mut tokens);
                while let Some(w) = scanner.char_at(next).filter(|w| w.is_whitespace()) {
                    next += w.len_utf8();
                }
            }
            '(' | ')' | ',' => flush_identifier(&mut current, &mut tokens),
            'N' if input[i..].starts_with(NOW_CALL) => {
                flush_identifier(&mut current, &mut tokens);
                tokens.push(SqlToken::FunctionCall(NOW_CALL.to_string()));
                next = i + NOW_CALL.len();
            }
            _ => current.push(c),
        }
        i = next;
    }
    flush_identifier(&mut current, &mut tokens);

    debug!(tokens = tokens.len(), "lexed SQL statement");
    Ok(tokens)
}

/// Single quotes only, matched exactly, closed by the first repeat.
fn literal_config() -> ScanConfig {
    ScanConfig::new(vec![LITERAL_QUOTE])
        .with_case(CaseMode::Sensitive)
        .with_escape(EscapeConvention::None)
}

/// Text-only view of [`lex_sql`].
pub fn sql_to_tokens(input: &str) -> Result<Vec<String>, LexError> {
    Ok(lex_sql(input)?
        .into_iter()
        .map(SqlToken::into_string)
        .collect())
}

fn flush_identifier(current: &mut String, tokens: &mut Vec<SqlToken>) {
    if current.trim().is_empty() {
        current.clear();
    } else {
        tokens.push(SqlToken::Identifier(std::mem::take(current)));
    }
}
