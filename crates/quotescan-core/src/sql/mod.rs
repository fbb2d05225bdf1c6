//! SQL-flavoured helpers: a naive lexer, statement splitting that respects
//! `'` and `` ` `` quoting, and value cleaning.

mod lexer;

use lazy_static::lazy_static;
use regex::Regex;

use crate::scan::{self, ScanConfig, ScanError, SplitOptions};

pub use lexer::{lex_sql, sql_to_tokens, LexError, SqlToken};

const STATEMENT_TERMINATOR: char = ';';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

lazy_static! {
    /// CRLF, lone CR or LF.
    static ref LINE_BREAKS: Regex = Regex::new(r"\r\n?|\n").unwrap();
}

/// Split on `token` outside single-quoted literals and backtick identifiers.
pub fn split_seeing_sql_quotes(
    input: &str,
    token: &str,
    options: SplitOptions,
) -> Result<Vec<String>, ScanError> {
    scan::split_outside_quotes(input, token, options, &ScanConfig::sql())
}

/// Split a script into statements on `;`, ignoring semicolons inside quotes.
///
/// Each statement keeps its terminator. Blank statements are dropped.
///
/// ```
/// use quotescan_core::sql::split_sql_statements;
///
/// let stmts = split_sql_statements("INSERT INTO t VALUES ('a;b'); SELECT 1;");
/// assert_eq!(stmts, vec!["INSERT INTO t VALUES ('a;b');", " SELECT 1;"]);
/// ```
pub fn split_sql_statements(script: &str) -> Vec<String> {
    scan::split_on(
        script,
        &[STATEMENT_TERMINATOR],
        SplitOptions::default().including_token(),
        &ScanConfig::sql(),
    )
    .into_iter()
    .filter(|stmt| !stmt.trim_end_matches(STATEMENT_TERMINATOR).trim().is_empty())
    .collect()
}

/// Rewrite each doubled `''` escape inside a single-quoted literal as a
/// backtick. Doubled quotes outside literals (empty literals) are kept.
pub fn backtick_quotes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\'' {
            out.push(c);
        } else if chars.next_if_eq(&'\'').is_some() {
            out.push_str(if in_quotes { "`" } else { "''" });
        } else {
            in_quotes = !in_quotes;
            out.push('\'');
        }
    }
    out
}

/// Clean a value for embedding in a SQL literal and wrap it in `'`.
///
/// Not an injection guarantee; pass only the value, never a whole statement.
pub fn db_clean_and_quote(value: &str) -> String {
    format!("'{}'", db_clean_no_quote(value))
}

/// [`db_clean_and_quote`] without the surrounding quotes.
pub fn db_clean_no_quote(value: &str) -> String {
    let normalized = LINE_BREAKS.replace_all(value, "\n");
    let mut out = String::with_capacity(normalized.len() + 8);
    for c in normalized.chars() {
        match c {
            '\'' | RIGHT_SINGLE_QUOTE => out.push_str("''"),
            ';' => out.push_str("\\;"),
            _ => out.push(c),
        }
    }
    out
}
