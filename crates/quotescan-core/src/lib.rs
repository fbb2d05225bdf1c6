//! Quote-aware text scanning.
//!
//! Every routine here walks an immutable input once, left to right, tracking
//! whether the cursor sits inside a quoted region. Matches and splits are
//! suppressed inside quotes; a doubled quote character inside a region is a
//! literal quote, not a close-then-reopen.
//!
//! ```
//! use quotescan_core::scan::{contains_outside_quotes, ScanConfig};
//!
//! let cfg = ScanConfig::default();
//! assert!(contains_outside_quotes("id = 3 or 4", "OR", &cfg).unwrap());
//! assert!(!contains_outside_quotes("name = 'a or b'", "or", &cfg).unwrap());
//! ```

pub mod chars;
pub mod scan;
pub mod sql;
pub mod text;
pub mod utf8;

// Convenience re-exports
pub use scan::{
    contains_outside_quotes, operate_on_unquoted, quoted_spans, split_outside_quotes, CaseMode,
    EscapeConvention, ScanConfig, ScanError, Span, SpanKind, SplitOptions,
};
pub use sql::{lex_sql, split_sql_statements, LexError, SqlToken};
pub use utf8::truncate_to_byte_length;
