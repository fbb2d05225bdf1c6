#![no_main]

//! The SQL lexer and statement splitter must never panic on arbitrary input.

use libfuzzer_sys::fuzz_target;
use quotescan_core::sql::{lex_sql, split_sql_statements};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if input.len() > 8192 {
        return;
    }

    if let Ok(tokens) = lex_sql(input) {
        for token in &tokens {
            assert!(!token.as_str().is_empty());
        }
    }

    for statement in split_sql_statements(input) {
        let _ = lex_sql(&statement);
    }
});
