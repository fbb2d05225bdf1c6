use quotescan_core::sql::{backtick_quotes, split_seeing_sql_quotes, sql_to_tokens};
use quotescan_core::text::{flatten_whitespace, non_whitespace_tokens};
use quotescan_core::{
    contains_outside_quotes, lex_sql, operate_on_unquoted, split_outside_quotes,
    split_sql_statements, truncate_to_byte_length, CaseMode, LexError, ScanConfig, ScanError,
    SplitOptions, SqlToken,
};

#[test]
fn test_or_keyword_detection() {
    let cfg = ScanConfig::default();
    assert!(contains_outside_quotes("id = 3 or 4", "OR", &cfg).unwrap());
    assert!(!contains_outside_quotes("name = 'this or that'", "OR", &cfg).unwrap());
    assert!(!contains_outside_quotes("name = 'O''Neil or not'", "or", &cfg).unwrap());
    assert!(!contains_outside_quotes("name = 'red'", "or", &cfg).unwrap());
}

#[test]
fn test_split_csv_like() {
    let cfg = ScanConfig::default();
    let parts = split_outside_quotes("a,b,'c,d',e", ",", SplitOptions::default(), &cfg).unwrap();
    assert_eq!(parts, vec!["a", "b", "'c,d'", "e"]);
}

#[test]
fn test_configuration_errors() {
    let cfg = ScanConfig::default();
    assert_eq!(
        contains_outside_quotes("x", "", &cfg).unwrap_err(),
        ScanError::EmptyNeedle
    );
    let err = split_outside_quotes("x", "", SplitOptions::default(), &cfg).unwrap_err();
    assert_eq!(err.to_string(), "split token must not be empty");
}

#[test]
fn test_script_pipeline() {
    // Split a script, then lex each statement.
    let script = "INSERT INTO log VALUES ('a;b', NOW());\nSELECT `x;y` FROM log;";
    let statements = split_sql_statements(script);
    assert_eq!(statements.len(), 2);

    let first = sql_to_tokens(statements[0].trim_end_matches(';')).unwrap();
    assert_eq!(first, vec!["INSERT", "INTO", "log", "VALUES", "'a;b'", "NOW()"]);

    let second = split_seeing_sql_quotes(&statements[1], " ", SplitOptions::default()).unwrap();
    assert_eq!(second, vec!["\nSELECT", "`x;y`", "FROM", "log;"]);
}

#[test]
fn test_lexer_example() {
    let tokens = lex_sql("SELECT 'a,b', NOW() FROM t").unwrap();
    let texts: Vec<&str> = tokens.iter().map(SqlToken::as_str).collect();
    assert_eq!(texts, vec!["SELECT", "'a,b'", "NOW()", "FROM", "t"]);
}

#[test]
fn test_lexer_unterminated() {
    let err = lex_sql("SELECT 'oops").unwrap_err();
    assert_eq!(err, LexError::UnterminatedLiteral { position: 7 });
    assert_eq!(
        err.to_string(),
        "unterminated string literal starting at byte 7"
    );
}

#[test]
fn test_flatten_outside_literals() {
    let cfg = ScanConfig::sql();
    let out = operate_on_unquoted(
        "SELECT   a,\n\t b FROM t WHERE c = 'two  spaces'",
        flatten_whitespace,
        &cfg,
    );
    assert_eq!(out, "SELECT a, b FROM t WHERE c = 'two  spaces'");
}

#[test]
fn test_case_sensitive_config_from_yaml() {
    let cfg = ScanConfig::from_yaml("case: sensitive\nquote_chars: [\"`\"]").unwrap();
    assert_eq!(cfg.case, CaseMode::Sensitive);
    assert!(contains_outside_quotes("'OR'", "OR", &cfg).unwrap());
    assert!(!contains_outside_quotes("`OR`", "OR", &cfg).unwrap());
}

#[test]
fn test_byte_bounded_preview() {
    let s = "This is a 10¢ test";
    for n in 0..=s.len() {
        let cut = truncate_to_byte_length(s, n);
        assert!(cut.len() <= n);
        assert!(s.starts_with(cut));
    }
    assert_eq!(truncate_to_byte_length(s, 13), "This is a 10");
}

#[test]
fn test_misc_helpers() {
    assert_eq!(backtick_quotes("'it''s'"), "'it`s'");
    assert_eq!(non_whitespace_tokens("f(a, b)"), vec!["f", "a", "b"]);
}
