#![no_main]

//! Quote-aware scans over arbitrary UTF-8 must never panic, and the
//! lossless operations must reproduce their input.

use libfuzzer_sys::fuzz_target;
use quotescan_core::{
    contains_outside_quotes, operate_on_unquoted, quoted_spans, split_outside_quotes,
    truncate_to_byte_length, CaseMode, ScanConfig, SplitOptions,
};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if input.len() > 8192 {
        return;
    }

    for cfg in [
        ScanConfig::default(),
        ScanConfig::sql(),
        ScanConfig::new(vec!['"', 'ß']).with_case(CaseMode::Insensitive),
    ] {
        let _ = contains_outside_quotes(input, "or", &cfg);

        let opts = SplitOptions::default().including_token().untrimmed();
        let parts = split_outside_quotes(input, ";", opts, &cfg).unwrap();
        assert_eq!(parts.concat(), input);

        let spans = quoted_spans(input, &cfg);
        assert_eq!(spans.last().map_or(0, |s| s.end), input.len());

        assert_eq!(operate_on_unquoted(input, str::to_string, &cfg), input);
    }

    for max in [0, 1, 3, input.len() / 2, input.len()] {
        let cut = truncate_to_byte_length(input, max);
        assert!(cut.len() <= max && input.starts_with(cut));
    }
});
