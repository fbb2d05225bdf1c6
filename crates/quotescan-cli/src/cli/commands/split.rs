use quotescan_core::{split_outside_quotes, CaseMode, SplitOptions};
use std::path::Path;

use super::input::{read_input, scan_config};
use crate::cli::args::{OutputFormat, SplitArgs};
use crate::exit_codes::SUCCESS;

pub fn run(args: SplitArgs, config: Option<&Path>) -> anyhow::Result<i32> {
    let cfg = scan_config(config, &args.quotes)?;
    let input = read_input(&args.input)?;

    let mut options = SplitOptions::default();
    if args.include_token {
        options = options.including_token();
    }
    if args.no_trim {
        options = options.untrimmed();
    }
    if args.token_case_sensitive {
        options = options.with_token_case(CaseMode::Sensitive);
    }

    let segments = split_outside_quotes(&input, &args.token, options, &cfg)?;
    print_segments(&segments, args.format)?;
    Ok(SUCCESS)
}

/// One segment per line, or a JSON array of strings.
pub(crate) fn print_segments(segments: &[String], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for segment in segments {
                println!("{segment}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(segments)?),
    }
    Ok(())
}
