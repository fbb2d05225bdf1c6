use quotescan_core::quoted_spans;
use serde::Serialize;
use std::path::Path;

use super::input::{read_input, scan_config};
use crate::cli::args::{OutputFormat, SpansArgs};
use crate::exit_codes::SUCCESS;

#[derive(Serialize)]
struct SpanRow<'a> {
    #[serde(flatten)]
    span: quotescan_core::Span,
    text: &'a str,
}

pub fn run(args: SpansArgs, config: Option<&Path>) -> anyhow::Result<i32> {
    let cfg = scan_config(config, &args.quotes)?;
    let input = read_input(&args.input)?;
    let spans = quoted_spans(&input, &cfg);

    match args.format {
        OutputFormat::Text => {
            for span in &spans {
                println!(
                    "{:<20}{:>6}..{:<6}{}",
                    span.kind.as_str(),
                    span.start,
                    span.end,
                    span.text(&input)
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<SpanRow<'_>> = spans
                .iter()
                .map(|span| SpanRow {
                    span: *span,
                    text: span.text(&input),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(SUCCESS)
}
