use quotescan_core::split_sql_statements;

use super::input::read_input;
use super::split::print_segments;
use crate::cli::args::{OutputFormat, SqlSplitArgs};
use crate::exit_codes::SUCCESS;

pub fn run(args: SqlSplitArgs) -> anyhow::Result<i32> {
    let script = read_input(&args.input)?;
    let statements = split_sql_statements(&script);

    // Statements keep their own whitespace in JSON; text output trims them to one line each
    let statements: Vec<String> = match args.format {
        OutputFormat::Text => statements.iter().map(|s| s.trim().to_string()).collect(),
        OutputFormat::Json => statements,
    };
    print_segments(&statements, args.format)?;
    Ok(SUCCESS)
}
