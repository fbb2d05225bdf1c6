use quotescan_core::operate_on_unquoted;
use quotescan_core::text::flatten_whitespace;
use std::path::Path;

use super::input::{read_input, scan_config};
use crate::cli::args::{UnquotedArgs, UnquotedOp};
use crate::exit_codes::SUCCESS;

pub fn run(args: UnquotedArgs, config: Option<&Path>) -> anyhow::Result<i32> {
    let cfg = scan_config(config, &args.quotes)?;
    let input = read_input(&args.input)?;

    let out = match args.op {
        UnquotedOp::Flatten => operate_on_unquoted(&input, flatten_whitespace, &cfg),
        UnquotedOp::Upper => operate_on_unquoted(&input, str::to_uppercase, &cfg),
        UnquotedOp::Lower => operate_on_unquoted(&input, str::to_lowercase, &cfg),
    };
    println!("{out}");
    Ok(SUCCESS)
}
