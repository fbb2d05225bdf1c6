use quotescan_core::contains_outside_quotes;
use std::path::Path;

use super::input::{read_input, scan_config};
use crate::cli::args::ContainsArgs;
use crate::exit_codes::{NOT_FOUND, SUCCESS};

pub fn run(args: ContainsArgs, config: Option<&Path>) -> anyhow::Result<i32> {
    let cfg = scan_config(config, &args.quotes)?;
    let input = read_input(&args.input)?;
    let found = contains_outside_quotes(&input, &args.needle, &cfg)?;

    if !args.quiet {
        println!("{found}");
    }
    Ok(if found { SUCCESS } else { NOT_FOUND })
}
