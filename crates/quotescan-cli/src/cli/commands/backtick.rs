use quotescan_core::sql::backtick_quotes;

use super::input::read_input;
use crate::cli::args::BacktickArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: BacktickArgs) -> anyhow::Result<i32> {
    let input = read_input(&args.input)?;
    println!("{}", backtick_quotes(&input));
    Ok(SUCCESS)
}
