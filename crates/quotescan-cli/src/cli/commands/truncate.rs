use quotescan_core::utf8::safe_utf8_substring;

use super::input::read_input;
use crate::cli::args::TruncateArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: TruncateArgs) -> anyhow::Result<i32> {
    let input = read_input(&args.input)?;
    let out = safe_utf8_substring(&input, args.from_char, args.bytes);
    tracing::debug!(
        input_bytes = input.len(),
        output_bytes = out.len(),
        "truncated"
    );
    println!("{out}");
    Ok(SUCCESS)
}
