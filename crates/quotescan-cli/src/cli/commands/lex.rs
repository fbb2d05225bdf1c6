use quotescan_core::{lex_sql, SqlToken};

use super::input::read_input;
use crate::cli::args::{LexArgs, OutputFormat};
use crate::exit_codes::{LEX_ERROR, SUCCESS};

pub fn run(args: LexArgs) -> anyhow::Result<i32> {
    let input = read_input(&args.input)?;
    let tokens = match lex_sql(&input) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(LEX_ERROR);
        }
    };

    match args.format {
        OutputFormat::Text => {
            for token in &tokens {
                println!("{:<16}{}", kind_label(token), token);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
    }
    Ok(SUCCESS)
}

fn kind_label(token: &SqlToken) -> &'static str {
    match token {
        SqlToken::Identifier(_) => "identifier",
        SqlToken::StringLiteral(_) => "string_literal",
        SqlToken::FunctionCall(_) => "function_call",
    }
}
