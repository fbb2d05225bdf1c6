use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quotescan",
    version,
    about = "Quote-aware search, split and SQL lexing",
    after_help = "Input is read from the TEXT argument, --file, or stdin.\n\n\
                  Exit codes: 0 ok/found, 1 not found, 2 config or I/O error, 3 lex error"
)]
pub struct Cli {
    /// YAML scan config (quote_chars, case, escape)
    #[arg(long, global = true, env = "QUOTESCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether NEEDLE occurs outside quoted regions
    Contains(ContainsArgs),
    /// Split on TOKEN wherever it occurs outside quoted regions
    Split(SplitArgs),
    /// Split a SQL script into statements on unquoted semicolons
    SqlSplit(SqlSplitArgs),
    /// Lex a SQL fragment into identifiers, literals and NOW() calls
    Lex(LexArgs),
    /// Cut input to a byte budget without splitting a code point
    Truncate(TruncateArgs),
    /// Rewrite only the text outside quoted regions
    Unquoted(UnquotedArgs),
    /// Show the quoted and unquoted spans of the input
    Spans(SpansArgs),
    /// Turn doubled single quotes into backticks
    Backtick(BacktickArgs),
    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to scan; reads stdin when omitted
    pub text: Option<String>,

    /// Read the input from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Quote character, repeatable; replaces the configured quote set
    #[arg(long = "quote", value_name = "CHAR")]
    pub quotes: Vec<char>,

    /// Match case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// A repeated quote always closes the region
    #[arg(long)]
    pub no_escape: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ContainsArgs {
    /// Substring to look for
    pub needle: String,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub quotes: QuoteArgs,

    /// Print nothing; report through the exit code only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Split token
    pub token: String,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub quotes: QuoteArgs,

    /// Keep the matched token at the end of each segment
    #[arg(long)]
    pub include_token: bool,

    /// Emit segments as found, including blank ones
    #[arg(long)]
    pub no_trim: bool,

    /// Match the split token case-sensitively
    #[arg(long)]
    pub token_case_sensitive: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct SqlSplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct LexArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct TruncateArgs {
    /// Maximum encoded length in bytes
    #[arg(short, long)]
    pub bytes: usize,

    /// Skip this many characters before cutting
    #[arg(long, default_value_t = 0)]
    pub from_char: usize,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnquotedOp {
    /// Collapse whitespace runs to one space
    Flatten,
    Upper,
    Lower,
}

#[derive(Args, Debug, Clone)]
pub struct UnquotedArgs {
    /// Transform applied to each unquoted chunk
    #[arg(long, value_enum, default_value_t = UnquotedOp::Flatten)]
    pub op: UnquotedOp,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub quotes: QuoteArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SpansArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub quotes: QuoteArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct BacktickArgs {
    #[command(flatten)]
    pub input: InputArgs,
}
