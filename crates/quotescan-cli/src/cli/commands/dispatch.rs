use super::*;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let config = cli.config.as_deref();
    match cli.cmd {
        Command::Contains(args) => contains::run(args, config),
        Command::Split(args) => split::run(args, config),
        Command::SqlSplit(args) => sql_split::run(args),
        Command::Lex(args) => lex::run(args),
        Command::Truncate(args) => truncate::run(args),
        Command::Unquoted(args) => unquoted::run(args, config),
        Command::Spans(args) => spans::run(args, config),
        Command::Backtick(args) => backtick::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(crate::exit_codes::SUCCESS)
        }
    }
}
