use super::args::*;

pub mod backtick;
pub mod contains;
mod dispatch;
pub mod input;
pub mod lex;
pub mod spans;
pub mod split;
pub mod sql_split;
pub mod truncate;
pub mod unquoted;

pub use dispatch::dispatch;
