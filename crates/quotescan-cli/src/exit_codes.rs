//! Exit codes for the quotescan CLI.
//! These codes are part of the public contract; scripts branch on them.

pub const SUCCESS: i32 = 0;
pub const NOT_FOUND: i32 = 1; // `contains` scanned everything without a match
pub const CONFIG_ERROR: i32 = 2; // Bad arguments, unreadable input or config
pub const LEX_ERROR: i32 = 3; // Malformed SQL literal
