//! Process exit codes for the `balance` binary.

pub const SUCCESS: u8 = 0;
pub const INVALID: u8 = 1; // Input brackets are not balanced
pub const USAGE_ERROR: u8 = 2; // Bad arguments, unreadable or malformed config, editor failure
