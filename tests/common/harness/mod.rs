//! Test harness for end-to-end CLI tests.

mod command;
mod env;

pub use command::JotCommand;
pub use env::TestEnv;
