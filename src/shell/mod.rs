//! Interactive shell
//!
//! Parses command lines and drives the catalog through its load, mutate and
//! persist cycle.

pub mod command;
pub mod config;
pub mod lexer;
pub mod session;

pub use command::{parse_command, Command};
pub use config::ShellConfig;
pub use session::{help_lines, Response, Session};
