//! REPL Module
//!
//! Command parsing, per-run session state and the interactive loop.
//!
//! # Commands
//! - `help`, `map`, `mapb`, `explore <area>`, `catch <pokemon>`,
//!   `inspect <pokemon>`, `pokedex`, `exit`

mod command;
mod session;
mod shell;

pub use command::{Command, COMMANDS};
pub use session::{ControlFlow, Session};
pub use shell::Repl;
