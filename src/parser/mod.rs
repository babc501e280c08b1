//! Argv parsing: token classification, the option registry and the parser.

mod classify;
mod command;
mod error;
mod parse;
mod registry;

pub use classify::{TokenKind, classify};
pub use command::{BooleanOptions, Command, Options, Subcommand, ValueOptions};
pub use error::{ParseError, ParseResult};
pub use parse::Parser;
pub use registry::OptionRegistry;
