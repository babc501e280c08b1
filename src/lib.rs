//! # subparser - argv parsing for subcommand-style programs
//!
//! `subparser` turns a flat list of argv strings into a structured
//! invocation: main-level options, an optional subcommand, the subcommand's
//! own options and its positional arguments.
//!
//! ## Features
//!
//! - **Clustered short flags**: `-abc` is `-a`, `-b`, `-c`
//! - **Value options**: `-m VALUE`, `-mVALUE` and `--message VALUE`
//! - **Separator**: `--` makes every later subcommand token positional
//! - **All or nothing**: a missing option value fails the whole parse
//!
//! ## Quick Start
//!
//! ```
//! use subparser::{OptionRegistry, Parser};
//!
//! let parser = Parser::new(OptionRegistry::new().value("-m"));
//!
//! let command = parser.parse(&["--verbose", "commit", "-m", "fix bug"]).unwrap();
//! assert!(command.options().has_flag("--verbose"));
//!
//! let commit = command.subcommand().unwrap();
//! assert_eq!(commit.name(), "commit");
//! assert_eq!(commit.options().value("-m"), Some("fix bug"));
//!
//! let err = parser.parse(&["commit", "-m"]).unwrap_err();
//! assert_eq!(err.to_string(), "option '-m' requires a value");
//! ```
//!
//! The `subgit` binary in this package is a toy git-like CLI built on the
//! parser.

/// The `subgit` example command line.
pub mod cli;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Token classification, option registry and parser.
pub mod parser;

/// Terminal styling helpers.
pub mod ui;

pub use parser::{
    BooleanOptions, Command, OptionRegistry, Options, ParseError, ParseResult, Parser, Subcommand,
    TokenKind, ValueOptions, classify,
};
