//! Argument handling for the `subgit` example binary.

use crate::output::OutputConfig;
use crate::parser::{Command, OptionRegistry, Parser, Subcommand};

/// Returns the usage text printed for `-h`/`--help` or a bare invocation.
pub const fn usage() -> &'static str {
    "usage: subgit [-v | --version] [-h | --help] [-q | --quiet] [--no-color] <command> [<args>]

commands:
  add      Add file contents to the index
  branch   List, create, or delete branches
  clone    Clone a repository into a new directory
  commit   Record changes to the repository
  pull     Fetch from and integrate with another repository
  push     Update remote refs along with associated objects
  reset    Reset current HEAD to the specified state
  rm       Remove files from the working tree and from the index
  status   Show the working tree status"
}

/// Declares the options `subgit` understands.
///
/// Main-level and subcommand options share this one registry.
pub fn registry() -> OptionRegistry {
    OptionRegistry::new()
        .boolean("-h")
        .boolean("--help")
        .boolean("-v")
        .boolean("--version")
        .boolean("-q")
        .boolean("--quiet")
        .boolean("--no-color")
        .value("-m")
        .value("--message")
        .value("-b")
        .value("--branch")
        .value("--depth")
}

pub fn parser() -> Parser {
    Parser::new(registry())
}

/// Builds the output configuration from main-level flags.
pub fn output_config(command: &Command) -> OutputConfig {
    let options = command.options();
    let defaults = OutputConfig::default();
    OutputConfig {
        quiet: options.has_flag_or("-q", "--quiet"),
        no_color: defaults.no_color || options.has_flag("--no-color"),
    }
}

/// The subcommands `subgit` knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitCommand {
    Add,
    Branch,
    Clone,
    Commit,
    Pull,
    Push,
    Reset,
    Rm,
    Status,
}

impl GitCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "add" => Self::Add,
            "branch" => Self::Branch,
            "clone" => Self::Clone,
            "commit" => Self::Commit,
            "pull" => Self::Pull,
            "push" => Self::Push,
            "reset" => Self::Reset,
            "rm" => Self::Rm,
            "status" => Self::Status,
            _ => return None,
        };
        Some(command)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Branch => "branch",
            Self::Clone => "clone",
            Self::Commit => "commit",
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Reset => "reset",
            Self::Rm => "rm",
            Self::Status => "status",
        }
    }
}

/// What the binary should do with a parsed command line.
#[derive(Debug)]
pub enum Action<'a> {
    /// Print usage and exit successfully.
    Help,
    /// Print the version and exit successfully.
    Version,
    /// Run a known subcommand.
    Run(GitCommand, &'a Subcommand),
    /// The subcommand name is not one we know.
    Unknown(&'a str),
}

/// Decides what to do with a parsed command line.
///
/// `--help` wins over `--version`, and both win over any subcommand.
pub fn resolve(command: &Command) -> Action<'_> {
    let options = command.options();

    if options.has_flag_or("--help", "-h") {
        return Action::Help;
    }

    if options.has_flag_or("--version", "-v") {
        return Action::Version;
    }

    let Some(sub) = command.subcommand() else {
        return Action::Help;
    };

    GitCommand::from_name(sub.name())
        .map_or(Action::Unknown(sub.name()), |git| Action::Run(git, sub))
}
