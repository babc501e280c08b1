use std::process;

use tracing_subscriber::EnvFilter;

use subparser::cli::{Action, commands, output_config, parser, resolve, usage};
use subparser::output;
use subparser::ui::Style;

/// Exit code for a subcommand that ran and failed, as git uses.
const FAILURE: exitcode::ExitCode = 1;

fn main() {
    init_tracing();
    process::exit(run());
}

fn run() -> exitcode::ExitCode {
    let command = match parser().parse_env() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{} {e}", Style::error("error:"));
            eprintln!("{}", usage());
            return exitcode::USAGE;
        }
    };

    output::init(output_config(&command));

    match resolve(&command) {
        Action::Help => {
            println!("{}", usage());
            exitcode::OK
        }
        Action::Version => {
            println!(
                "subgit version {}",
                Style::secondary(env!("CARGO_PKG_VERSION"))
            );
            exitcode::OK
        }
        Action::Unknown(name) => {
            eprintln!("{} unknown command '{name}'", Style::error("error:"));
            eprintln!("{}", Style::hint("See 'subgit --help'."));
            exitcode::USAGE
        }
        Action::Run(git, sub) => match commands::run(git, sub) {
            Ok(()) => exitcode::OK,
            Err(e) => {
                tracing::debug!(command = git.name(), error = %e, "command failed");
                eprintln!("{} {e:#}", Style::error("error:"));
                FAILURE
            }
        },
    }
}

/// Logs go to stderr, filtered by `SUBGIT_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SUBGIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
