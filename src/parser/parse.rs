//! The single-pass argv parser.
//!
//! Tokens are consumed left to right with no backtracking:
//!
//! ```text
//! program [main-options] <subcommand> [sub-options] [--] [positional...]
//! ```
//!
//! Options before the subcommand name land on the [`Command`], options after
//! it on the [`Subcommand`](super::Subcommand). One [`OptionRegistry`] decides
//! which names take a value in both scopes.

use tracing::{debug, trace};

use super::{
    Command, OptionRegistry, Options, ParseError, ParseResult, Subcommand,
    classify::{TokenKind, classify},
};

/// Parses argv lists against a fixed [`OptionRegistry`].
///
/// The parser only holds configuration, so one instance can serve any number
/// of `parse` calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    registry: OptionRegistry,
}

impl Parser {
    pub const fn new(registry: OptionRegistry) -> Self {
        Self { registry }
    }

    pub const fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Parses the current process arguments, skipping the program name.
    pub fn parse_env(&self) -> ParseResult {
        let args: Vec<String> = std::env::args().skip(1).collect();
        self.parse(&args)
    }

    /// Parses `tokens` into a [`Command`].
    ///
    /// The first value-requiring option with no value available aborts the
    /// whole parse; no partial command is returned.
    ///
    /// ```
    /// use subparser::{OptionRegistry, Parser};
    ///
    /// let parser = Parser::new(OptionRegistry::new().value("-m"));
    /// let command = parser.parse(&["commit", "-am", "fix bug"]).unwrap();
    /// let commit = command.subcommand().unwrap();
    ///
    /// assert_eq!(commit.name(), "commit");
    /// assert!(commit.options().has_flag("-a"));
    /// assert_eq!(commit.options().value("-m"), Some("fix bug"));
    /// ```
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult {
        let mut command = Command::default();
        let mut cursor = 0;

        while let Some(next) = self.take_option(tokens, cursor, command.options_mut())? {
            cursor = next;
        }

        let Some(name) = token_at(tokens, cursor) else {
            debug!("no subcommand given");
            return Ok(command);
        };

        debug!(subcommand = name, "found subcommand");
        let mut subcommand = Subcommand::new(name);
        cursor += 1;

        let mut positional_only = false;
        while let Some(token) = token_at(tokens, cursor) {
            if !positional_only {
                if classify(token) == TokenKind::Separator {
                    trace!("separator, remaining tokens are positional");
                    positional_only = true;
                    cursor += 1;
                    continue;
                }

                if let Some(next) = self.take_option(tokens, cursor, subcommand.options_mut())? {
                    cursor = next;
                    continue;
                }
            }

            subcommand.push_argument(token);
            cursor += 1;
        }

        command.set_subcommand(subcommand);
        Ok(command)
    }

    /// Applies the option at `cursor` to `options`.
    ///
    /// Returns the cursor past the option and any value it consumed, or
    /// `None` if the token there is not an option.
    fn take_option<S: AsRef<str>>(
        &self,
        tokens: &[S],
        cursor: usize,
        options: &mut Options,
    ) -> Result<Option<usize>, ParseError> {
        let Some(token) = token_at(tokens, cursor) else {
            return Ok(None);
        };

        match classify(token) {
            TokenKind::LongOption(name) => self.take_long(name, tokens, cursor, options).map(Some),
            TokenKind::ShortCluster(flags) => {
                self.take_cluster(flags, tokens, cursor, options).map(Some)
            }
            TokenKind::Separator | TokenKind::Positional(_) => Ok(None),
        }
    }

    fn take_long<S: AsRef<str>>(
        &self,
        name: &str,
        tokens: &[S],
        cursor: usize,
        options: &mut Options,
    ) -> Result<usize, ParseError> {
        if !self.registry.takes_value(name) {
            trace!(option = name, "flag");
            options.insert_flag(name);
            return Ok(cursor + 1);
        }

        let value = value_after(tokens, cursor, name)?;
        trace!(option = name, value, "value option");
        options.insert_value(name, value);
        Ok(cursor + 2)
    }

    /// Expands `-abc` into `-a`, `-b`, `-c`.
    ///
    /// The first value-requiring flag ends the cluster: it takes the rest of
    /// the token as its value, or the next token if it is the last character.
    fn take_cluster<S: AsRef<str>>(
        &self,
        flags: &str,
        tokens: &[S],
        cursor: usize,
        options: &mut Options,
    ) -> Result<usize, ParseError> {
        for (offset, flag) in flags.char_indices() {
            let name = format!("-{flag}");

            if !self.registry.takes_value(&name) {
                trace!(option = %name, "flag");
                options.insert_flag(name);
                continue;
            }

            let glued = &flags[offset + flag.len_utf8()..];
            if !glued.is_empty() {
                trace!(option = %name, value = glued, "glued value option");
                options.insert_value(name, glued);
                return Ok(cursor + 1);
            }

            let value = value_after(tokens, cursor, &name)?;
            trace!(option = %name, value, "value option");
            options.insert_value(name, value);
            return Ok(cursor + 2);
        }

        Ok(cursor + 1)
    }
}

fn token_at<S: AsRef<str>>(tokens: &[S], cursor: usize) -> Option<&str> {
    tokens.get(cursor).map(AsRef::as_ref)
}

fn value_after<'t, S: AsRef<str>>(
    tokens: &'t [S],
    cursor: usize,
    option: &str,
) -> Result<&'t str, ParseError> {
    token_at(tokens, cursor + 1).ok_or_else(|| {
        debug!(option, "missing value");
        ParseError::missing_value(option)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parser() -> Parser {
        Parser::new(
            OptionRegistry::new()
                .value("-m")
                .value("--message")
                .value("-b"),
        )
    }

    #[test]
    fn test_empty_input() {
        let command = parser().parse::<&str>(&[]).unwrap();
        assert_eq!(command, Command::default());
    }

    #[test]
    fn test_main_options_without_subcommand() {
        let command = parser().parse(&["--verbose", "-q"]).unwrap();
        assert!(command.options().has_flag("--verbose"));
        assert!(command.options().has_flag("-q"));
        assert!(command.subcommand().is_none());
    }

    #[test]
    fn test_main_value_option_consumes_next_token() {
        let command = parser().parse(&["--message", "status", "push"]).unwrap();
        assert_eq!(command.options().value("--message"), Some("status"));
        assert_eq!(command.subcommand().unwrap().name(), "push");
    }

    #[test]
    fn test_subcommand_name_is_first_non_option() {
        let command = parser().parse(&["-v", "add", "-v"]).unwrap();
        assert!(command.options().has_flag("-v"));
        let sub = command.subcommand().unwrap();
        assert_eq!(sub.name(), "add");
        assert!(sub.options().has_flag("-v"));
        assert!(sub.arguments().is_empty());
    }

    #[test]
    fn test_cluster_of_flags() {
        let command = Parser::default().parse(&["-abc"]).unwrap();
        let mut flags: Vec<_> = command.boolean_options().iter().cloned().collect();
        flags.sort();
        assert_eq!(flags, ["-a", "-b", "-c"]);
        assert!(command.value_options().is_empty());
    }

    #[test]
    fn test_cluster_with_value_flag_in_the_middle() {
        let command = parser().parse(&["-abc"]).unwrap();
        assert!(command.options().has_flag("-a"));
        assert_eq!(command.options().value("-b"), Some("c"));
        assert!(!command.options().has_flag("-c"));
    }

    #[test]
    fn test_cluster_stops_at_glued_value() {
        let command = parser().parse(&["x", "-amHello-b"]).unwrap();
        let sub = command.subcommand().unwrap();
        assert!(sub.options().has_flag("-a"));
        assert_eq!(sub.options().value("-m"), Some("Hello-b"));
        assert!(!sub.options().has_flag("-b"));
        assert_eq!(sub.boolean_options().len(), 1);
    }

    #[test]
    fn test_cluster_value_flag_last_consumes_next_token() {
        let command = parser().parse(&["commit", "-am", "fix bug", "file"]).unwrap();
        let sub = command.subcommand().unwrap();
        assert!(sub.options().has_flag("-a"));
        assert_eq!(sub.options().value("-m"), Some("fix bug"));
        assert_eq!(sub.arguments(), ["file"]);
    }

    #[test]
    fn test_consumed_value_is_taken_verbatim() {
        let command = parser().parse(&["commit", "-m", "--", "-x"]).unwrap();
        let sub = command.subcommand().unwrap();
        assert_eq!(sub.options().value("-m"), Some("--"));
        assert!(sub.options().has_flag("-x"));
        assert!(sub.arguments().is_empty());
    }

    #[test]
    fn test_multibyte_cluster() {
        let registry = OptionRegistry::new().value("-é");
        let command = Parser::new(registry).parse(&["-aéçà"]).unwrap();
        assert!(command.options().has_flag("-a"));
        assert_eq!(command.options().value("-é"), Some("çà"));
    }

    #[test]
    fn test_separator_switches_to_positional() {
        let command = parser().parse(&["add", "-f", "--", "-m", "--", "--all"]).unwrap();
        let sub = command.subcommand().unwrap();
        assert!(sub.options().has_flag("-f"));
        assert!(sub.value_options().is_empty());
        assert_eq!(sub.arguments(), ["-m", "--", "--all"]);
    }

    #[test]
    fn test_options_and_arguments_interleave() {
        let command = parser().parse(&["rm", "a", "-r", "b", "--cached", "c"]).unwrap();
        let sub = command.subcommand().unwrap();
        assert_eq!(sub.arguments(), ["a", "b", "c"]);
        assert!(sub.options().has_flag_or("-r", "--recursive"));
        assert!(sub.options().has_flag("--cached"));
    }

    #[test]
    fn test_lone_dash_is_positional() {
        let command = parser().parse(&["cat", "-"]).unwrap();
        assert_eq!(command.subcommand().unwrap().arguments(), ["-"]);
    }

    #[test]
    fn test_separator_before_subcommand_becomes_its_name() {
        let command = parser().parse(&["--", "add"]).unwrap();
        let sub = command.subcommand().unwrap();
        assert_eq!(sub.name(), "--");
        assert_eq!(sub.arguments(), ["add"]);
    }

    #[test]
    fn test_repeated_value_option_last_write_wins() {
        let command = parser().parse(&["commit", "-m", "one", "-mtwo"]).unwrap();
        assert_eq!(command.subcommand().unwrap().options().value("-m"), Some("two"));
    }

    #[test]
    fn test_missing_value_at_end_fails() {
        let err = parser().parse(&["commit", "-m"]).unwrap_err();
        assert_eq!(err, ParseError::missing_value("-m"));
    }

    #[test]
    fn test_missing_value_in_cluster_names_the_flag() {
        let err = parser().parse(&["commit", "-am"]).unwrap_err();
        assert_eq!(err.option(), "-m");
    }

    #[test]
    fn test_missing_long_value_at_main_level_fails() {
        let err = parser().parse(&["--message"]).unwrap_err();
        assert_eq!(err.option(), "--message");
    }

    #[test]
    fn test_parse_is_repeatable() {
        let parser = parser();
        let tokens = ["-q", "commit", "-am", "msg", "--", "x"];
        assert_eq!(parser.parse(&tokens), parser.parse(&tokens));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let tokens: Vec<String> = vec!["status".into(), "-s".into()];
        let command = parser().parse(&tokens).unwrap();
        assert!(command.subcommand().unwrap().options().has_flag("-s"));
    }
}
