//! Token classification.
//!
//! Classification is purely lexical. Whether an option takes a value is
//! decided later by the registry.

/// The lexical shape of a single argv token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// `--name`. The whole token, dashes included, is the option name.
    LongOption(&'a str),
    /// `-abc`. Holds the flag characters after the leading dash.
    ShortCluster(&'a str),
    /// Exactly `--`.
    Separator,
    /// Anything else, including a lone `-` and the empty string.
    Positional(&'a str),
}

impl TokenKind<'_> {
    /// Returns `true` for long options and short clusters.
    pub const fn is_option(&self) -> bool {
        matches!(self, Self::LongOption(_) | Self::ShortCluster(_))
    }
}

/// Classifies a token by its leading dashes.
pub fn classify(token: &str) -> TokenKind<'_> {
    if token == "--" {
        return TokenKind::Separator;
    }

    if token.starts_with("--") {
        return TokenKind::LongOption(token);
    }

    match token.strip_prefix('-') {
        Some(flags) if !flags.is_empty() => TokenKind::ShortCluster(flags),
        _ => TokenKind::Positional(token),
    }
}
