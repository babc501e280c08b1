use std::collections::{HashMap, HashSet};

/// Options that were present without a value.
pub type BooleanOptions = HashSet<String>;

/// Options that were given a value, keyed by option name.
pub type ValueOptions = HashMap<String, String>;

/// The options collected for one scope (main command or subcommand).
///
/// Names keep their dashes: `-m`, `--verbose`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    flags: BooleanOptions,
    values: ValueOptions,
}

impl Options {
    pub(crate) fn insert_flag(&mut self, name: impl Into<String>) {
        self.flags.insert(name.into());
    }

    /// Last write wins when the same option is given twice.
    pub(crate) fn insert_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub const fn flags(&self) -> &BooleanOptions {
        &self.flags
    }

    pub const fn values(&self) -> &ValueOptions {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.values.is_empty()
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Returns `true` if the flag was given under either name, e.g. `-h` or `--help`.
    pub fn has_flag_or(&self, name: &str, alt: &str) -> bool {
        self.has_flag(name) || self.has_flag(alt)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Looks up `name`, falling back to `alt`, e.g. `-m` then `--message`.
    pub fn value_or(&self, name: &str, alt: &str) -> Option<&str> {
        self.value(name).or_else(|| self.value(alt))
    }
}

/// The subcommand named on the command line with everything that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcommand {
    name: String,
    options: Options,
    arguments: Vec<String>,
}

impl Subcommand {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::default(),
            arguments: Vec::new(),
        }
    }

    pub(crate) fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub(crate) fn push_argument(&mut self, argument: impl Into<String>) {
        self.arguments.push(argument.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn options(&self) -> &Options {
        &self.options
    }

    pub const fn boolean_options(&self) -> &BooleanOptions {
        self.options.flags()
    }

    pub const fn value_options(&self) -> &ValueOptions {
        self.options.values()
    }

    /// Positional arguments in the order they were given.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

/// A fully parsed invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    options: Options,
    subcommand: Option<Subcommand>,
}

impl Command {
    pub(crate) fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub(crate) fn set_subcommand(&mut self, subcommand: Subcommand) {
        self.subcommand = Some(subcommand);
    }

    /// Options given before the subcommand name.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    pub const fn boolean_options(&self) -> &BooleanOptions {
        self.options.flags()
    }

    pub const fn value_options(&self) -> &ValueOptions {
        self.options.values()
    }

    pub const fn subcommand(&self) -> Option<&Subcommand> {
        self.subcommand.as_ref()
    }

    pub fn into_subcommand(self) -> Option<Subcommand> {
        self.subcommand
    }
}
