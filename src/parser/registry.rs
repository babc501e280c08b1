use std::collections::HashSet;

/// Declares which option names consume a value.
///
/// Every option the registry does not know about is treated as a boolean
/// flag, so declaring booleans is optional and only documents intent.
/// Setup methods are idempotent and chain:
///
/// ```
/// use subparser::OptionRegistry;
///
/// let registry = OptionRegistry::new()
///     .boolean("--verbose")
///     .value("-m")
///     .value("--message");
///
/// assert!(registry.takes_value("-m"));
/// assert!(!registry.takes_value("--verbose"));
/// assert!(!registry.takes_value("--unknown"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    boolean: HashSet<String>,
    value: HashSet<String>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` as a boolean flag.
    #[must_use]
    pub fn boolean(mut self, name: impl Into<String>) -> Self {
        self.boolean.insert(name.into());
        self
    }

    /// Declares `name` as an option that requires a value.
    #[must_use]
    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.value.insert(name.into());
        self
    }

    /// Returns `true` if `name` was declared as value-requiring.
    ///
    /// A name declared both ways takes a value.
    pub fn takes_value(&self, name: &str) -> bool {
        self.value.contains(name)
    }

    /// Returns `true` if `name` was declared either way.
    pub fn is_declared(&self, name: &str) -> bool {
        self.value.contains(name) || self.boolean.contains(name)
    }
}
