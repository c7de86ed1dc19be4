/// The value arity of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The option stands alone; its presence resolves to `true`.
    Flag,
    /// The option consumes the following token as its value.
    Value,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Flag => write!(f, "flag"),
            ValueKind::Value => write!(f, "value"),
        }
    }
}

/// The declared aliases and value arity of a single option.
///
/// Aliases are matched after the prefix (ex: `-` or `--`) has been stripped from the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionDescriptor {
    short: Option<String>,
    long: Option<String>,
    value_kind: ValueKind,
}

impl OptionDescriptor {
    /// Create a descriptor without any aliases.
    pub fn new(value_kind: ValueKind) -> Self {
        Self {
            short: None,
            long: None,
            value_kind,
        }
    }

    pub(crate) fn set_short(&mut self, alias: String) {
        self.short.replace(alias);
    }

    pub(crate) fn set_long(&mut self, alias: String) {
        self.long.replace(alias);
    }

    /// The short alias, if declared.
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long alias, if declared.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The value arity.
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// The declared aliases, short first.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.short().into_iter().chain(self.long())
    }

    /// Whether `alias` is either the short or long alias of this descriptor.
    pub fn matches(&self, alias: &str) -> bool {
        self.aliases().any(|a| a == alias)
    }
}

impl std::fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let aliases: Vec<&str> = self.aliases().collect();
        write!(f, "{}", aliases.join("|"))
    }
}

/// The value resolved for one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// The resolution of a [`ValueKind::Flag`] option.
    Switch(bool),
    /// The resolution of a [`ValueKind::Value`] option.
    Text(String),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Switch(value) => write!(f, "{value}"),
            OptionValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// How the first input token is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadingToken {
    /// The first token is always the command token, and is never resolved as an option.
    #[default]
    Command,
    /// There is no command token; every token is resolved as an option.
    Option,
}
