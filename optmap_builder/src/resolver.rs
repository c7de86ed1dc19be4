mod prefix;

pub use prefix::Prefixes;

use crate::error::MapError;
use crate::model::{LeadingToken, OptionValue, ValueKind};
use crate::registry::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The option values resolved from one sequence of input tokens.
///
/// Keys are the aliases exactly as supplied (prefix removed), in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    values: Vec<(String, OptionValue)>,
}

impl ResolvedOptions {
    pub(crate) fn insert(&mut self, key: String, value: OptionValue) {
        match self.values.iter_mut().find(|(k, _)| k == &key) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((key, value)),
        }
    }

    /// The value resolved for the alias `key`.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether the alias `key` was resolved.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The resolved aliases.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    /// The resolved aliases and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of resolved options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options were resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The outcome of resolving a sequence of input tokens against a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    command: Option<String>,
    options: ResolvedOptions,
    // The member index behind each entry of `options`, in the same order.
    touched: Vec<usize>,
}

impl Resolution {
    /// The command token, if any.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The resolved option values.
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub(crate) fn bindings(&self) -> impl Iterator<Item = (usize, &str, &OptionValue)> {
        self.touched
            .iter()
            .zip(self.options.iter())
            .map(|(index, (key, value))| (*index, key, value))
    }
}

/// Resolve the `tokens` against the option descriptors of the `registry`.
///
/// Resolution is a single left to right pass:
/// 1. Split off the command token, following the `leading` rule.
/// 2. Strip the longest matching prefix from each token to find its alias.
/// 3. Find the member declaring the alias, rejecting members already resolved.
/// 4. Consume the next token verbatim for value options; flag options resolve to `true`.
pub(crate) fn resolve<T>(
    registry: &Registry<T>,
    prefixes: &Prefixes,
    leading: LeadingToken,
    tokens: &[&str],
) -> Result<Resolution, MapError> {
    let (command, stream) = match leading {
        LeadingToken::Command => match tokens.split_first() {
            Some((command, remaining)) => (Some(command.to_string()), remaining),
            None => (None, tokens),
        },
        LeadingToken::Option => (None, tokens),
    };

    let mut options = ResolvedOptions::default();
    let mut touched: Vec<usize> = Vec::default();
    let mut token_iter = stream.iter();

    while let Some(token) = token_iter.next() {
        let (_prefix, alias) = prefixes
            .strip(token)
            .ok_or_else(|| MapError::UnexpectedToken(token.to_string()))?;
        let (index, member) = registry
            .options()
            .lookup(alias)
            .ok_or_else(|| MapError::UnknownOption(alias.to_string()))?;

        if touched.contains(&index) {
            return Err(MapError::DuplicateOption {
                alias: alias.to_string(),
                member: member.name().to_string(),
            });
        }

        member.check_supported()?;

        let value = match member.descriptor().value_kind() {
            ValueKind::Flag => OptionValue::Switch(true),
            // The value token is taken verbatim, even when it looks like an option.
            ValueKind::Value => match token_iter.next() {
                Some(value) => OptionValue::Text(value.to_string()),
                None => return Err(MapError::MissingValue(alias.to_string())),
            },
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Resolved '{token}' (prefix '{_prefix}') to member '{}': {value:?}.",
                member.name()
            );
        }

        options.insert(alias.to_string(), value);
        touched.push(index);
    }

    Ok(Resolution {
        command,
        options,
        touched,
    })
}
