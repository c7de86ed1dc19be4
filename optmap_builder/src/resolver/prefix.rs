use crate::error::ConfigError;

pub(crate) const DEFAULT_PREFIX: &str = "-";

/// The set of prefixes which mark a token as an option.
///
/// The default prefix `-` is always present.
/// When several prefixes match a token, the longest one wins (ex: `--flag` strips `--`, not `-`).
///
/// ### Example
/// ```
/// # use optmap_builder as optmap;
/// use optmap::Prefixes;
///
/// let prefixes = Prefixes::new(["--", "/"]).unwrap();
/// assert_eq!(prefixes.strip("--verbose"), Some(("--", "verbose")));
/// assert_eq!(prefixes.strip("-v"), Some(("-", "v")));
/// assert_eq!(prefixes.strip("/v"), Some(("/", "v")));
/// assert_eq!(prefixes.strip("v"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixes {
    prefixes: Vec<String>,
}

impl Default for Prefixes {
    fn default() -> Self {
        Self {
            prefixes: vec![DEFAULT_PREFIX.to_string()],
        }
    }
}

impl Prefixes {
    /// Create the prefix set of `-` plus the `additional` prefixes.
    /// Repeated prefixes are ignored; empty prefixes are rejected.
    pub fn new<I, S>(additional: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prefixes = Self::default();

        for prefix in additional.into_iter().map(Into::into) {
            if prefix.is_empty() {
                return Err(ConfigError("Option prefix cannot be empty.".to_string()));
            }

            if !prefixes.prefixes.contains(&prefix) {
                prefixes.prefixes.push(prefix);
            }
        }

        Ok(prefixes)
    }

    /// The configured prefixes, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// Split `token` into its longest matching prefix and the remaining alias.
    pub fn strip<'t>(&self, token: &'t str) -> Option<(&str, &'t str)> {
        self.prefixes
            .iter()
            .filter(|prefix| token.starts_with(prefix.as_str()))
            .max_by_key(|prefix| prefix.len())
            .map(|prefix| (prefix.as_str(), &token[prefix.len()..]))
    }
}
