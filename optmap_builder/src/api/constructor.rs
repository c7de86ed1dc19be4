use std::collections::VecDeque;

use crate::error::MapError;
use crate::model::{OptionValue, ValueKind};
use crate::resolver::ResolvedOptions;

/// The positional arguments passed to a [`Constructor`].
///
/// Arguments arrive in the order of the constructor's parameter names, regardless of the order their options appeared in.
#[derive(Debug, Default)]
pub struct Arguments {
    values: VecDeque<(String, OptionValue)>,
}

impl Arguments {
    pub(crate) fn new(values: VecDeque<(String, OptionValue)>) -> Self {
        Self { values }
    }

    /// Read the next argument as a value option.
    pub fn text(&mut self) -> Result<String, MapError> {
        match self.values.pop_front() {
            Some((_, OptionValue::Text(value))) => Ok(value),
            Some((parameter, _)) => Err(MapError::ArgumentMismatch {
                parameter,
                expected: ValueKind::Value,
            }),
            None => Err(MapError::ArgumentsExhausted),
        }
    }

    /// Read the next argument as a flag option.
    pub fn switch(&mut self) -> Result<bool, MapError> {
        match self.values.pop_front() {
            Some((_, OptionValue::Switch(value))) => Ok(value),
            Some((parameter, _)) => Err(MapError::ArgumentMismatch {
                parameter,
                expected: ValueKind::Flag,
            }),
            None => Err(MapError::ArgumentsExhausted),
        }
    }

    /// The number of arguments not yet read.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

/// A constructor of the target type `T`, identified by its parameter names.
///
/// A constructor is selected when its parameter names are precisely the option keys supplied on the command line.
/// A constructor without any parameters is the *default constructor*.
///
/// ### Example
/// ```
/// # use optmap_builder as optmap;
/// use optmap::Constructor;
///
/// struct Point {
///     x: String,
///     y: String,
/// }
///
/// let constructor = Constructor::new(&["x", "y"], |arguments| {
///     Ok(Point {
///         x: arguments.text()?,
///         y: arguments.text()?,
///     })
/// });
/// assert!(!constructor.is_default());
/// ```
pub struct Constructor<T> {
    parameters: Vec<String>,
    invoke: fn(&mut Arguments) -> Result<T, MapError>,
}

impl<T> std::fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl<T> Constructor<T> {
    /// Declare a constructor taking the `parameters`, in order.
    pub fn new(parameters: &[&str], invoke: fn(&mut Arguments) -> Result<T, MapError>) -> Self {
        Self {
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
            invoke,
        }
    }

    /// Declare [`Default::default`] as the default constructor.
    pub fn from_default() -> Self
    where
        T: Default,
    {
        Self::new(&[], |_| Ok(T::default()))
    }

    /// The parameter names, in order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Whether this is a default (zero parameter) constructor.
    pub fn is_default(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Whether the parameter names are precisely the keys of `options`.
    pub(crate) fn accepts(&self, options: &ResolvedOptions) -> bool {
        // Parameter names and option keys are both free of repeats.
        self.parameters.len() == options.len()
            && self.parameters.iter().all(|p| options.contains_key(p))
    }

    pub(crate) fn construct(&self, options: &ResolvedOptions) -> Result<T, MapError> {
        let values = self
            .parameters
            .iter()
            .map(|parameter| match options.get(parameter) {
                Some(value) => Ok((parameter.clone(), value.clone())),
                None => Err(MapError::NoMatchingConstructor(
                    options.keys().map(str::to_string).collect(),
                )),
            })
            .collect::<Result<VecDeque<_>, _>>()?;
        let mut arguments = Arguments::new(values);
        (self.invoke)(&mut arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    struct Pair {
        left: String,
        flip: bool,
    }

    fn pair_constructor() -> Constructor<Pair> {
        Constructor::new(&["left", "flip"], |arguments| {
            Ok(Pair {
                left: arguments.text()?,
                flip: arguments.switch()?,
            })
        })
    }

    fn options(values: Vec<(&str, OptionValue)>) -> ResolvedOptions {
        let mut options = ResolvedOptions::default();
        for (key, value) in values {
            options.insert(key.to_string(), value);
        }
        options
    }

    #[rstest]
    #[case(vec![], false)]
    #[case(vec!["left"], false)]
    #[case(vec!["flip"], false)]
    #[case(vec!["left", "flip"], true)]
    #[case(vec!["flip", "left"], true)]
    #[case(vec!["left", "flip", "extra"], false)]
    #[case(vec!["left", "extra"], false)]
    fn constructor_accepts(#[case] keys: Vec<&str>, #[case] expected: bool) {
        // Setup
        let options = options(
            keys.into_iter()
                .map(|k| (k, OptionValue::Switch(true)))
                .collect(),
        );

        // Execute & verify
        assert_eq!(pair_constructor().accepts(&options), expected);
    }

    #[test]
    fn constructor_construct_positional() {
        // Setup
        let options = options(vec![
            ("flip", OptionValue::Switch(true)),
            ("left", OptionValue::Text("abc".to_string())),
        ]);

        // Execute
        let pair = pair_constructor().construct(&options).unwrap();

        // Verify
        assert_eq!(
            pair,
            Pair {
                left: "abc".to_string(),
                flip: true,
            }
        );
    }

    #[test]
    fn constructor_construct_mismatch() {
        // Setup
        let options = options(vec![
            ("left", OptionValue::Switch(true)),
            ("flip", OptionValue::Switch(true)),
        ]);

        // Execute
        let error = pair_constructor().construct(&options).unwrap_err();

        // Verify
        assert_eq!(
            error,
            MapError::ArgumentMismatch {
                parameter: "left".to_string(),
                expected: ValueKind::Value,
            }
        );
    }

    #[test]
    fn constructor_construct_missing() {
        let options = options(vec![("left", OptionValue::Text("abc".to_string()))]);
        let error = pair_constructor().construct(&options).unwrap_err();
        assert_eq!(
            error,
            MapError::NoMatchingConstructor(vec!["left".to_string()])
        );
    }

    #[test]
    fn constructor_default() {
        // Setup
        let constructor = Constructor::<String>::from_default();

        // Execute
        let value = constructor.construct(&ResolvedOptions::default()).unwrap();

        // Verify
        assert!(constructor.is_default());
        assert!(constructor.parameters().is_empty());
        assert_eq!(value, "");
    }

    #[test]
    fn arguments_exhausted() {
        let mut arguments = Arguments::default();
        assert_eq!(arguments.remaining(), 0);
        assert_eq!(arguments.text().unwrap_err(), MapError::ArgumentsExhausted);
        assert_eq!(arguments.switch().unwrap_err(), MapError::ArgumentsExhausted);
    }
}
