use crate::api::CommandLine;
use crate::construct;
use crate::error::{ConfigError, MapError};
use crate::model::LeadingToken;
use crate::registry::Registry;
use crate::resolver::{resolve, Prefixes, Resolution};

/// Maps input tokens onto targets of type `T`.
///
/// The mapper holds the validated [`Registry`] of `T`, and may be reused across any number of mapping invocations.
///
/// ### Example
/// ```
/// # use optmap_builder as optmap;
/// use optmap::{CommandLine, CommandLineTarget, Constructor, Handlers, Member, ObjectMapper, Prefixes};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Settings {
///     output: String,
///     verbose: bool,
/// }
///
/// impl CommandLine for Settings {
///     fn command_line() -> CommandLineTarget<Self> {
///         CommandLineTarget::new("Settings")
///             .member(Member::text("output", |s: &mut Settings, v| s.output = v).short("o").long("output"))
///             .member(Member::switch("verbose", |s: &mut Settings, v| s.verbose = v).short("v"))
///             .constructor(Constructor::from_default())
///     }
/// }
///
/// impl Handlers for Settings {}
///
/// let mapper = ObjectMapper::<Settings>::new(Prefixes::new(["--"]).unwrap()).unwrap();
/// let settings = mapper.map(&["run", "--output", "out.txt", "-v"]).unwrap();
///
/// assert_eq!(
///     settings,
///     Settings {
///         output: "out.txt".to_string(),
///         verbose: true,
///     }
/// );
/// ```
#[derive(Debug)]
pub struct ObjectMapper<T> {
    registry: Registry<T>,
    prefixes: Prefixes,
    leading: LeadingToken,
}

impl<T: CommandLine> ObjectMapper<T> {
    /// Create a mapper for the [`CommandLine`] type `T`, recognizing options by the `prefixes`.
    pub fn new(prefixes: Prefixes) -> Result<Self, ConfigError> {
        Ok(Self::with_registry(Registry::describe()?, prefixes))
    }
}

impl<T> ObjectMapper<T> {
    /// Create a mapper from an explicitly built `registry`.
    pub fn with_registry(registry: Registry<T>, prefixes: Prefixes) -> Self {
        Self {
            registry,
            prefixes,
            leading: LeadingToken::default(),
        }
    }

    /// Set how the first input token is treated.
    /// Defaults to [`LeadingToken::Command`].
    pub fn leading_token(mut self, leading: LeadingToken) -> Self {
        self.leading = leading;
        self
    }

    /// The registry of `T`.
    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    /// The configured prefixes.
    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// Resolve the `tokens` without producing a target.
    pub fn resolve(&self, tokens: &[&str]) -> Result<Resolution, MapError> {
        resolve(&self.registry, &self.prefixes, self.leading, tokens)
    }

    /// Assign the `tokens` onto an existing `target`.
    ///
    /// The `target` is left untouched when the tokens fail to resolve.
    pub fn map_to(&self, target: &mut T, tokens: &[&str]) -> Result<(), MapError> {
        let resolution = self.resolve(tokens)?;
        construct::assign(&self.registry, &resolution, target)
    }

    /// Create a target via its default constructor, and assign the `tokens` onto it.
    pub fn map(&self, tokens: &[&str]) -> Result<T, MapError> {
        let resolution = self.resolve(tokens)?;
        let mut target = construct::create_default(&self.registry)?;
        construct::assign(&self.registry, &resolution, &mut target)?;
        Ok(target)
    }

    /// Create a target via the constructor whose parameters are precisely the option keys of the `tokens`.
    pub fn immutable_map(&self, tokens: &[&str]) -> Result<T, MapError> {
        let resolution = self.resolve(tokens)?;
        construct::construct_immutable(&self.registry, &resolution)
    }

    /// Create a target from the `tokens`, selecting the construction strategy automatically.
    ///
    /// Targets with a default constructor are created via [`ObjectMapper::map`].
    /// All others are created via [`ObjectMapper::immutable_map`].
    pub fn build(&self, tokens: &[&str]) -> Result<T, MapError> {
        let resolution = self.resolve(tokens)?;
        construct::build(&self.registry, &resolution, None)
    }

    pub(crate) fn set_leading(&mut self, leading: LeadingToken) {
        self.leading = leading;
    }
}
