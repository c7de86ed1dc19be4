mod commands;
mod options;

use std::collections::HashSet;

use crate::api::{CommandLine, CommandLineTarget, Constructor, Member};
use crate::error::ConfigError;
use crate::model::OptionDescriptor;

pub(crate) use commands::CommandRegistry;
pub(crate) use options::OptionRegistry;

/// The validated declaration of a command line target `T`.
///
/// Built once via [`Registry::describe`] (for [`CommandLine`] types) or [`CommandLineTarget::build`].
/// The registry is immutable, and may be shared by any number of mapping invocations.
pub struct Registry<T> {
    target: String,
    options: OptionRegistry<T>,
    constructors: Vec<Constructor<T>>,
    commands: CommandRegistry<T>,
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("target", &self.target)
            .field("options", &self.options)
            .field("constructors", &self.constructors)
            .field("commands", &self.commands)
            .finish()
    }
}

impl<T: CommandLine> Registry<T> {
    /// Describe the [`CommandLine`] type `T`.
    ///
    /// ### Example
    /// ```
    /// # use optmap_builder as optmap;
    /// use optmap::{CommandLine, CommandLineTarget, Handlers, Member, Registry};
    ///
    /// #[derive(Default)]
    /// struct Target {
    ///     verbose: bool,
    /// }
    ///
    /// impl CommandLine for Target {
    ///     fn command_line() -> CommandLineTarget<Self> {
    ///         CommandLineTarget::new("Target")
    ///             .member(Member::switch("verbose", |t: &mut Target, v| t.verbose = v).short("v"))
    ///     }
    /// }
    ///
    /// impl Handlers for Target {}
    ///
    /// let registry = Registry::<Target>::describe().unwrap();
    /// let aliases: Vec<String> = registry
    ///     .describe_options()
    ///     .map(|(_, descriptor)| descriptor.to_string())
    ///     .collect();
    /// assert_eq!(aliases, vec!["v"]);
    /// ```
    pub fn describe() -> Result<Self, ConfigError> {
        T::handlers(T::command_line()).build()
    }
}

impl<T> Registry<T> {
    pub(crate) fn new(target: CommandLineTarget<T>) -> Result<Self, ConfigError> {
        let (target, members, constructors, commands) = target.into_parts();
        let options = OptionRegistry::new(members)?;
        check_constructors(&target, &constructors)?;
        let commands = CommandRegistry::new(commands)?;

        Ok(Self {
            target,
            options,
            constructors,
            commands,
        })
    }

    /// The target name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The mappable members and their option descriptors, in declaration order.
    pub fn describe_options(&self) -> impl Iterator<Item = (&str, &OptionDescriptor)> {
        self.options
            .iter()
            .map(|member: &Member<T>| (member.name(), member.descriptor()))
    }

    /// The declared command names, in declaration order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.names()
    }

    pub(crate) fn options(&self) -> &OptionRegistry<T> {
        &self.options
    }

    pub(crate) fn command_registry(&self) -> &CommandRegistry<T> {
        &self.commands
    }

    pub(crate) fn constructors(&self) -> &[Constructor<T>] {
        &self.constructors
    }

    pub(crate) fn default_constructor(&self) -> Option<&Constructor<T>> {
        self.constructors.iter().find(|c| c.is_default())
    }
}

fn check_constructors<T>(target: &str, constructors: &[Constructor<T>]) -> Result<(), ConfigError> {
    let mut signatures: HashSet<Vec<&str>> = HashSet::default();

    for constructor in constructors {
        let mut parameters = HashSet::new();

        for parameter in constructor.parameters() {
            if parameter.is_empty() {
                return Err(ConfigError(format!(
                    "Constructor parameter names for '{target}' cannot be empty."
                )));
            }

            if !parameters.insert(parameter.as_str()) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the constructor parameter '{parameter}' for '{target}'."
                )));
            }
        }

        let mut signature: Vec<&str> = parameters.into_iter().collect();
        signature.sort_unstable();

        if !signatures.insert(signature) {
            return Err(ConfigError(format!(
                "Cannot declare multiple constructors for '{target}' with parameters {:?}.",
                constructor.parameters()
            )));
        }
    }

    Ok(())
}
