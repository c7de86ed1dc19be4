mod interface;

use std::env;

use crate::api::CommandLine;
use crate::construct;
use crate::dispatch::dispatch;
use crate::error::{ConfigError, MapError};
use crate::mapper::ObjectMapper;
use crate::model::LeadingToken;
use crate::registry::Registry;
use crate::resolver::Prefixes;
use interface::{ConsoleInterface, UserInterface};

/// Maps input tokens onto a target of type `T`, and then dispatches its command.
///
/// The first input token is always the command.
/// The remaining tokens are the options of the target.
///
/// ### Example
/// ```
/// # use optmap_builder as optmap;
/// use optmap::{Command, CommandLine, CommandLineRunner, CommandLineTarget, Constructor, Handlers, Member, Prefixes};
///
/// #[derive(Default)]
/// struct Greeter {
///     name: String,
///     greeting: String,
/// }
///
/// impl CommandLine for Greeter {
///     fn command_line() -> CommandLineTarget<Self> {
///         CommandLineTarget::new("Greeter")
///             .member(Member::text("name", |g: &mut Greeter, v| g.name = v).short("n"))
///             .constructor(Constructor::from_default())
///     }
/// }
///
/// impl Handlers for Greeter {
///     fn handlers(target: CommandLineTarget<Self>) -> CommandLineTarget<Self> {
///         target.command(Command::new("greet", |g: &mut Greeter| {
///             g.greeting = format!("Hello {}!", g.name);
///         }))
///     }
/// }
///
/// let runner = CommandLineRunner::<Greeter>::new(Prefixes::default()).unwrap();
/// let greeter = runner.run(&["greet", "-n", "world"]).unwrap();
/// assert_eq!(greeter.greeting, "Hello world!");
/// ```
#[derive(Debug)]
pub struct CommandLineRunner<T> {
    mapper: ObjectMapper<T>,
}

impl<T: CommandLine> CommandLineRunner<T> {
    /// Create a runner for the [`CommandLine`] type `T`, recognizing options by the `prefixes`.
    pub fn new(prefixes: Prefixes) -> Result<Self, ConfigError> {
        Ok(Self::with_mapper(ObjectMapper::new(prefixes)?))
    }
}

impl<T> CommandLineRunner<T> {
    /// Create a runner from an existing `mapper`.
    /// The mapper is switched to [`LeadingToken::Command`].
    pub fn with_mapper(mut mapper: ObjectMapper<T>) -> Self {
        mapper.set_leading(LeadingToken::Command);
        Self { mapper }
    }

    /// The mapper of this runner.
    pub fn mapper(&self) -> &ObjectMapper<T> {
        &self.mapper
    }

    fn registry(&self) -> &Registry<T> {
        self.mapper.registry()
    }

    /// Run the command line against the input `tokens`.
    ///
    /// Running happens in two phases:
    /// 1. The target is created from the options (see [`ObjectMapper::build`]).
    /// 2. The handler of the command `tokens[0]` is invoked on the target.
    ///
    /// The target is returned once its handler has completed.
    pub fn run(&self, tokens: &[&str]) -> Result<T, MapError> {
        self.run_inner(None, tokens)
    }

    /// Run the command line against the input `tokens`, assigning the options onto the supplied `target`.
    pub fn run_with(&self, target: T, tokens: &[&str]) -> Result<T, MapError> {
        self.run_inner(Some(target), tokens)
    }

    /// Invoke the handler of `command` on the `target`, without mapping any options.
    pub fn run_command(&self, target: &mut T, command: &str) -> Result<(), MapError> {
        dispatch(self.registry(), target, command)
    }

    fn run_inner(&self, existing: Option<T>, tokens: &[&str]) -> Result<T, MapError> {
        if tokens.is_empty() {
            return Err(MapError::MissingCommand);
        }

        let resolution = self.mapper.resolve(tokens)?;
        let command = resolution.command().ok_or(MapError::MissingCommand)?;
        let mut target = construct::build(self.registry(), &resolution, existing)?;
        dispatch(self.registry(), &mut target, command)?;
        Ok(target)
    }

    /// Run the command line against the input `tokens`, reporting any error on stderr.
    ///
    /// On error, returns the process exit code `Err(1)`.
    pub fn execute_tokens(&self, tokens: &[&str]) -> Result<T, i32> {
        self.execute_with(tokens, &ConsoleInterface::default())
    }

    pub(crate) fn execute_with(
        &self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<T, i32> {
        self.run(tokens).map_err(|error| {
            user_interface.print_error(&error);
            1
        })
    }

    /// Run the command line against the Cli [`env::args`] (the program name is skipped).
    ///
    /// If at any point the runner encounters an error, it will exit with error code `1` (via `std::process::exit`).
    pub fn execute(&self) -> T {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.execute_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(target) => target,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::interface::util::InMemoryInterface;
    use super::*;
    use crate::test::{assert_contains, Foo, Point};
    use rstest::rstest;

    fn foo_runner() -> CommandLineRunner<Foo> {
        CommandLineRunner::new(Prefixes::new(["--"]).unwrap()).unwrap()
    }

    #[test]
    fn runner_run() {
        // Execute
        let foo = foo_runner()
            .run(&["test", "-a", "v1", "-b", "v2", "-c"])
            .unwrap();

        // Verify
        assert_eq!(foo.a, "v1");
        assert_eq!(foo.b, "v2");
        assert!(foo.c);
        assert_eq!(foo.result, "v1v2");
    }

    #[rstest]
    #[case(vec!["nope"], MapError::UnknownCommand("nope".to_string()))]
    #[case(vec!["nope", "-a", "v1"], MapError::UnknownCommand("nope".to_string()))]
    #[case(vec!["test", "-z"], MapError::UnknownOption("z".to_string()))]
    #[case(vec!["test", "-a"], MapError::MissingValue("a".to_string()))]
    #[case(vec!["test", "v1"], MapError::UnexpectedToken("v1".to_string()))]
    #[case(vec![], MapError::MissingCommand)]
    fn runner_run_error(#[case] tokens: Vec<&str>, #[case] expected: MapError) {
        let error = foo_runner().run(tokens.as_slice()).unwrap_err();
        assert_eq!(error, expected);
    }

    #[test]
    fn runner_run_duplicate() {
        let error = foo_runner()
            .run(&["test", "--alpha", "v1", "-a", "v2"])
            .unwrap_err();
        assert_matches!(error, MapError::DuplicateOption { member, .. } if member == "a");
    }

    #[test]
    fn runner_run_with() {
        // Setup
        let existing = Foo {
            b: "x".to_string(),
            ..Foo::default()
        };

        // Execute
        let foo = foo_runner().run_with(existing, &["test", "-a", "y"]).unwrap();

        // Verify
        assert_eq!(foo.result, "yx");
    }

    #[test]
    fn runner_run_command() {
        // Setup
        let runner = foo_runner();
        let mut foo = Foo {
            a: "1".to_string(),
            b: "2".to_string(),
            ..Foo::default()
        };

        // Execute
        runner.run_command(&mut foo, "test").unwrap();
        let error = runner.run_command(&mut foo, "nope").unwrap_err();

        // Verify
        assert_eq!(foo.result, "12");
        assert_eq!(error, MapError::UnknownCommand("nope".to_string()));
    }

    #[test]
    fn runner_immutable_target() {
        // Setup
        let runner = CommandLineRunner::<Point>::new(Prefixes::default()).unwrap();

        // Execute
        let point = runner.run(&["flip", "-a", "1", "-b", "2"]).unwrap();

        // Verify
        assert_eq!((point.a.as_str(), point.b.as_str()), ("2", "1"));
    }

    #[test]
    fn runner_with_mapper_forces_command() {
        // Setup
        let mapper = ObjectMapper::<Foo>::new(Prefixes::default())
            .unwrap()
            .leading_token(LeadingToken::Option);

        // Execute
        let foo = CommandLineRunner::with_mapper(mapper)
            .run(&["test", "-a", "1"])
            .unwrap();

        // Verify
        assert_eq!(foo.result, "1");
    }

    #[test]
    fn runner_execute_ok() {
        // Setup
        let interface = InMemoryInterface::default();

        // Execute
        let foo = foo_runner()
            .execute_with(&["test", "-a", "1"], &interface)
            .unwrap();

        // Verify
        assert_eq!(foo.result, "1");
        assert!(interface.consume().is_empty());
    }

    #[test]
    fn runner_execute_error() {
        // Setup
        let interface = InMemoryInterface::default();

        // Execute
        let result = foo_runner().execute_with(&["nope"], &interface);

        // Verify
        assert_matches!(result, Err(1));
        let errors = interface.consume();
        assert_eq!(errors.len(), 1);
        assert_contains!(errors[0], "Unknown command 'nope'");
    }
}
