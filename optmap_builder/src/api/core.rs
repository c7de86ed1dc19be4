use crate::api::{Command, Constructor, Member};
use crate::error::ConfigError;
use crate::registry::Registry;

#[cfg(feature = "unit_test")]
use crate::{mapper::ObjectMapper, resolver::Prefixes, runner::CommandLineRunner};

/// The declaration of a command line target type `T`.
///
/// Declares the mappable members, constructors, and command handlers of `T`.
/// This is the table the mapper consults in place of runtime introspection.
/// Typically, this is generated by the derive Api: `#[derive(CommandLine)]` and `#[handlers]`.
///
/// ### Example
/// ```
/// # use optmap_builder as optmap;
/// use optmap::{Command, CommandLineTarget, Constructor, Member};
///
/// #[derive(Default)]
/// struct Greeter {
///     name: String,
///     loud: bool,
///     greeting: String,
/// }
///
/// let registry = CommandLineTarget::new("Greeter")
///     .member(Member::text("name", |g: &mut Greeter, v| g.name = v).short("n").long("name"))
///     .member(Member::switch("loud", |g: &mut Greeter, v| g.loud = v).short("l"))
///     .constructor(Constructor::from_default())
///     .command(Command::new("greet", |g: &mut Greeter| {
///         g.greeting = format!("Hello {}", g.name);
///     }))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.target(), "Greeter");
/// ```
pub struct CommandLineTarget<T> {
    name: String,
    members: Vec<Member<T>>,
    constructors: Vec<Constructor<T>>,
    commands: Vec<Command<T>>,
}

impl<T> std::fmt::Debug for CommandLineTarget<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineTarget")
            .field("name", &self.name)
            .field("members", &self.members)
            .field("constructors", &self.constructors)
            .field("commands", &self.commands)
            .finish()
    }
}

impl<T> CommandLineTarget<T> {
    /// Start the declaration of the target named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::default(),
            constructors: Vec::default(),
            commands: Vec::default(),
        }
    }

    /// Declare a mappable member.
    /// Undeclared members are invisible to the mapper.
    pub fn member(mut self, member: Member<T>) -> Self {
        self.members.push(member);
        self
    }

    /// Declare a constructor.
    /// Constructors are tried in declaration order.
    pub fn constructor(mut self, constructor: Constructor<T>) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Declare a command handler.
    pub fn command(mut self, command: Command<T>) -> Self {
        self.commands.push(command);
        self
    }

    pub(crate) fn into_parts(
        self,
    ) -> (String, Vec<Member<T>>, Vec<Constructor<T>>, Vec<Command<T>>) {
        (self.name, self.members, self.constructors, self.commands)
    }

    /// Build the registry.
    /// This finalizes the declaration and checks for errors (ex: an alias repeated across members).
    pub fn build(self) -> Result<Registry<T>, ConfigError> {
        Registry::new(self)
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`CommandLineRunner`] directly from this declaration, for use in testing.
    ///
    /// ### Example
    /// ```
    /// # #[cfg(feature = "unit_test")] {
    /// # use optmap_builder as optmap;
    /// use optmap::{Command, CommandLineTarget, Constructor, Prefixes};
    ///
    /// #[derive(Default)]
    /// struct Counter {
    ///     count: u32,
    /// }
    ///
    /// // Function under test.
    /// // We want to make sure the handler is wired up correctly.
    /// fn handlers(target: CommandLineTarget<Counter>) -> CommandLineTarget<Counter> {
    ///     target.command(Command::new("increment", |c: &mut Counter| c.count += 1))
    /// }
    ///
    /// let runner = handlers(CommandLineTarget::new("Counter"))
    ///     .constructor(Constructor::from_default())
    ///     .build_runner(Prefixes::default())
    ///     .unwrap();
    /// assert_eq!(runner.run(&["increment"]).unwrap().count, 1);
    /// # }
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_runner(self, prefixes: Prefixes) -> Result<CommandLineRunner<T>, ConfigError> {
        Ok(CommandLineRunner::with_mapper(ObjectMapper::with_registry(
            self.build()?,
            prefixes,
        )))
    }
}

/// A type which may be targeted by the command line mapper.
///
/// Typically implemented via `#[derive(CommandLine)]`.
pub trait CommandLine: Handlers + Sized {
    /// Declare the mappable members (and optionally the default constructor) of this type.
    fn command_line() -> CommandLineTarget<Self>;
}

/// The constructors and command handlers of a [`CommandLine`] type.
///
/// Typically implemented via `#[handlers]` on an `impl` block.
/// Types without any handlers may rely on the default: `impl Handlers for MyType {}`.
pub trait Handlers: Sized {
    /// Declare the constructors and command handlers of this type.
    fn handlers(target: CommandLineTarget<Self>) -> CommandLineTarget<Self> {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{Foo, Point};

    #[test]
    fn target_declaration() {
        // Setup
        let target = Foo::command_line();

        // Execute
        let (name, members, constructors, commands) = Foo::handlers(target).into_parts();

        // Verify
        assert_eq!(name, "Foo");
        assert_eq!(
            members.iter().map(Member::name).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(constructors.len(), 1);
        assert!(constructors[0].is_default());
        assert_eq!(
            commands.iter().map(Command::name).collect::<Vec<_>>(),
            vec!["test"]
        );
    }

    #[test]
    fn target_declaration_handlers() {
        // Setup
        let target = Point::command_line();

        // Execute
        let (_, _, before, _) = Point::command_line().into_parts();
        let (_, _, after, _) = Point::handlers(target).into_parts();

        // Verify
        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].parameters(), &["a", "b"]);
    }

    #[test]
    #[cfg(feature = "unit_test")]
    fn target_build_runner() {
        // Setup
        let runner = Foo::handlers(CommandLineTarget::new("Foo"))
            .member(Member::text("a", |foo: &mut Foo, value| foo.a = value).short("a"))
            .constructor(Constructor::from_default())
            .build_runner(crate::resolver::Prefixes::default())
            .unwrap();

        // Execute
        let foo = runner.run(&["test", "-a", "1"]).unwrap();

        // Verify
        assert_eq!(foo.result, "1");
    }

    #[test]
    fn handlers_default() {
        struct Empty;
        impl Handlers for Empty {}

        let (name, members, constructors, commands) =
            Empty::handlers(CommandLineTarget::new("Empty")).into_parts();
        assert_eq!(name, "Empty");
        assert!(members.is_empty());
        assert!(constructors.is_empty());
        assert!(commands.is_empty());
    }
}
