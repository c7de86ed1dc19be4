/// A command handler of the target type `T`.
///
/// The handler is invoked on the mapped target once all of its options have been assigned.
///
/// ### Example
/// ```
/// # use optmap_builder as optmap;
/// use optmap::Command;
///
/// #[derive(Default)]
/// struct Target {
///     runs: u32,
/// }
///
/// let command = Command::new("run", |target: &mut Target| target.runs += 1);
/// assert_eq!(command.name(), "run");
/// ```
pub struct Command<T> {
    name: String,
    handler: fn(&mut T),
}

impl<T> std::fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .finish()
    }
}

impl<T> Command<T> {
    /// Declare the handler for the command `name`.
    pub fn new(name: impl Into<String>, handler: fn(&mut T)) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self, target: &mut T) {
        (self.handler)(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_invoke() {
        // Setup
        let mut count: u32 = 0;
        let command = Command::new("increment", |count: &mut u32| *count += 1);

        // Execute
        command.invoke(&mut count);
        command.invoke(&mut count);

        // Verify
        assert_eq!(command.name(), "increment");
        assert_eq!(count, 2);
    }
}
