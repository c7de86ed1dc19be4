use std::collections::HashMap;

use crate::api::Command;
use crate::error::ConfigError;

/// The command handlers of a target, indexed by command name.
pub(crate) struct CommandRegistry<T> {
    commands: Vec<Command<T>>,
    names: HashMap<String, usize>,
}

impl<T> std::fmt::Debug for CommandRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands)
            .finish()
    }
}

impl<T> CommandRegistry<T> {
    pub(crate) fn new(commands: Vec<Command<T>>) -> Result<Self, ConfigError> {
        let mut names = HashMap::default();

        for (index, command) in commands.iter().enumerate() {
            if command.name().is_empty() {
                return Err(ConfigError("Command name cannot be empty.".to_string()));
            }

            if names.insert(command.name().to_string(), index).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the command '{}'.",
                    command.name()
                )));
            }
        }

        Ok(Self { commands, names })
    }

    pub(crate) fn find(&self, name: &str) -> Option<&Command<T>> {
        self.names.get(name).map(|index| &self.commands[*index])
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(Command::name)
    }
}
