use crate::error::MapError;
use crate::registry::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Invoke the handler for `command` on the `target`.
pub(crate) fn dispatch<T>(
    registry: &Registry<T>,
    target: &mut T,
    command: &str,
) -> Result<(), MapError> {
    let handler = registry
        .command_registry()
        .find(command)
        .ok_or_else(|| MapError::UnknownCommand(command.to_string()))?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Dispatching '{command}' on '{}'.", registry.target());
    }

    handler.invoke(target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::Foo;

    #[test]
    fn dispatch_command() {
        // Setup
        let registry = Registry::<Foo>::describe().unwrap();
        let mut foo = Foo {
            a: "1".to_string(),
            b: "2".to_string(),
            ..Foo::default()
        };

        // Execute
        dispatch(&registry, &mut foo, "test").unwrap();

        // Verify
        assert_eq!(foo.result, "12");
    }

    #[test]
    fn dispatch_unknown() {
        // Setup
        let registry = Registry::<Foo>::describe().unwrap();
        let mut foo = Foo::default();

        // Execute
        let error = dispatch(&registry, &mut foo, "Test").unwrap_err();

        // Verify
        assert_eq!(error, MapError::UnknownCommand("Test".to_string()));
        assert_eq!(foo, Foo::default());
    }
}
