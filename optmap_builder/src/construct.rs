use crate::error::MapError;
use crate::registry::Registry;
use crate::resolver::Resolution;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Produce the target for the `resolution`.
///
/// When an `existing` target is supplied, or the target declares a default constructor, the options are assigned member by member.
/// Otherwise, the target is created via the constructor whose parameters are precisely the resolved option keys.
pub(crate) fn build<T>(
    registry: &Registry<T>,
    resolution: &Resolution,
    existing: Option<T>,
) -> Result<T, MapError> {
    match existing {
        Some(mut target) => {
            assign(registry, resolution, &mut target)?;
            Ok(target)
        }
        None => match registry.default_constructor() {
            Some(constructor) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Creating '{}' via its default constructor.", registry.target());
                }

                let mut target = constructor.construct(resolution.options())?;
                assign(registry, resolution, &mut target)?;
                Ok(target)
            }
            None => construct_immutable(registry, resolution),
        },
    }
}

/// Assign each resolved option onto its member of the `target`.
pub(crate) fn assign<T>(
    registry: &Registry<T>,
    resolution: &Resolution,
    target: &mut T,
) -> Result<(), MapError> {
    for (index, _key, value) in resolution.bindings() {
        let member = registry.options().member(index);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Assigning '{_key}' to member '{}'.", member.name());
        }

        member.assign(target, value.clone())?;
    }

    Ok(())
}

/// Create the target via the first constructor whose parameters are precisely the resolved option keys.
pub(crate) fn construct_immutable<T>(
    registry: &Registry<T>,
    resolution: &Resolution,
) -> Result<T, MapError> {
    let options = resolution.options();

    match registry
        .constructors()
        .iter()
        .find(|constructor| constructor.accepts(options))
    {
        Some(constructor) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Creating '{}' via the constructor {:?}.",
                    registry.target(),
                    constructor.parameters()
                );
            }

            constructor.construct(options)
        }
        None => Err(MapError::NoMatchingConstructor(
            options.keys().map(str::to_string).collect(),
        )),
    }
}

/// Create the target via its default constructor, without assigning any options.
pub(crate) fn create_default<T>(registry: &Registry<T>) -> Result<T, MapError> {
    match registry.default_constructor() {
        Some(constructor) => constructor.construct(&Default::default()),
        None => Err(MapError::NoDefaultConstructor(registry.target().to_string())),
    }
}
