use crate::error::MapError;
use crate::model::{OptionDescriptor, OptionValue, ValueKind};

enum Setter<T> {
    Text(fn(&mut T, String)),
    Switch(fn(&mut T, bool)),
    Unsupported(String),
}

/// A mappable member of the target type `T`, along with its option descriptor.
///
/// The value kind of the option follows the member type:
/// `String` members take a value, `bool` members are flags.
///
/// ### Example
/// ```
/// # use optmap_builder as optmap;
/// use optmap::{Member, ValueKind};
///
/// struct Target {
///     output: String,
/// }
///
/// let member = Member::text("output", |target: &mut Target, value| target.output = value)
///     .short("o")
///     .long("output");
///
/// assert_eq!(member.descriptor().value_kind(), ValueKind::Value);
/// assert!(member.descriptor().matches("o"));
/// ```
pub struct Member<T> {
    name: String,
    descriptor: OptionDescriptor,
    setter: Setter<T>,
}

impl<T> std::fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

impl<T> Member<T> {
    /// Declare a `String` member, configured by a value option.
    pub fn text(name: impl Into<String>, setter: fn(&mut T, String)) -> Self {
        Self {
            name: name.into(),
            descriptor: OptionDescriptor::new(ValueKind::Value),
            setter: Setter::Text(setter),
        }
    }

    /// Declare a `bool` member, configured by a flag option.
    pub fn switch(name: impl Into<String>, setter: fn(&mut T, bool)) -> Self {
        Self {
            name: name.into(),
            descriptor: OptionDescriptor::new(ValueKind::Flag),
            setter: Setter::Switch(setter),
        }
    }

    /// Declare a member whose type cannot be mapped.
    /// Using one of its aliases on the command line fails with [`MapError::UnsupportedValueType`].
    pub fn unsupported(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: OptionDescriptor::new(ValueKind::Flag),
            setter: Setter::Unsupported(type_name.into()),
        }
    }

    /// Set the short alias.
    /// If repeated, only the final alias will apply.
    pub fn short(mut self, alias: impl Into<String>) -> Self {
        self.descriptor.set_short(alias.into());
        self
    }

    /// Set the long alias.
    /// If repeated, only the final alias will apply.
    pub fn long(mut self, alias: impl Into<String>) -> Self {
        self.descriptor.set_long(alias.into());
        self
    }

    /// The member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option descriptor of this member.
    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    pub(crate) fn check_supported(&self) -> Result<(), MapError> {
        match &self.setter {
            Setter::Unsupported(type_name) => Err(MapError::UnsupportedValueType {
                member: self.name.clone(),
                type_name: type_name.clone(),
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn assign(&self, target: &mut T, value: OptionValue) -> Result<(), MapError> {
        match (&self.setter, value) {
            (Setter::Text(setter), OptionValue::Text(value)) => setter(target, value),
            (Setter::Switch(setter), OptionValue::Switch(value)) => setter(target, value),
            (Setter::Unsupported(_), _) => self.check_supported()?,
            (_, value) => {
                unreachable!(
                    "internal error - member '{}' cannot be assigned '{value:?}'",
                    self.name
                );
            }
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Target {
        text: String,
        switch: bool,
    }

    #[test]
    fn member_text() {
        // Setup
        let member = Member::text("text", |target: &mut Target, value| target.text = value)
            .short("t")
            .long("text");
        let mut target = Target::default();

        // Execute
        member
            .assign(&mut target, OptionValue::Text("abc".to_string()))
            .unwrap();

        // Verify
        assert_eq!(member.name(), "text");
        assert_eq!(member.descriptor().value_kind(), ValueKind::Value);
        assert_eq!(member.descriptor().short(), Some("t"));
        assert_eq!(member.descriptor().long(), Some("text"));
        assert_eq!(target.text, "abc");
        assert!(!target.switch);
    }

    #[test]
    fn member_switch() {
        // Setup
        let member =
            Member::switch("switch", |target: &mut Target, value| target.switch = value).short("s");
        let mut target = Target::default();

        // Execute
        member
            .assign(&mut target, OptionValue::Switch(true))
            .unwrap();

        // Verify
        assert_eq!(member.descriptor().value_kind(), ValueKind::Flag);
        assert_eq!(member.descriptor().long(), None);
        assert!(target.switch);
    }

    #[test]
    fn member_alias_override() {
        let member = Member::<Target>::switch("switch", |target, value| target.switch = value)
            .short("x")
            .short("s");
        assert_eq!(member.descriptor().short(), Some("s"));
    }

    #[test]
    fn member_unsupported() {
        // Setup
        let member = Member::<Target>::unsupported("count", "u32").short("n");
        let mut target = Target::default();

        // Execute
        let error = member
            .assign(&mut target, OptionValue::Switch(true))
            .unwrap_err();

        // Verify
        assert_eq!(
            error,
            MapError::UnsupportedValueType {
                member: "count".to_string(),
                type_name: "u32".to_string(),
            }
        );
        assert_eq!(member.check_supported().unwrap_err(), error);
    }
}
