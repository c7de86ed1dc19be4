use std::collections::{HashMap, HashSet};

use crate::api::Member;
use crate::error::ConfigError;

/// The option descriptors of a target, indexed by alias.
pub(crate) struct OptionRegistry<T> {
    members: Vec<Member<T>>,
    aliases: HashMap<String, usize>,
}

impl<T> std::fmt::Debug for OptionRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionRegistry")
            .field("members", &self.members)
            .finish()
    }
}

impl<T> OptionRegistry<T> {
    pub(crate) fn new(members: Vec<Member<T>>) -> Result<Self, ConfigError> {
        let mut names = HashSet::new();
        let mut aliases: HashMap<String, usize> = HashMap::default();

        for (index, member) in members.iter().enumerate() {
            if !names.insert(member.name()) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the member '{}'.",
                    member.name()
                )));
            }

            let descriptor = member.descriptor();

            if descriptor.aliases().next().is_none() {
                return Err(ConfigError(format!(
                    "Member '{}' must declare a short or long alias.",
                    member.name()
                )));
            }

            for alias in descriptor.aliases() {
                if alias.is_empty() {
                    return Err(ConfigError(format!(
                        "Member '{}' cannot declare an empty alias.",
                        member.name()
                    )));
                }

                // A member may use the same alias for both its short and long form.
                match aliases.insert(alias.to_string(), index) {
                    Some(previous) if previous != index => {
                        return Err(ConfigError(format!(
                            "Cannot duplicate the alias '{alias}' (members '{}' and '{}').",
                            members[previous].name(),
                            member.name()
                        )));
                    }
                    _ => {}
                }
            }
        }

        Ok(Self { members, aliases })
    }

    /// Find the member declaring `alias`, along with its identity.
    pub(crate) fn lookup(&self, alias: &str) -> Option<(usize, &Member<T>)> {
        self.aliases
            .get(alias)
            .map(|index| (*index, &self.members[*index]))
    }

    pub(crate) fn member(&self, index: usize) -> &Member<T> {
        &self.members[index]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Member<T>> {
        self.members.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}
