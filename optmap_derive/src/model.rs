use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValueType {
    Text,
    Switch,
    Unsupported { type_name: String },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveMember {
    pub field_name: syn::Ident,
    pub short: Option<DeriveValue>,
    pub long: Option<DeriveValue>,
    pub value_type: ValueType,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveTarget {
    pub struct_name: syn::Ident,
    pub default_constructor: bool,
    pub members: Vec<DeriveMember>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub name: syn::Ident,
    pub value_type: ValueType,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveConstructor {
    pub function: syn::Ident,
    pub parameters: Vec<DeriveParameter>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveCommand {
    pub name: DeriveValue,
    pub method: syn::Ident,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveHandlers {
    pub self_type: DeriveValue,
    // The impl block, with the helper attributes removed.
    pub item: DeriveValue,
    pub constructors: Vec<DeriveConstructor>,
    pub commands: Vec<DeriveCommand>,
}
