mod attribute;
mod handlers;
mod member;
mod target;

use crate::model::{DeriveValue, IntermediateAttributes, ValueType};
use crate::MACRO_ATTRIBUTE;
use quote::ToTokens;

pub(self) fn incompatible_error(
    context: &str,
    name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        name.span(),
        format!(
            "Invalid - {context} cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}

/// Load the `#[optmap(..)]` attributes, rejecting any key outside of `singletons` and `pairs`.
pub(self) fn load_attributes(
    attributes: &[syn::Attribute],
    name: &syn::Ident,
    singletons: &[&str],
    pairs: &[&str],
) -> Result<IntermediateAttributes, syn::Error> {
    let mut intermediate = IntermediateAttributes::default();

    for attribute in attributes {
        if attribute.path().is_ident(MACRO_ATTRIBUTE) {
            let IntermediateAttributes {
                singletons: next_singletons,
                pairs: next_pairs,
            } = IntermediateAttributes::try_from(attribute)?;
            intermediate.singletons.extend(next_singletons);

            for (key, values) in next_pairs {
                intermediate.pairs.entry(key).or_default().extend(values);
            }
        }
    }

    for singleton in &intermediate.singletons {
        if !singletons.contains(&singleton.as_str()) {
            return Err(syn::Error::new(
                name.span(),
                format!("Invalid - unknown attribute `#[{MACRO_ATTRIBUTE}({singleton})]`."),
            ));
        }
    }

    for key in intermediate.pairs.keys() {
        if !pairs.contains(&key.as_str()) {
            return Err(syn::Error::new(
                name.span(),
                format!("Invalid - unknown attribute `#[{MACRO_ATTRIBUTE}({key} = ..)]`."),
            ));
        }
    }

    Ok(intermediate)
}

/// The string literals assigned to `key`.
pub(self) fn string_literals(
    attributes: &IntermediateAttributes,
    name: &syn::Ident,
    key: &str,
) -> Result<Vec<DeriveValue>, syn::Error> {
    match attributes.pairs.get(key) {
        Some(values) => values
            .iter()
            .map(|value| match syn::parse2::<syn::LitStr>(value.tokens.clone()) {
                Ok(literal) => Ok(DeriveValue {
                    tokens: literal.to_token_stream(),
                }),
                Err(_) => Err(syn::Error::new(
                    name.span(),
                    format!(
                        "Invalid - `{key} = ..` expects a string literal, found `{}`.",
                        value.tokens
                    ),
                )),
            })
            .collect(),
        None => Ok(Vec::default()),
    }
}

/// The final string literal assigned to `key`, if any.
pub(self) fn string_literal(
    attributes: &IntermediateAttributes,
    name: &syn::Ident,
    key: &str,
) -> Result<Option<DeriveValue>, syn::Error> {
    Ok(string_literals(attributes, name, key)?.pop())
}

/// Classify a declared type as a mappable `String`, `bool`, or otherwise unsupported.
pub(self) fn value_type(ty: &syn::Type) -> ValueType {
    if let syn::Type::Path(path) = ty {
        if path.qself.is_none() {
            if let Some(segment) = path.path.segments.last() {
                if segment.arguments.is_empty() {
                    match segment.ident.to_string().as_str() {
                        "String" => return ValueType::Text,
                        "bool" => return ValueType::Switch,
                        _ => {}
                    }
                }
            }
        }
    }

    ValueType::Unsupported {
        type_name: ty.to_token_stream().to_string().replace(' ', ""),
    }
}
