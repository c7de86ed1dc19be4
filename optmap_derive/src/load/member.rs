use crate::load::{incompatible_error, load_attributes, string_literal, value_type};
use crate::model::{DeriveMember, ValueType};
use crate::MACRO_ATTRIBUTE;

impl TryFrom<&syn::Field> for DeriveMember {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - option members must be named fields.",
                ))
            }
        };
        let attributes = load_attributes(
            &value.attrs,
            &field_name,
            &["value", "flag"],
            &["short", "long"],
        )?;
        let short = string_literal(&attributes, &field_name, "short")?;
        let long = string_literal(&attributes, &field_name, "long")?;
        let explicit_value = attributes.singletons.contains("value");
        let explicit_flag = attributes.singletons.contains("flag");

        if short.is_none() && long.is_none() {
            return Err(syn::Error::new(
                field_name.span(),
                format!(
                    "Invalid - option `{field_name}` must declare `#[{MACRO_ATTRIBUTE}(short = ..)]` or `#[{MACRO_ATTRIBUTE}(long = ..)]`."
                ),
            ));
        }

        if explicit_value && explicit_flag {
            return Err(incompatible_error(
                "option",
                &field_name,
                format!("#[{MACRO_ATTRIBUTE}(value)]"),
                format!("#[{MACRO_ATTRIBUTE}(flag)]"),
            ));
        }

        let value_type = value_type(&value.ty);

        match &value_type {
            ValueType::Switch if explicit_value => {
                return Err(incompatible_error(
                    "option",
                    &field_name,
                    "bool",
                    format!("#[{MACRO_ATTRIBUTE}(value)]"),
                ));
            }
            ValueType::Text if explicit_flag => {
                return Err(incompatible_error(
                    "option",
                    &field_name,
                    "String",
                    format!("#[{MACRO_ATTRIBUTE}(flag)]"),
                ));
            }
            _ => {}
        };

        Ok(DeriveMember {
            field_name,
            short,
            long,
            value_type,
        })
    }
}
