use crate::load::load_attributes;
use crate::model::{DeriveMember, DeriveTarget};
use crate::{MACRO_ATTRIBUTE, MACRO_COMMAND_LINE};

impl TryFrom<syn::DeriveInput> for DeriveTarget {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_COMMAND_LINE} does not support generic structs."),
            ));
        }

        let attributes = load_attributes(&value.attrs, struct_name, &["default"], &[])?;

        match &value.data {
            syn::Data::Struct(ds) => {
                let members = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields
                        .named
                        .iter()
                        // Unmarked fields are invisible to the mapper.
                        .filter(|field| {
                            field
                                .attrs
                                .iter()
                                .any(|attribute| attribute.path().is_ident(MACRO_ATTRIBUTE))
                        })
                        .map(DeriveMember::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::DataStruct { .. } => Vec::default(),
                };

                Ok(DeriveTarget {
                    struct_name: struct_name.clone(),
                    default_constructor: attributes.singletons.contains("default"),
                    members,
                })
            }
            _ => Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_COMMAND_LINE} only applies to 'struct' data structures."),
            )),
        }
    }
}
