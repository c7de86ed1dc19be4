use crate::model::{DeriveMember, ValueType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

impl DeriveMember {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveMember {
            field_name,
            short,
            long,
            value_type,
        } = self;
        let field_name_str = field_name.unraw().to_string();
        let member = match value_type {
            ValueType::Text => quote! {
                ::optmap::Member::text(#field_name_str, |target: &mut Self, value| target.#field_name = value)
            },
            ValueType::Switch => quote! {
                ::optmap::Member::switch(#field_name_str, |target: &mut Self, value| target.#field_name = value)
            },
            ValueType::Unsupported { type_name } => quote! {
                ::optmap::Member::unsupported(#field_name_str, #type_name)
            },
        };
        let short = short.map(|short| {
            let tokens = short.tokens;
            quote! { .short(#tokens) }
        });
        let long = long.map(|long| {
            let tokens = long.tokens;
            quote! { .long(#tokens) }
        });

        quote! {
            target = target.member(#member #short #long);
        }
    }
}
