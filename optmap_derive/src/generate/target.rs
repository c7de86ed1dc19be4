use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

use crate::model::DeriveTarget;

impl From<DeriveTarget> for TokenStream2 {
    fn from(value: DeriveTarget) -> Self {
        let DeriveTarget {
            struct_name,
            default_constructor,
            members,
        } = value;
        let struct_name_str = struct_name.unraw().to_string();
        let default_constructor = if default_constructor {
            Some(quote! {
                target = target.constructor(::optmap::Constructor::from_default());
            })
        } else {
            None
        };

        let body = if members.is_empty() && default_constructor.is_none() {
            quote! {
                ::optmap::CommandLineTarget::new(#struct_name_str)
            }
        } else {
            let members = members.into_iter().map(|member| member.generate());

            quote! {
                let mut target = ::optmap::CommandLineTarget::new(#struct_name_str);
                #( #members )*
                #default_constructor
                target
            }
        };

        quote! {
            impl ::optmap::CommandLine for #struct_name {
                fn command_line() -> ::optmap::CommandLineTarget<Self> {
                    #body
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveMember, DeriveValue, ValueType};
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[test]
    fn render_target_empty() {
        // Setup
        let target = DeriveTarget {
            struct_name: ident("my_struct"),
            default_constructor: false,
            members: Vec::default(),
        };

        // Execute
        let token_stream = TokenStream2::from(target);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl ::optmap::CommandLine for my_struct {
                    fn command_line() -> ::optmap::CommandLineTarget<Self> {
                        ::optmap::CommandLineTarget::new("my_struct")
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn render_target() {
        // Setup
        let target = DeriveTarget {
            struct_name: ident("my_struct"),
            default_constructor: true,
            members: vec![DeriveMember {
                field_name: ident("my_field"),
                short: Some(DeriveValue {
                    tokens: Literal::string("m").into_token_stream(),
                }),
                long: None,
                value_type: ValueType::Switch,
            }],
        };

        // Execute
        let token_stream = TokenStream2::from(target);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl ::optmap::CommandLine for my_struct {
                    fn command_line() -> ::optmap::CommandLineTarget<Self> {
                        let mut target = ::optmap::CommandLineTarget::new("my_struct");
                        target = target.member(
                            ::optmap::Member::switch("my_field", |target: &mut Self, value| target.my_field = value)
                                .short("m")
                        );
                        target = target.constructor(::optmap::Constructor::from_default());
                        target
                    }
                }
            }
            .to_string()
        );
    }
}
