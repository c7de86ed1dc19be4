use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

use crate::model::{DeriveCommand, DeriveConstructor, DeriveHandlers, ValueType};

impl From<DeriveHandlers> for TokenStream2 {
    fn from(value: DeriveHandlers) -> Self {
        let DeriveHandlers {
            self_type,
            item,
            constructors,
            commands,
        } = value;
        let self_type = self_type.tokens;
        let item = item.tokens;

        let body = if constructors.is_empty() && commands.is_empty() {
            quote! { target }
        } else {
            let constructors = constructors.into_iter().map(DeriveConstructor::generate);
            let commands = commands.into_iter().map(DeriveCommand::generate);

            quote! {
                let mut target = target;
                #( #constructors )*
                #( #commands )*
                target
            }
        };

        quote! {
            #item

            impl ::optmap::Handlers for #self_type {
                fn handlers(target: ::optmap::CommandLineTarget<Self>) -> ::optmap::CommandLineTarget<Self> {
                    #body
                }
            }
        }
    }
}

impl DeriveConstructor {
    fn generate(self) -> TokenStream2 {
        let DeriveConstructor {
            function,
            parameters,
        } = self;
        let names: Vec<String> = parameters.iter().map(|p| p.name.unraw().to_string()).collect();

        if parameters.is_empty() {
            return quote! {
                target = target.constructor(::optmap::Constructor::new(&[], |_| Ok(Self::#function())));
            };
        }

        let arguments = parameters.iter().map(|parameter| match &parameter.value_type {
            ValueType::Text => quote! { arguments.text()? },
            ValueType::Switch => quote! { arguments.switch()? },
            ValueType::Unsupported { type_name } => {
                unreachable!("internal error - constructor parameter cannot have type '{type_name}'.")
            }
        });

        quote! {
            target = target.constructor(::optmap::Constructor::new(&[#( #names ),*], |arguments| {
                Ok(Self::#function(#( #arguments ),*))
            }));
        }
    }
}

impl DeriveCommand {
    fn generate(self) -> TokenStream2 {
        let DeriveCommand { name, method } = self;
        let name = name.tokens;

        quote! {
            target = target.command(::optmap::Command::new(#name, |target: &mut Self| {
                target.#method();
            }));
        }
    }
}
