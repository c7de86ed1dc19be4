use crate::load::{incompatible_error, load_attributes, string_literals, value_type};
use crate::model::{
    DeriveCommand, DeriveConstructor, DeriveHandlers, DeriveParameter, DeriveValue, ValueType,
};
use crate::{MACRO_ATTRIBUTE, MACRO_HANDLERS};
use quote::ToTokens;

impl TryFrom<syn::ItemImpl> for DeriveHandlers {
    type Error = syn::Error;

    fn try_from(mut value: syn::ItemImpl) -> Result<Self, Self::Error> {
        if value.trait_.is_some() {
            return Err(syn::Error::new_spanned(
                &value.self_ty,
                format!("Invalid - {MACRO_HANDLERS} only applies to inherent 'impl' blocks."),
            ));
        }

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.self_ty,
                format!("Invalid - {MACRO_HANDLERS} does not support generic 'impl' blocks."),
            ));
        }

        let mut constructors = Vec::default();
        let mut commands = Vec::default();

        for item in value.items.iter_mut() {
            if let syn::ImplItem::Fn(function) = item {
                let marked = function
                    .attrs
                    .iter()
                    .any(|attribute| attribute.path().is_ident(MACRO_ATTRIBUTE));

                if marked {
                    load_function(function, &mut constructors, &mut commands)?;
                    // Strip the helper attribute from the emitted impl block.
                    function
                        .attrs
                        .retain(|attribute| !attribute.path().is_ident(MACRO_ATTRIBUTE));
                }
            }
        }

        Ok(DeriveHandlers {
            self_type: DeriveValue {
                tokens: value.self_ty.to_token_stream(),
            },
            item: DeriveValue {
                tokens: value.to_token_stream(),
            },
            constructors,
            commands,
        })
    }
}

fn load_function(
    function: &syn::ImplItemFn,
    constructors: &mut Vec<DeriveConstructor>,
    commands: &mut Vec<DeriveCommand>,
) -> Result<(), syn::Error> {
    let function_name = &function.sig.ident;
    let attributes = load_attributes(
        &function.attrs,
        function_name,
        &["constructor"],
        &["command"],
    )?;
    let names = string_literals(&attributes, function_name, "command")?;
    let explicit_constructor = attributes.singletons.contains("constructor");

    if explicit_constructor && !names.is_empty() {
        return Err(incompatible_error(
            "function",
            function_name,
            format!("#[{MACRO_ATTRIBUTE}(constructor)]"),
            format!("#[{MACRO_ATTRIBUTE}(command = ..)]"),
        ));
    }

    if explicit_constructor {
        constructors.push(load_constructor(function)?);
    } else if !names.is_empty() {
        check_command(function)?;
        commands.extend(names.into_iter().map(|name| DeriveCommand {
            name,
            method: function_name.clone(),
        }));
    } else {
        return Err(syn::Error::new(
            function_name.span(),
            format!(
                "Invalid - function `{function_name}` must declare `#[{MACRO_ATTRIBUTE}(constructor)]` or `#[{MACRO_ATTRIBUTE}(command = ..)]`."
            ),
        ));
    }

    Ok(())
}

fn load_constructor(function: &syn::ImplItemFn) -> Result<DeriveConstructor, syn::Error> {
    let function_name = &function.sig.ident;
    let mut parameters = Vec::default();

    for input in &function.sig.inputs {
        match input {
            syn::FnArg::Receiver(_) => {
                return Err(syn::Error::new(
                    function_name.span(),
                    format!("Invalid - constructor `{function_name}` cannot take `self`."),
                ));
            }
            syn::FnArg::Typed(typed) => {
                let name = match typed.pat.as_ref() {
                    syn::Pat::Ident(pattern) => pattern.ident.clone(),
                    _ => {
                        return Err(syn::Error::new_spanned(
                            &typed.pat,
                            format!(
                                "Invalid - constructor `{function_name}` parameters must be named identifiers."
                            ),
                        ));
                    }
                };

                match value_type(&typed.ty) {
                    ValueType::Unsupported { type_name } => {
                        return Err(syn::Error::new(
                            name.span(),
                            format!(
                                "Invalid - constructor parameter `{name}` has type `{type_name}`, expected `String` or `bool`."
                            ),
                        ));
                    }
                    value_type => parameters.push(DeriveParameter { name, value_type }),
                };
            }
        }
    }

    Ok(DeriveConstructor {
        function: function_name.clone(),
        parameters,
    })
}

fn check_command(function: &syn::ImplItemFn) -> Result<(), syn::Error> {
    let function_name = &function.sig.ident;
    let mut inputs = function.sig.inputs.iter();

    match (inputs.next(), inputs.next()) {
        (Some(syn::FnArg::Receiver(receiver)), None) if receiver.reference.is_some() => Ok(()),
        _ => Err(syn::Error::new(
            function_name.span(),
            format!("Invalid - command `{function_name}` must take only `&self` or `&mut self`."),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use proc_macro2::{Literal, Span};
    use quote::quote;
    use rstest::rstest;
    use syn::parse_quote;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn literal(value: &str) -> DeriveValue {
        DeriveValue {
            tokens: Literal::string(value).into_token_stream(),
        }
    }

    #[test]
    fn construct_handlers_empty() {
        // Setup
        let input: syn::ItemImpl = parse_quote! {
            impl Foo {
                fn helper(&self) -> usize { 1 }
            }
        };

        // Execute
        let handlers = DeriveHandlers::try_from(input).unwrap();

        // Verify
        assert_eq!(
            handlers,
            DeriveHandlers {
                self_type: DeriveValue {
                    tokens: quote! { Foo },
                },
                item: DeriveValue {
                    tokens: quote! {
                        impl Foo {
                            fn helper(&self) -> usize { 1 }
                        }
                    },
                },
                constructors: Vec::default(),
                commands: Vec::default(),
            }
        );
    }

    #[test]
    fn construct_handlers() {
        // Setup
        let input: syn::ItemImpl = parse_quote! {
            impl Foo {
                #[optmap(constructor)]
                fn new(a: String, c: bool) -> Self {
                    Self { a, c }
                }

                #[optmap(command = "run", command = "go")]
                fn run(&mut self) {}

                #[optmap(command = "show")]
                fn show(&self) {}
            }
        };

        // Execute
        let handlers = DeriveHandlers::try_from(input).unwrap();

        // Verify
        assert_eq!(
            handlers.constructors,
            vec![DeriveConstructor {
                function: ident("new"),
                parameters: vec![
                    DeriveParameter {
                        name: ident("a"),
                        value_type: ValueType::Text,
                    },
                    DeriveParameter {
                        name: ident("c"),
                        value_type: ValueType::Switch,
                    },
                ],
            }]
        );
        assert_eq!(
            handlers.commands,
            vec![
                DeriveCommand {
                    name: literal("run"),
                    method: ident("run"),
                },
                DeriveCommand {
                    name: literal("go"),
                    method: ident("run"),
                },
                DeriveCommand {
                    name: literal("show"),
                    method: ident("show"),
                },
            ]
        );
        assert_eq!(
            handlers.item,
            DeriveValue {
                tokens: quote! {
                    impl Foo {
                        fn new(a: String, c: bool) -> Self {
                            Self { a, c }
                        }

                        fn run(&mut self) {}

                        fn show(&self) {}
                    }
                },
            }
        );
    }

    #[test]
    fn construct_handlers_split_attributes() {
        // Setup
        let input: syn::ItemImpl = parse_quote! {
            impl Foo {
                #[optmap(command = "run")]
                #[inline]
                #[optmap(command = "go")]
                fn run(&mut self) {}
            }
        };

        // Execute
        let handlers = DeriveHandlers::try_from(input).unwrap();

        // Verify
        assert_eq!(
            handlers.commands,
            vec![
                DeriveCommand {
                    name: literal("run"),
                    method: ident("run"),
                },
                DeriveCommand {
                    name: literal("go"),
                    method: ident("run"),
                },
            ]
        );
        assert_eq!(
            handlers.item,
            DeriveValue {
                tokens: quote! {
                    impl Foo {
                        #[inline]
                        fn run(&mut self) {}
                    }
                },
            }
        );
    }

    #[test]
    fn construct_handlers_default_constructor() {
        // Setup
        let input: syn::ItemImpl = parse_quote! {
            impl Foo {
                #[optmap(constructor)]
                fn empty() -> Self {
                    Self::default()
                }
            }
        };

        // Execute
        let handlers = DeriveHandlers::try_from(input).unwrap();

        // Verify
        assert_eq!(handlers.constructors.len(), 1);
        assert!(handlers.constructors[0].parameters.is_empty());
    }

    #[rstest]
    #[case(parse_quote! { impl Trait for Foo { } }, "inherent")]
    #[case(parse_quote! { impl<T> Foo<T> { } }, "generic")]
    #[case(parse_quote! { impl Foo { #[optmap(constructor, command = "a")] fn new() -> Self { Foo } } }, "cannot be both")]
    #[case(parse_quote! { impl Foo { #[optmap(constructor)] fn new(&self) -> Self { Foo } } }, "cannot take `self`")]
    #[case(parse_quote! { impl Foo { #[optmap(constructor)] fn new(a: u32) -> Self { Foo } } }, "expected `String` or `bool`")]
    #[case(parse_quote! { impl Foo { #[optmap(constructor)] fn new((a, b): (String, String)) -> Self { Foo } } }, "named identifiers")]
    #[case(parse_quote! { impl Foo { #[optmap(command = "a")] fn run() {} } }, "must take only")]
    #[case(parse_quote! { impl Foo { #[optmap(command = "a")] fn run(self) {} } }, "must take only")]
    #[case(parse_quote! { impl Foo { #[optmap(command = "a")] fn run(&self, x: String) {} } }, "must take only")]
    #[case(parse_quote! { impl Foo { #[optmap(command = run)] fn run(&self) {} } }, "string literal")]
    #[case(parse_quote! { impl Foo { #[optmap(handler)] fn run(&self) {} } }, "unknown attribute")]
    #[case(parse_quote! { impl Foo { #[optmap()] fn run(&self) {} } }, "must declare")]
    #[case(parse_quote! { impl Foo { #[optmap()] #[optmap()] fn new() -> Self { Foo } } }, "must declare")]
    fn construct_handlers_invalid(#[case] input: syn::ItemImpl, #[case] message: &str) {
        let error = DeriveHandlers::try_from(input).unwrap_err();
        assert_contains!(error.to_string(), message);
    }
}
