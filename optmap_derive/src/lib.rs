extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveHandlers, DeriveTarget};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

const MACRO_ATTRIBUTE: &str = "optmap";
const MACRO_COMMAND_LINE: &str = "#[derive(CommandLine)]";
const MACRO_HANDLERS: &str = "#[handlers]";

/// Derive the [`CommandLine`](../optmap/trait.CommandLine.html) declaration of a struct.
///
/// Each field marked with `#[optmap(..)]` becomes a mappable option.
/// Unmarked fields are invisible to the mapper.
/// * `#[optmap(short = "s")]` and/or `#[optmap(long = "..")]` declare the aliases of the option.
/// At least one is required.
/// * `#[optmap(value)]` or `#[optmap(flag)]` assert the kind of the option.
/// The kind follows the field type: `String` fields take a value, `bool` fields are flags.
///
/// On the struct itself, `#[optmap(default)]` declares [`Default::default`] as the default constructor.
///
/// ### Example
/// ```ignore
/// #[derive(Default, CommandLine)]
/// #[optmap(default)]
/// struct Settings {
///     #[optmap(short = "o", long = "output")]
///     output: String,
///     #[optmap(short = "v")]
///     verbose: bool,
/// }
/// ```
#[proc_macro_derive(CommandLine, attributes(optmap))]
pub fn command_line(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveTarget::try_from(derive_input) {
        Ok(target) => TokenStream2::from(target).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Declare the constructors and command handlers of a [`CommandLine`](../optmap/trait.CommandLine.html) type.
///
/// Applies to an inherent `impl` block.
/// * `#[optmap(command = "..")]` declares the method as the handler of the named command.
/// The method must take only `&self` or `&mut self`.
/// The attribute may be repeated to handle several commands with the same method.
/// * `#[optmap(constructor)]` declares the associated function as a constructor.
/// Its parameter names are the option keys it accepts, and each parameter must be `String` or `bool`.
///
/// ### Example
/// ```ignore
/// #[handlers]
/// impl Point {
///     #[optmap(constructor)]
///     fn new(x: String, y: String) -> Self {
///         Self { x, y }
///     }
///
///     #[optmap(command = "show")]
///     fn show(&self) {
///         println!("({}, {})", self.x, self.y);
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn handlers(attribute: TokenStream, item: TokenStream) -> TokenStream {
    if !attribute.is_empty() {
        return syn::Error::new(
            TokenStream2::from(attribute).into_iter().next().map_or_else(
                proc_macro2::Span::call_site,
                |token| token.span(),
            ),
            format!("Invalid - {MACRO_HANDLERS} does not take arguments."),
        )
        .to_compile_error()
        .into();
    }

    let item_impl = syn::parse_macro_input!(item as syn::ItemImpl);

    match DeriveHandlers::try_from(item_impl) {
        Ok(handlers) => TokenStream2::from(handlers).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
