//! Derive Api for `optmap` declarations.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a target struct `S` with `#[derive(CommandLine)]`.
//! This generates the [`CommandLine`](../trait.CommandLine.html) declaration of `S`: its option members, and optionally its default constructor.
//! Then, instrument an inherent `impl S` block with `#[handlers]` to declare the constructors and commands of `S`.
//! A target without any constructors or commands may instead declare `impl optmap::Handlers for S {}`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_greeter_d.rs")]
//! ```
//!
//! ### Member Configuration
//! Only fields marked with `#[optmap(..)]` are visible to the mapper.
//! The option kind is inferred from the field type:
//! ```console
//! Type        | Member
//! -----------------------------------
//! String      | Member::text(..)         value option
//! bool        | Member::switch(..)       flag option
//! T           | Member::unsupported(..)  fails if used
//! ```
//!
//! The following field attributes may be combined as necessary, in one `#[optmap(..)]` or across several:
//! * `#[optmap(short = "s")]` and `#[optmap(long = "..")]` set the aliases of the option.
//! At least one of these is required.
//! * `#[optmap(value)]` or `#[optmap(flag)]` assert the option kind.
//! Only one of these may be used on the same field, and it must agree with the field type.
//!
//! The struct attribute `#[optmap(default)]` declares `Default::default` as the default constructor (the *mutable* strategy).
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, CommandLine)]
//! #[optmap(default)]
//! struct Parameters {
//!     #[optmap(short = "q", long = "quick")]
//!     quick: String,
//!     // the above generates:
//!     //  .member(Member::text("quick", |t: &mut Self, v| t.quick = v).short("q").long("quick"))
//!
//!     #[optmap(short = "b", flag)]
//!     brown: bool,
//!     // the above generates:
//!     //  .member(Member::switch("brown", |t: &mut Self, v| t.brown = v).short("b"))
//!
//!     #[optmap(long = "fox")]
//!     fox: usize,
//!     // the above generates:
//!     //  .member(Member::unsupported("fox", "usize").long("fox"))
//!
//!     jumps: String,
//!     // the above is invisible to the mapper
//! }
//! ```
//!
//! ### Handlers Configuration
//! Within a `#[handlers]` impl block, the following function attributes apply:
//! * `#[optmap(command = "..")]` declares a method taking only `&self` or `&mut self` as the handler of the named command.
//! This may be repeated to bind several command names to the same method.
//! * `#[optmap(constructor)]` declares an associated function returning `Self` as a constructor.
//! The parameter names are the aliases the constructor accepts, and each parameter must be `String` or `bool`.
//!
//! For example:
//! ```ignore
//! #[handlers]
//! impl Parameters {
//!     #[optmap(constructor)]
//!     fn new(quick: String, brown: bool) -> Self { .. }
//!     // the above generates:
//!     //  .constructor(Constructor::new(&["quick", "brown"], |arguments| Ok(Self::new(arguments.text()?, arguments.switch()?))))
//!
//!     #[optmap(command = "jump", command = "leap")]
//!     fn jump(&mut self) { .. }
//!     // the above generates:
//!     //  .command(Command::new("jump", |t: &mut Self| { t.jump(); }))
//!     //  .command(Command::new("leap", |t: &mut Self| { t.jump(); }))
//! }
//! ```
pub use optmap_derive::*;
