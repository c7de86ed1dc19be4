//! `optmap` maps command line options onto strongly typed Rust values, and then dispatches their commands.
//!
//! The mapper is driven by a static declaration of the *target* type (rather than runtime introspection):
//! * *Options*: the members of the target that the command line may configure.
//! Each option has a short and/or long alias, and is either a *flag* (`bool`) or takes a *value* (`String`).
//! * *Constructors*: the ways the target may be created from its options.
//! * *Commands*: the handlers on the target that the first input token selects.
//!
//! A typical invocation looks like `program COMMAND [-OPTION [VALUE]]..`.
//! The mapper resolves each option against the declaration, builds the target, and invokes the handler for `COMMAND`.
//!
//! # Usage
//! This page includes a few demos on using `optmap`.
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_greeter_d.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_greeter_b.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ greeter hello --name world
//! Hello world!
//!
//! $ greeter bye -n world -l
//! GOODBYE WORLD.
//!
//! $ greeter hello -n
//! Mapping error: Option 'n' expects a value, but no more tokens were provided.
//!
//! $ greeter hello -n world -n again
//! Mapping error: Cannot duplicate the option 'n' (member 'name').
//!
//! $ greeter wave
//! Mapping error: Unknown command 'wave'.
//! ```
//!
//! # Derive Api
//! We recommend using the [derive Api](./derive/index.html) to declare your targets.
//! The next section explains the structure and semantics of `optmap` using the builder Api, which applies to both builder and derive Apis.
//!
//! # Builder Api
//! Declare a target by starting with a [`CommandLineTarget`], and then [`build`](CommandLineTarget::build) it into a [`Registry`].
//! Building checks the declaration; an invalid declaration (ex: two members sharing an alias) fails with a [`ConfigError`].
//!
//! ### Members
//! * [`Member::text`]: a `String` member, configured by a value option (`-name VALUE`).
//! * [`Member::switch`]: a `bool` member, configured by a flag option (`-loud`).
//! A flag option never consumes the following token; a value option always consumes exactly one (even if it looks like an option).
//! * [`Member::unsupported`]: a member of any other type.
//! Naming its alias on the command line fails with [`MapError::UnsupportedValueType`].
//!
//! Every option token is split into a *prefix* and an *alias*.
//! The prefixes are `-` plus any configured via [`Prefixes::new`]; when several match, the longest one wins.
//! For example, with the prefixes `-` and `--`, both `-name` and `--name` resolve to the alias `name`.
//! Each member may be configured at most once per invocation, whichever of its aliases is used.
//!
//! ### Construction
//! The target is created via one of two strategies:
//! * *Mutable*: when the target declares a default (zero parameter) [`Constructor`], or when the caller supplies an instance.
//! Each resolved option is assigned to its member.
//! * *Immutable*: otherwise.
//! The first constructor whose parameter names are precisely the resolved aliases is invoked, with its arguments in parameter order.
//! When none match, mapping fails with [`MapError::NoMatchingConstructor`].
//!
//! ```no_run
#![doc = include_str!("../demos/demo_point.rs")]
//! ```
//!
//! ```console
//! $ point show -x 1 -y 2
//! (1, 2)
//!
//! $ point show -x 3
//! (3, 3)
//!
//! $ point show -y 3
//! Mapping error: No constructor accepts precisely the options [y].
//! ```
//!
//! ### Commands
//! A [`Command`] binds a command name to a handler `fn(&mut T)`.
//! The [`CommandLineRunner`] treats the first input token as the command, maps the remaining tokens, and then invokes the handler.
//! Use [`ObjectMapper`] directly to map options without dispatching any command.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while resolving, constructing, and dispatching.
pub mod derive;
pub use optmap_builder::*;
