//! Builder module for `optmap`.
//! See [documentation root](https://docs.rs/optmap/latest/optmap/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod construct;
mod dispatch;
mod error;
mod mapper;
mod model;
mod registry;
mod resolver;
mod runner;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use error::*;
pub use mapper::ObjectMapper;
pub use model::*;
pub use registry::Registry;
pub use resolver::{Prefixes, Resolution, ResolvedOptions};
pub use runner::CommandLineRunner;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
