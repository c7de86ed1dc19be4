//! Traits which, typically, may be imported without concern: `use optmap::prelude::*`.

pub use crate::api::{CommandLine, Handlers};
