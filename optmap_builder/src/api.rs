mod command;
mod constructor;
mod core;
mod member;

pub use self::core::*;
pub use command::*;
pub use constructor::*;
pub use member::*;
