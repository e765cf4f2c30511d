//! Builder module for `arp`.
//! See [documentation root](https://docs.rs/arp/latest/arp/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{ErrorKind, Parser, ParserError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
