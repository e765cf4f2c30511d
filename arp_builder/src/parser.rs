mod base;
mod error;
mod interface;
mod tokens;

pub use base::*;
pub use error::*;
pub(crate) use interface::*;
pub(crate) use tokens::*;
