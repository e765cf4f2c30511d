//! Traits which, typically, may be imported without concern: `use arp::prelude::*`.

use crate::api::{Member, Node};

/// Behaviour to view the state of a grammar node as a concrete type.
///
/// This drives the typed lookup of [`Parser::get`](crate::Parser::get).
pub trait NodeState: Sized {
    /// View `node` as `Self`, if it is of this type.
    fn from_node(node: &Node) -> Option<&Self>;

    /// View the mutually exclusive group `member` as `Self`, if it is of this type.
    fn from_member(_member: &Member) -> Option<&Self> {
        None
    }
}
