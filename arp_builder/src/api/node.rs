use crate::model::Id;
use crate::parser::Parser;
use crate::prelude::NodeState;

/// One declared element of a [`Parser`] grammar.
///
/// Build nodes from their variant types, for example `Node::from(Flag::new('g'))` or `Flag::new('g').into()`.
#[derive(Debug)]
pub enum Node {
    /// A positional slot.
    Positional(Positional),
    /// A boolean switch.
    Flag(Flag),
    /// A switch that counts its occurrences.
    Counter(Counter),
    /// An option taking a single value.
    Valued(Valued),
    /// A sub-command owning its own grammar.
    Command(Command),
    /// A group of options of which at most one may be supplied.
    MutEx(MutEx),
    /// A node which is expected to be supplied.
    /// Key matching, parsing and lookup see straight through to the wrapped node.
    Required(Box<Node>),
}

impl Node {
    /// Mark this node as required.
    ///
    /// Requirement is not checked during [`Parser::parse`]; see [`Parser::missing_required`].
    ///
    /// ### Example
    /// ```
    /// # use arp_builder as arp;
    /// use arp::{Node, Parser, Positional};
    ///
    /// let mut parser = Parser::new([Node::from(Positional::new("name")).required()]);
    /// parser.parse(&[]).unwrap();
    /// assert_eq!(parser.missing_required().len(), 1);
    /// ```
    pub fn required(self) -> Node {
        if matches!(self, Node::Required(_)) {
            self
        } else {
            Node::Required(Box::new(self))
        }
    }

    /// Whether any of this node's identifiers (or those of its members) equals `key`.
    pub fn keyed_by(&self, key: &str) -> bool {
        match self {
            Node::Positional(positional) => positional.keyed_by(key),
            Node::Flag(flag) => flag.keyed_by(key),
            Node::Counter(counter) => counter.keyed_by(key),
            Node::Valued(valued) => valued.keyed_by(key),
            Node::Command(command) => command.keyed_by(key),
            Node::MutEx(group) => group.keyed_by(key),
            Node::Required(inner) => inner.keyed_by(key),
        }
    }
}

fn any_keyed_by(ids: &[Id], key: &str) -> bool {
    ids.iter().any(|id| id == key)
}

/// A positional slot, filled by the first otherwise unclaimed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional {
    pub(crate) id: Id,
    pub(crate) value: Option<String>,
}

impl Positional {
    /// Create a positional slot named `name`.
    pub fn new(name: impl Into<Id>) -> Self {
        Self {
            id: name.into(),
            value: None,
        }
    }

    /// The name of this positional.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// The value received, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn keyed_by(&self, key: &str) -> bool {
        self.id == key
    }
}

/// A boolean switch (ex: `-g` or `--git`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub(crate) ids: Vec<Id>,
    pub(crate) status: bool,
}

impl Flag {
    /// Create a flag keyed by `key`.
    pub fn new(key: impl Into<Id>) -> Self {
        Self {
            ids: vec![key.into()],
            status: false,
        }
    }

    /// Add another key to this flag.
    pub fn alias(mut self, key: impl Into<Id>) -> Self {
        self.ids.push(key.into());
        self
    }

    /// The keys of this flag, in declaration order.
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// Whether the flag was supplied.
    pub fn is_set(&self) -> bool {
        self.status
    }

    pub(crate) fn keyed_by(&self, key: &str) -> bool {
        any_keyed_by(&self.ids, key)
    }
}

/// A switch counting how many times it was supplied (ex: `-vvv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub(crate) ids: Vec<Id>,
    pub(crate) count: usize,
}

impl Counter {
    /// Create a counter keyed by `key`.
    pub fn new(key: impl Into<Id>) -> Self {
        Self {
            ids: vec![key.into()],
            count: 0,
        }
    }

    /// Add another key to this counter.
    pub fn alias(mut self, key: impl Into<Id>) -> Self {
        self.ids.push(key.into());
        self
    }

    /// The keys of this counter, in declaration order.
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// The number of times the counter was supplied.
    pub fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn keyed_by(&self, key: &str) -> bool {
        any_keyed_by(&self.ids, key)
    }
}

/// An option taking a single value (ex: `--std=20`, `--std 20`, `-s20`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valued {
    pub(crate) ids: Vec<Id>,
    pub(crate) value: Option<String>,
    pub(crate) choices: Option<Vec<String>>,
}

impl Valued {
    /// Create a valued option keyed by `key`.
    pub fn new(key: impl Into<Id>) -> Self {
        Self {
            ids: vec![key.into()],
            value: None,
            choices: None,
        }
    }

    /// Add another key to this option.
    pub fn alias(mut self, key: impl Into<Id>) -> Self {
        self.ids.push(key.into());
        self
    }

    /// Constrain the option to only accept the given values.
    ///
    /// ### Example
    /// ```
    /// # use arp_builder as arp;
    /// use arp::{ErrorKind, Parser, Valued};
    ///
    /// let mut parser = Parser::new([Valued::new("std").choices(["17", "20"]).into()]);
    /// let error = parser.parse(&["--std=99"]).unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::UnknownValue);
    /// ```
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices
            .replace(choices.into_iter().map(Into::into).collect());
        self
    }

    /// The keys of this option, in declaration order.
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// The value received, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The allowed values, if constrained.
    pub fn allowed(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    pub(crate) fn keyed_by(&self, key: &str) -> bool {
        any_keyed_by(&self.ids, key)
    }
}

/// A sub-command.
///
/// Once its name is matched, the command's parser takes over all the remaining tokens.
#[derive(Debug)]
pub struct Command {
    pub(crate) id: Id,
    pub(crate) parser: Parser,
    pub(crate) invoked: bool,
}

impl Command {
    /// Create a sub-command named `name`, with its own grammar.
    pub fn new(name: impl Into<Id>, parser: Parser) -> Self {
        Self {
            id: name.into(),
            parser,
            invoked: false,
        }
    }

    /// The name of this command.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Whether the command was invoked.
    pub fn is_invoked(&self) -> bool {
        self.invoked
    }

    /// The command's own parser.
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Lookup a node of the command's grammar.
    /// Shorthand for `command.parser().get(key)`.
    pub fn get<S: NodeState>(&self, key: &str) -> Option<&S> {
        self.parser.get(key)
    }

    pub(crate) fn keyed_by(&self, key: &str) -> bool {
        self.id == key
    }
}

/// A member of a [`MutEx`] group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    #[allow(missing_docs)]
    Flag(Flag),
    #[allow(missing_docs)]
    Counter(Counter),
    #[allow(missing_docs)]
    Valued(Valued),
}

impl Member {
    /// The keys of this member, in declaration order.
    pub fn ids(&self) -> &[Id] {
        match self {
            Member::Flag(flag) => flag.ids(),
            Member::Counter(counter) => counter.ids(),
            Member::Valued(valued) => valued.ids(),
        }
    }

    pub(crate) fn keyed_by(&self, key: &str) -> bool {
        any_keyed_by(self.ids(), key)
    }
}

impl From<Flag> for Member {
    fn from(value: Flag) -> Self {
        Member::Flag(value)
    }
}

impl From<Counter> for Member {
    fn from(value: Counter) -> Self {
        Member::Counter(value)
    }
}

impl From<Valued> for Member {
    fn from(value: Valued) -> Self {
        Member::Valued(value)
    }
}

/// A group of options of which at most one may be supplied.
///
/// Supplying a member after a *different* member of the same group was supplied is a
/// [`ParserError::MutexViolation`](crate::ParserError::MutexViolation).
/// Repeating the same member is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutEx {
    pub(crate) members: Vec<Member>,
    pub(crate) selected: Option<usize>,
}

impl MutEx {
    /// Create a group from its members.
    pub fn new<I, M>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Member>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    /// The members of this group, in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The member which was supplied, if any.
    pub fn selected(&self) -> Option<&Member> {
        self.selected.map(|index| &self.members[index])
    }

    pub(crate) fn keyed_by(&self, key: &str) -> bool {
        self.members.iter().any(|member| member.keyed_by(key))
    }
}

macro_rules! node_from {
    ($variant:ident) => {
        impl From<$variant> for Node {
            fn from(value: $variant) -> Self {
                Node::$variant(value)
            }
        }
    };
}

node_from!(Positional);
node_from!(Flag);
node_from!(Counter);
node_from!(Valued);
node_from!(Command);
node_from!(MutEx);

impl NodeState for Positional {
    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Positional(positional) => Some(positional),
            _ => None,
        }
    }
}

impl NodeState for Flag {
    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    fn from_member(member: &Member) -> Option<&Self> {
        match member {
            Member::Flag(flag) => Some(flag),
            _ => None,
        }
    }
}

impl NodeState for Counter {
    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Counter(counter) => Some(counter),
            _ => None,
        }
    }

    fn from_member(member: &Member) -> Option<&Self> {
        match member {
            Member::Counter(counter) => Some(counter),
            _ => None,
        }
    }
}

impl NodeState for Valued {
    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Valued(valued) => Some(valued),
            _ => None,
        }
    }

    fn from_member(member: &Member) -> Option<&Self> {
        match member {
            Member::Valued(valued) => Some(valued),
            _ => None,
        }
    }
}

impl NodeState for Command {
    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Command(command) => Some(command),
            _ => None,
        }
    }
}
