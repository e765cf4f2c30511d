use std::env;

use crate::api::*;
use crate::constant::*;
use crate::matcher::{self, Leaf, Selection};
use crate::model::Id;
use crate::parser::{ConsoleInterface, ParserError, Tokens, UserInterface};
use crate::prelude::NodeState;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A command line parser over a fixed, ordered grammar.
///
/// ### Example
/// ```
/// # use arp_builder as arp;
/// use arp::{Counter, Flag, Parser, Positional, Valued};
///
/// let mut parser = Parser::new([
///     Positional::new("name").into(),
///     Valued::new('s').alias("std").choices(["17", "20", "23", "26"]).into(),
///     Flag::new('g').alias("git").into(),
///     Counter::new('v').into(),
/// ]);
///
/// parser.parse(&["myapp", "--std=20", "-gvv"]).unwrap();
///
/// assert_eq!(parser.get::<Positional>("name").unwrap().value(), Some("myapp"));
/// assert_eq!(parser.get::<Valued>("s").unwrap().value(), Some("20"));
/// assert!(parser.get::<Flag>("git").unwrap().is_set());
/// assert_eq!(parser.get::<Counter>("v").unwrap().count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    nodes: Vec<Node>,
    // Per node: whether it has been supplied (positional claimed, option seen, command invoked).
    satisfied: Vec<bool>,
}

impl Parser {
    /// Create a parser from its grammar nodes.
    ///
    /// The declaration order is significant: positional slots are filled in order, and the first node keyed by a token wins.
    /// Keys are not checked for uniqueness.
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        let satisfied = vec![false; nodes.len()];
        Self { nodes, satisfied }
    }

    /// The grammar nodes, in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Run the parser against the input tokens (not including the program path).
    ///
    /// Tokens are classified as follows:
    /// * `--` switches the remaining tokens to positional handling.
    /// * `--key`, `--key=value`: a long option.
    /// * `-abc`, `-abc=value`: a cluster of short options.
    /// Only the final effective option of a cluster may take a value (ex: `-gs20`).
    /// * Anything else is a sub-command name, or otherwise a positional.
    ///
    /// A matched sub-command takes over all the remaining tokens.
    /// The first error aborts the parse; nodes mutated before the error keep their state.
    pub fn parse(&mut self, tokens: &[&str]) -> Result<(), ParserError> {
        let mut tokens = Tokens::new(tokens);
        let mut terminated = false;

        while let Some(token) = tokens.peek() {
            // The empty token is discarded, but the classification below still applies to it.
            // As a result, the following token can only be taken as a command or positional.
            if token.is_empty() {
                tokens.try_pop_one();
            }

            if terminated {
                match tokens.pop_one() {
                    Ok(token) => self.assign_positional(token)?,
                    Err(_error) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Stream ended after an empty token: {_error}");
                        }
                        break;
                    }
                }

                continue;
            }

            if tokens.try_pop_if_equals(TERMINATOR).is_some() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminator reached, remaining tokens are positional.");
                }
                terminated = true;
                continue;
            }

            if token.len() > 2 && token.starts_with(LONG_PREFIX) {
                tokens.try_pop_one();
                self.parse_long(&token[LONG_PREFIX.len()..], &mut tokens)?;
                continue;
            }

            if token.len() > 1 && token.starts_with(SHORT_PREFIX) {
                tokens.try_pop_one();
                self.parse_short(&token[SHORT_PREFIX.len_utf8()..], &mut tokens)?;
                continue;
            }

            match tokens.pop_one() {
                Ok(token) => self.parse_command_or_positional(token, &mut tokens)?,
                Err(_error) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Stream ended after an empty token: {_error}");
                    }
                    break;
                }
            }
        }

        Ok(())
    }

    /// Run the parser against a program's full argument vector, which includes the program path at the first position.
    ///
    /// ### Example
    /// ```
    /// # use arp_builder as arp;
    /// use arp::{ErrorKind, Flag, Parser};
    ///
    /// let mut parser = Parser::new([Flag::new('g').into()]);
    /// let empty: [&str; 0] = [];
    /// assert_eq!(parser.parse_args(&empty).unwrap_err().kind(), ErrorKind::InvalidArgumentCount);
    ///
    /// parser.parse_args(&["program", "-g"]).unwrap();
    /// assert!(parser.get::<Flag>("g").unwrap().is_set());
    /// ```
    pub fn parse_args<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), ParserError> {
        match args.split_first() {
            Some((_program, rest)) => {
                let tokens: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
                self.parse(&tokens)
            }
            None => Err(ParserError::InvalidArgumentCount),
        }
    }

    /// Run the parser against the Cli [`env::args`].
    ///
    /// If parsing fails, the error is printed to stderr and the program exits with error code `1` (via `std::process::exit`).
    pub fn parse_env(mut self) -> Self {
        let args: Vec<String> = env::args().collect();

        match self.invoke(&args, &ConsoleInterface::default()) {
            Ok(()) => self,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }

    fn invoke(
        &mut self,
        args: &[String],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<(), i32> {
        self.parse_args(args).map_err(|error| {
            user_interface.print_error(&error);
            1
        })
    }

    /// Lookup the state of the first node keyed by `key`.
    ///
    /// Members of a mutually exclusive group are found directly by their own keys, whether or not they were supplied.
    /// Returns `None` if no node is keyed by `key`, or if that node isn't a `S`.
    pub fn get<S: NodeState>(&self, key: &str) -> Option<&S> {
        self.nodes
            .iter()
            .find_map(|node| matcher::find(node, key))
            .and_then(|found| found.state::<S>())
    }

    /// Whether the first node keyed by `key` has been supplied.
    pub fn is_satisfied(&self, key: &str) -> bool {
        self.nodes
            .iter()
            .position(|node| node.keyed_by(key))
            .map(|slot| self.satisfied[slot])
            .unwrap_or(false)
    }

    /// The identifiers of the required nodes which were not supplied.
    ///
    /// This includes the required nodes of any invoked sub-command.
    pub fn missing_required(&self) -> Vec<&Id> {
        let mut missing = Vec::default();

        for (slot, node) in self.nodes.iter().enumerate() {
            let inner = match node {
                Node::Required(inner) => {
                    if !self.satisfied[slot] {
                        missing.extend(primary_id(inner));
                    }

                    &**inner
                }
                _ => node,
            };

            if let Node::Command(command) = inner {
                if command.invoked {
                    missing.extend(command.parser.missing_required());
                }
            }
        }

        missing
    }

    fn parse_long(&mut self, token: &str, tokens: &mut Tokens) -> Result<(), ParserError> {
        let (key, inline) = match token.split_once(VALUE_DELIMITER) {
            Some((key, value)) => (key, Some(value)),
            None => (token, None),
        };
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Long option '{key}' (inline value: {inline:?}).");
        }

        self.dispatch_option(key, inline, tokens)?;
        Ok(())
    }

    fn parse_short(&mut self, cluster: &str, tokens: &mut Tokens) -> Result<(), ParserError> {
        let mut keys = cluster;

        while let Some(single) = keys.chars().next() {
            let remainder = &keys[single.len_utf8()..];
            let candidate = remainder
                .strip_prefix(VALUE_DELIMITER)
                .unwrap_or(remainder);
            let inline = if candidate.is_empty() {
                None
            } else {
                Some(candidate)
            };
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Short option '{single}' (inline value: {inline:?}).");
            }

            if self.dispatch_option(&single.to_string(), inline, tokens)? {
                // A valued option ends the cluster.
                break;
            }

            keys = remainder;
        }

        Ok(())
    }

    /// Apply the option keyed by `key`, returning whether a value was consumed.
    fn dispatch_option(
        &mut self,
        key: &str,
        inline: Option<&str>,
        tokens: &mut Tokens,
    ) -> Result<bool, ParserError> {
        for (slot, node) in self.nodes.iter_mut().enumerate() {
            let Selection { leaf, group } = match matcher::select_option(node, key)? {
                Some(selection) => selection,
                None => continue,
            };

            let consumed = match leaf {
                Leaf::Flag(flag) => {
                    flag.status = true;
                    false
                }
                Leaf::Counter(counter) => {
                    counter.count += 1;
                    false
                }
                Leaf::Valued(valued) => {
                    let value = inline
                        .or_else(|| tokens.try_pop_one())
                        .ok_or_else(|| ParserError::missing_value(key))?;

                    if let Some(choices) = &valued.choices {
                        if !choices.iter().any(|choice| choice == value) {
                            return Err(ParserError::UnknownValue {
                                value: value.to_string(),
                                choices: choices.clone(),
                            });
                        }
                    }

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Option '{key}' takes value '{value}'.");
                    }
                    valued.value.replace(value.to_string());
                    true
                }
            };

            if let Some(group) = group {
                group.record();
            }

            self.satisfied[slot] = true;
            return Ok(consumed);
        }

        Err(ParserError::unknown_key(key))
    }

    fn parse_command_or_positional(
        &mut self,
        token: &str,
        tokens: &mut Tokens,
    ) -> Result<(), ParserError> {
        for (slot, node) in self.nodes.iter_mut().enumerate() {
            if let Some(command) = matcher::select_command(node, token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Delegating remaining tokens to sub-command '{token}'.");
                }
                command.parser.parse(tokens.pop_all())?;
                command.invoked = true;
                self.satisfied[slot] = true;
                return Ok(());
            }
        }

        self.assign_positional(token)
    }

    fn assign_positional(&mut self, token: &str) -> Result<(), ParserError> {
        for (slot, node) in self.nodes.iter_mut().enumerate() {
            if self.satisfied[slot] {
                continue;
            }

            if let Some(positional) = matcher::select_positional(node) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Positional '{}' takes value '{token}'.", positional.id);
                }
                positional.value.replace(token.to_string());
                self.satisfied[slot] = true;
                return Ok(());
            }
        }

        Err(ParserError::unknown_positional(token))
    }
}

fn primary_id(node: &Node) -> Option<&Id> {
    match node {
        Node::Positional(positional) => Some(&positional.id),
        Node::Flag(flag) => flag.ids.first(),
        Node::Counter(counter) => counter.ids.first(),
        Node::Valued(valued) => valued.ids.first(),
        Node::Command(command) => Some(&command.id),
        Node::MutEx(group) => group.members.first().and_then(|member| member.ids().first()),
        Node::Required(inner) => primary_id(inner),
    }
}
