//! `arp` is a declarative command line argument parser for Rust.
//!
//! A program declares its grammar up front, as an ordered list of nodes:
//! * [`Positional`]: a slot filled by the next otherwise unclaimed token.
//! * [`Flag`]: a boolean switch (ex: `-g`, `--git`).
//! * [`Counter`]: a switch counting its occurrences (ex: `-vvv`).
//! * [`Valued`]: an option taking one value, optionally restricted to a set of choices (ex: `--std=20`, `--std 20`, `-s20`).
//! * [`Command`]: a sub-command with its own grammar.
//! * [`MutEx`]: a group of flags/counters/valued options of which at most one may be supplied.
//! * [`Node::required`]: marks any node as required.
//!
//! The [`Parser`] consumes the tokens, mutating the state of each node in place.
//! Afterwards, the state is read back by key through [`Parser::get`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/new_project.rs")]
//! ```
//!
//! ```console
//! $ new_project new myapp --std=20 -gvv --lib
//! name=myapp std=20 git=true exe=false lib=true mod=false verbose=2
//!
//! $ new_project new myapp --std=99
//! error: 'value '99' not in choices list: [17, 20, 23, 26]'
//!
//! $ new_project new myapp -x -l
//! error: 'key 'l' conflicts with 'x' in a mutually exclusive group'
//! ```
//!
//! # Token classification
//! Each token is classified by its shape:
//! * `--`: all following tokens (of the current parser) are positionals, even if they look like options.
//! * `--key`, `--key=value`: a long option.
//! The value of a valued option is the inline `=value`, otherwise the next token.
//! * `-abc`, `-abc=value`, `-abcvalue`: a cluster of short options, applied left to right.
//! Flags and counters may be packed freely; the first valued option takes the rest of the cluster as its value (or the next token if nothing remains), ending the cluster.
//! * Anything else: a sub-command name if one matches, otherwise the next open positional.
//!
//! Once a sub-command is matched, its parser takes over all of the remaining tokens.
//!
//! # Errors
//! The first error ends the parse, see [`ParserError`].
//! Nodes mutated before the error keep their state.
//!
//! Required nodes are not checked by the parser itself.
//! Use [`Parser::missing_required`] to find the required nodes which weren't supplied.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while parsing.

pub use arp_builder::*;
