use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cannot consume from an empty token stream.")]
pub(crate) struct EmptyStream;

/// The remaining (not yet consumed) input tokens of a parse.
#[derive(Debug)]
pub(crate) struct Tokens<'t> {
    remaining: &'t [&'t str],
}

impl<'t> Tokens<'t> {
    pub(crate) fn new(remaining: &'t [&'t str]) -> Self {
        Self { remaining }
    }

    pub(crate) fn peek(&self) -> Option<&'t str> {
        self.remaining.first().copied()
    }

    pub(crate) fn pop_one(&mut self) -> Result<&'t str, EmptyStream> {
        match self.remaining.split_first() {
            Some((token, rest)) => {
                self.remaining = rest;
                Ok(*token)
            }
            None => Err(EmptyStream),
        }
    }

    pub(crate) fn try_pop_one(&mut self) -> Option<&'t str> {
        self.pop_one().ok()
    }

    pub(crate) fn try_pop_if_equals(&mut self, literal: &str) -> Option<&'t str> {
        match self.peek() {
            Some(token) if token == literal => self.try_pop_one(),
            _ => None,
        }
    }

    /// Hand over every remaining token, leaving this stream empty.
    pub(crate) fn pop_all(&mut self) -> &'t [&'t str] {
        std::mem::take(&mut self.remaining)
    }
}
