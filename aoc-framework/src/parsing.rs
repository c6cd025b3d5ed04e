//! Helpers that attach context to errors while parsing puzzle input.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use thiserror::Error;

use crate::DynamicError;

/// A [`FromStr`] failure, holding the string that could not be parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    string: String,
    source: E,
}

/// Parse a string slice with [`str::parse`], keeping the string as error context.
///
/// # Errors
///
/// A [`ParseContextError`] sourcing [`F::Err`][FromStr::Err] when the string does not parse.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_owned(),
        source,
    })
}

/// A failure while parsing one line of input.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero-based; displayed one-based.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    fn new<E: Into<DynamicError>>(line_index: usize, source: E) -> Self {
        Self {
            line_index,
            source: source.into(),
        }
    }

    /// The one-based line number that failed.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_index.saturating_add(1)
    }
}

/// Parse every line of `input` with `parser`, which receives the zero-based line index and the
/// line.
///
/// Errors are wrapped in an [`InvalidLine`] carrying the line index.
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(index, line)| {
        parser(index, line).map_err(|source| InvalidLine::new(index, source))
    })
}

/// Walks input made of blocks of lines separated by empty lines.
///
/// Line indices passed to parsers, and reported in [`InvalidLine`], are relative to the start of
/// the whole input.
pub struct InputScanner<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Consume empty lines, returning how many were skipped.
    pub fn skip_empty(&mut self) -> usize {
        let mut skipped = 0;
        while self.lines.next_if(|(_, line)| line.is_empty()).is_some() {
            skipped += 1;
        }
        skipped
    }

    /// Whether only empty lines remain. Consumes them.
    pub fn is_finished(&mut self) -> bool {
        self.skip_empty();
        self.lines.peek().is_none()
    }

    /// Parse the next line of the current block.
    ///
    /// Returns `Ok(None)` without consuming anything when the block has ended (an empty line or
    /// the end of input).
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] sourcing the parser's error.
    pub fn next_in_sequence<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &str) -> Result<T, E>,
    {
        match self.lines.next_if(|(_, line)| !line.is_empty()) {
            Some((index, line)) => parser(index, line)
                .map(Some)
                .map_err(|source| InvalidLine::new(index, source)),
            None => Ok(None),
        }
    }

    /// Skip any empty lines, then parse the next line.
    ///
    /// Returns `Ok(None)` at the end of input.
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] sourcing the parser's error.
    pub fn next_item<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &str) -> Result<T, E>,
    {
        self.skip_empty();
        self.next_in_sequence(parser)
    }

    /// Parse lines until the current block ends, leaving the separating empty line unconsumed.
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] for the first line that fails to parse.
    pub fn collect_sequence<T, E, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnMut(usize, &str) -> Result<T, E>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_in_sequence(&mut parser)? {
            items.push(item);
        }
        Ok(items)
    }
}
