//! Text pattern format.
//!
//! A pattern is a stream of whitespace-separated tokens: `rows`, `cols`, then
//! one token per row where `'1'` marks a live cell. Row tokens are read
//! leniently: characters past `cols` are dropped, and short or missing rows
//! leave the remaining cells dead.

use std::str::FromStr;

use thiserror::Error;

use super::{Cell, Grid};

/// Errors raised while decoding a pattern header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is missing its {0} dimension")]
    MissingDimension(&'static str),
    #[error("pattern {dimension} dimension `{token}` is not a non-negative integer")]
    InvalidDimension {
        dimension: &'static str,
        token: String,
    },
    #[error("pattern of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },
}

/// Parse a pattern from its full text.
pub fn parse_pattern(text: &str) -> Result<Grid, PatternError> {
    let mut tokens = text.split_whitespace();
    let rows = parse_dimension(tokens.next(), "rows")?;
    let cols = parse_dimension(tokens.next(), "cols")?;
    if rows.checked_mul(cols).is_none() {
        return Err(PatternError::TooLarge { rows, cols });
    }

    let mut grid = Grid::new(rows, cols);
    for (row, token) in tokens.take(rows).enumerate() {
        for (col, ch) in token.chars().take(cols).enumerate() {
            grid.set(row, col, Cell::from_digit(ch));
        }
    }
    Ok(grid)
}

fn parse_dimension(token: Option<&str>, dimension: &'static str) -> Result<usize, PatternError> {
    let token = token.ok_or(PatternError::MissingDimension(dimension))?;
    token
        .parse()
        .map_err(|_| PatternError::InvalidDimension {
            dimension,
            token: token.to_owned(),
        })
}

impl FromStr for Grid {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}
