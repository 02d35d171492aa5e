// src/notation/cell.rs
use crate::error::NotationError;

use super::classify::{classify, CellShape};
use super::token::{self, ParsedToken};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCell {
    pub shape: CellShape,
    /// One entry per source token, left to right.
    pub tokens: Vec<ParsedToken>,
}

impl ParsedCell {
    /// All ordinals in token order, repeats kept.
    pub fn ordinals(&self) -> Vec<u32> {
        self.tokens.iter().flat_map(|t| t.ordinals.iter().copied()).collect()
    }

    pub fn annotations(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| t.annotation.as_deref())
    }
}

/// Parse a whole appearance cell. Fails on the first bad token.
pub fn parse(cell: &str) -> Result<ParsedCell, NotationError> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Err(NotationError::EmptyAppearanceCell { cell: s!(cell) });
    }

    let shape = classify(trimmed);
    let parts = split_tokens(trimmed);

    let mut tokens = Vec::with_capacity(parts.len());
    for part in parts {
        let parsed = token::parse(part).map_err(|fault| NotationError::MalformedToken {
            token: s!(part),
            cell: s!(trimmed),
            fault,
        })?;
        tokens.push(parsed);
    }

    Ok(ParsedCell { shape, tokens })
}

/// Split on top-level commas; a comma inside "( … )" belongs to the annotation.
fn split_tokens(cell: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in cell.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                out.push(cell[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(cell[start..].trim());
    out
}
