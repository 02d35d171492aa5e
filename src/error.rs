// src/error.rs
use std::fmt;

use thiserror::Error;

/// Why a single comma-separated token could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenFault {
    #[error("nothing left to parse")]
    Empty,
    #[error("{0:?} is not an episode number")]
    NotANumber(String),
    #[error("range {start}-{end} runs backwards")]
    ReversedRange { start: u32, end: u32 },
    #[error("range {start}-{end} is longer than {} episodes", crate::notation::token::MAX_RANGE_LEN)]
    RangeTooLong { start: u32, end: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("malformed token {token:?} in cell {cell:?}: {fault}")]
    MalformedToken {
        token: String,
        cell: String,
        fault: TokenFault,
    },
    #[error("empty appearance cell {cell:?}")]
    EmptyAppearanceCell { cell: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown character {0:?}")]
    UnknownCharacter(String),
}

/// Row-level state the pipeline was in when it gave up.
/// Classifying and emitting cannot fail, so they have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    Resolving,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Parsing => "parsing",
            Stage::Resolving => "resolving",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowFault {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// One rejected table row, with enough context to fix the source page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row} ({subject:?}) failed while {stage}: {fault}")]
pub struct RowError {
    pub row: usize,
    pub subject: String,
    pub stage: Stage,
    #[source]
    pub fault: RowFault,
}

impl RowError {
    /// The unresolved name, when the row failed on character lookup.
    pub fn unknown_character(&self) -> Option<&str> {
        match &self.fault {
            RowFault::Resolve(ResolveError::UnknownCharacter(name)) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("character {character_id} references episode {episode_id}, outside catalog {min_id}..={max_id}")]
pub struct InvalidEpisodeReference {
    pub character_id: i64,
    pub episode_id: i64,
    pub min_id: i64,
    pub max_id: i64,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} row(s) rejected:\n{}", .0.len(), list(.0))]
    Rows(Vec<RowError>),

    #[error("{} invalid episode reference(s):\n{}", .0.len(), list(.0))]
    InvalidEpisodeReferences(Vec<InvalidEpisodeReference>),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

fn list<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_error_names_row_token_and_cell() {
        let err = RowError {
            row: 4,
            subject: s!("Mandril"),
            stage: Stage::Parsing,
            fault: NotationError::MalformedToken {
                token: s!("x"),
                cell: s!("1, x"),
                fault: TokenFault::NotANumber(s!("x")),
            }
            .into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 4"));
        assert!(msg.contains("\"x\""));
        assert!(msg.contains("\"1, x\""));
        assert!(msg.contains("parsing"));
    }

    #[test]
    fn run_error_lists_every_row() {
        let rows = (0..3)
            .map(|row| RowError {
                row,
                subject: format!("Nobody {row}"),
                stage: Stage::Resolving,
                fault: ResolveError::UnknownCharacter(format!("Nobody {row}")).into(),
            })
            .collect::<Vec<_>>();
        let msg = Error::Rows(rows).to_string();
        assert!(msg.starts_with("3 row(s) rejected"));
        assert!(msg.contains("Nobody 0") && msg.contains("Nobody 2"));
    }
}
