// src/notation/mod.rs
//! # Appearance notation
//!
//! The appearance column of the character table lists episode numbers as free
//! text. This module turns that text into ordinals.
//!
//! ## Grammar (as written on the page)
//! ```text
//! cell       := token ("," token)*
//! token      := body annotation?
//! body       := number | number "-" number
//! annotation := "(" … ")"          e.g. "(ikke 6)"
//! ```
//!
//! ## Layers
//! - `token` – one token → ordinals (+ the raw annotation text).
//! - `classify` – Simple vs Complex; informational only, every shape goes
//!   through `token::parse`.
//! - `cell` – splits a cell on top-level commas and concatenates token
//!   results left to right.
//!
//! ## Conventions & invariants
//! - Ranges are inclusive and must run forwards; `9-4` is an error.
//! - Annotations are **not** applied. `"5-7 (ikke 6)"` still yields 6; the
//!   text travels along so a later pass can decide.
//! - No deduplication at this level; the pipeline owns that policy.
//! - No defaults on failure. A bad token fails the cell.
pub mod cell;
pub mod classify;
pub mod token;

pub use cell::{parse as parse_cell, ParsedCell};
pub use classify::{classify, CellShape, Complexity};
pub use token::{parse as parse_token, ParsedToken};
