// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod notation;

pub mod characters;
pub mod episodes;
pub mod file;
pub mod pipeline;
pub mod progress;
pub mod resolve;
pub mod runner;
pub mod store;

pub use error::{Error, Result};
