#![deny(warnings)]
//! Abacus terminal front end
//!
//! Configuration loading, logging setup and the key-driven session used by the
//! `abacus` binary.

pub mod commands;
pub mod config;
pub mod logging;
pub mod session;

pub use commands::{OutputFormat, run_eval, run_repl};
pub use config::AbacusConfig;
pub use session::{Frame, Session, split_keys};
