//! Subcommand handlers.

pub mod generate;
pub mod inspect;
