//! Wayfinder CLI library.
//!
//! Subcommand handlers and output formatting for the `wayfinder-cli`
//! binary. Keeping them in a library target lets the handlers be unit tested
//! without spawning the binary.

pub mod commands;
pub mod output;
