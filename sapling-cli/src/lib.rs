//! Support library for the sapling CLI binary.
//!
//! Exposes argument parsing, GraphML rendering and logging set-up so
//! doctests and integration tests can exercise the command pipeline without
//! forking a subprocess.

pub mod cli;
pub mod graphml;
pub mod logging;
