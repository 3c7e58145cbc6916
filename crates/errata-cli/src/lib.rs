//! errata-cli library root.
//!
//! The `errata` binary is a thin `main`; everything it does lives here so
//! integration tests can drive commands against an in-memory store.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod state;
pub mod watch;
