//! # CLI Layer
//!
//! One possible UI client for the stockroom library. This is the only place that reads
//! from the terminal, writes to stdout/stderr, or decides the exit code.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-subcommand handlers
//! - `menu`: the interactive numbered menu (the default when no subcommand is given)
//! - `render`: `CmdResult` to terminal text
//!
//! Handlers contain no business logic; they build arguments, call `StockroomApi`, and print
//! what comes back.

pub mod commands;
pub mod menu;
pub mod render;
pub mod setup;
