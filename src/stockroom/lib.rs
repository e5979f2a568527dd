//! # Stockroom Architecture
//!
//! Stockroom is an inventory **library** with a small CLI client on top. The library owns
//! the product records, the reports, and the persistence round-trip; the CLI only parses
//! input and prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, the interactive menu, colored output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input validation and user-facing messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (inventory.rs, model.rs)                              │
//! │  - The id → Product map, searches and aggregate reports     │
//! │  - Persists the whole map after every mutation              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns plain Rust types. It never
//! writes to stdout/stderr and never exits the process. Persistence problems are reported
//! through `tracing` and otherwise swallowed, so a broken data file degrades to an empty
//! inventory instead of an aborted run.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`inventory`]: The in-memory store and its persistence policy
//! - [`model`]: The `Product` record
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Per-scope configuration
//! - [`init`]: Scope discovery and context wiring
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the menu shell and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod store;
