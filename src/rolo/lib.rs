//! # Rolo Architecture
//!
//! Rolo keeps an address book and a notebook for one person at a terminal.
//! The binary is an interactive shell; everything it does goes through this
//! library, which never touches the terminal itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - REPL, command parsing, prompts, coloured output          │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: address book, notes, store, config     │
//! │  - Load on open, save on shutdown                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (fields, contacts, notes, render) + Storage (store/) │
//! │  - Validated fields, AddressBook, NoteCollection            │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Model and commands**: unit tests next to the code. Most tests live
//!    here.
//! 2. **API** (`api.rs`): load/save behaviour against `InMemoryStore`.
//! 3. **CLI**: prompt flows with scripted input, and `tests/` driving the
//!    binary through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: session facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`fields`]: validated scalar fields (`Name`, `Phone`, `Birthday`, ...)
//! - [`contacts`]: `Record` and `AddressBook`
//! - [`notes`]: `Note`, `TagRegistry` and `NoteCollection`
//! - [`render`]: plain-text tables
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration management
//! - [`error`]: error types
//! - `cli`: REPL, prompts and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod contacts;
pub mod error;
pub mod fields;
pub mod notes;
pub mod render;
pub mod store;
