//! # Cadastro Architecture
//!
//! Cadastro is a **UI-agnostic personal-record registry**. The crate is a
//! library that happens to ship a CLI client, not the other way around,
//! and that distinction drives the layout.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the live RecordStore + gateway for the session      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: submit, delete, list                │
//! │  - Validates, mutates the store, persists                   │
//! │  - No I/O assumptions beyond the gateway trait              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (persist/)                               │
//! │  - Abstract RecordGateway trait                             │
//! │  - FileGateway (production), InMemoryGateway (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record identity
//!
//! Records have no generated ids. Position in the store is the identity,
//! which is sound for a single-user, single-thread session: every user
//! action runs to completion before the next starts, and a delete
//! invalidates any in-flight edit reference by shifting positions.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, validation, storage), code takes
//! regular Rust arguments, returns `Result<CmdResult>`, and never writes
//! to stdout/stderr or calls `std::process::exit`. The same core could
//! back a desktop form, a web handler, or the bundled CLI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for submit / delete / list
//! - [`validate`]: Field rules and duplicate detection
//! - [`mask`]: Progressive input masks for the digit-only fields
//! - [`store`]: The in-memory ordered record collection
//! - [`persist`]: Gateway trait plus file and in-memory backends
//! - [`model`]: Core data types (`Record`, `RecordDraft`, `ValidRecord`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod mask;
pub mod model;
pub mod persist;
pub mod store;
pub mod validate;
