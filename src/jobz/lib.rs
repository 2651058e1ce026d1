//! # Jobz Architecture
//!
//! Jobz is a **UI-agnostic job-listings library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the hydrated session + store                        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait, three persisted records        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State model
//!
//! The store persists three records wholesale: the job collection, the
//! user profile, and the favorite-id list. A [`session::Session`] hydrates
//! all three at startup and is the in-memory authority for the rest of the
//! run; every mutation writes the touched record straight back through the
//! store before returning. The visible job list is never stored — it is
//! derived on each read by the [`filter`] engine from the collection, the
//! search text, the manual tags, and the profile's skills.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The same core could serve a TUI, a web UI, or any other client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`filter`]: The filter engine (skills × search × manual tags)
//! - [`session`]: Hydration and in-memory session state
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Job`, `JobDraft`, `Profile`)
//! - [`validate`]: Form validation predicates and per-field errors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod store;
pub mod validate;
