//! # Hrtrack Architecture
//!
//! Hrtrack is a **UI-agnostic HR record-keeping library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the domain state                │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain State (state.rs)                                    │
//! │  - HrStore: exclusive owner of the four collections         │
//! │  - Cascade delete, id/timestamp assignment, auto-persist    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StateStore trait (4 fixed collection keys)      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! Every mutation re-serializes the affected collection(s) and writes them
//! through the [`store::StateStore`] synchronously, so a crash between
//! operations never loses acknowledged data. Each collection is an
//! independent JSON array under a fixed key; there is no cross-collection
//! transaction and no schema versioning.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, and never touches stdout/stderr or a terminal. The single
//! exception is the document file read in [`ingest`], which is the one
//! asynchronous task in the system — fired off a worker thread with a
//! completion callback that hands the encoded file back to `add_document`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`state`]: The domain state holder ([`state::HrStore`])
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core record types (Employee, Review, Document, Incident)
//! - [`ingest`]: Document file ingestion (data URL encode/decode)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod model;
pub mod state;
pub mod store;
