//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic catalog library** with a CLI client on top. The
//! split drives the layout: everything the binary does could equally be done
//! by another front end calling the same library.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                    │
//! │  - Parses arguments, validates raw input, formats output   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog.rs)                                │
//! │  - Owns the ordered in-memory collection                   │
//! │  - The only mutator; assigns ids, searches, flips status   │
//! │  - Persists the full collection after every mutation       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - Abstract RecordStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `catalog.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types (`Result<T>`), and never writes to stdout or stderr.
//! Diagnostics that the operator should see (say, a corrupt backing file)
//! travel out as values for the CLI to render.
//!
//! ## Module Overview
//!
//! - [`catalog`]: The catalog and its operations — entry point for all work
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `Status`)
//! - [`error`]: Error types

pub mod catalog;
pub mod error;
pub mod model;
pub mod store;
