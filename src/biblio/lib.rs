//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic library-lending core**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client. The shipped binary is one replaceable front
//! end; a REST service or test harness drives the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Supplies the clock and configured defaults               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: lending lifecycle, fines, views     │
//! │  - Time-dependent commands take `now` as a parameter        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** reads the clock below the API layer
//!
//! The last point is what makes the lending lifecycle testable: `lend`,
//! `return`, `overdue` and `report` are deterministic functions of the `now`
//! they are handed, so tests simulate the passage of time by passing a later
//! timestamp instead of sleeping.
//!
//! ## The Loan State Machine
//!
//! An item is `Available` or `OnLoan`, nothing else. The state is an enum
//! carrying the loan data (`borrower`, `loaned_at`, `due_at`), so the three
//! loan fields can only ever appear or vanish together. Stores additionally
//! maintain an id-keyed active-loans index that the overdue and report views
//! iterate instead of scanning the whole catalog.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `LoanStatus`, `Loan`)
//! - [`fine`]: Pure overdue-fine arithmetic
//! - [`config`]: Configuration (fine rate, default loan days)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fine;
pub mod model;
pub mod store;
