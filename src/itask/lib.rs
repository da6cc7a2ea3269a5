//! # itask Architecture
//!
//! itask is a small todo-list manager: add, edit, complete and delete short
//! text tasks, kept in a durable slot and written through on every change.
//! Like any UI-agnostic core, it is a library first; the terminal client in
//! `main.rs` is one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders todos and notifications        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves selectors (indexes, id prefixes) to ids         │
//! │  - Applies view rules, returns structured results           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (todos.rs)                                           │
//! │  - Owns the collection, the draft and the filter            │
//! │  - Every mutation writes through and notifies               │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                              │
//!                  ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Storage (store/)            │ │  Notifications (notify.rs) │
//! │  - TodoPersistence adapter   │ │  - NotificationSink trait  │
//! │  - FsBackend / MemBackend    │ │  - NotificationCenter      │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Outcomes are reported through a [`notify::NotificationSink`]
//! and structured return values, and persistence goes through a
//! [`store::SlotBackend`], so the same core could sit behind a TUI or a web
//! front end.
//!
//! The store is owned by whoever drives it and is not `Sync`; a multi-threaded
//! host has to put it behind a mutex or a single writer.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`todos.rs`): state transitions, write-through and notifications,
//!    against `MemBackend` and `NotificationCenter`.
//! 2. **Storage** (`store/`): load/save contract and the filesystem backend.
//! 3. **API** (`api.rs`): selector resolution and view rules.
//! 4. **CLI** (`tests/`): the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`todos`]: The todo store
//! - [`store`]: Durable slot persistence
//! - [`notify`]: Notification levels, sink trait and stacking center
//! - [`model`]: Core data types (`TodoId`, `TodoRecord`)
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod notify;
pub mod store;
pub mod todos;
