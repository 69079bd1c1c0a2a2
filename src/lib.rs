//! # Socket Scheduler
//!
//! A line-oriented lookup service for lecturers and subjects:
//! - Length-prefixed (modified UTF-8) text frames over TCP
//! - One thread per connection, no shared mutable session state
//! - A small command grammar: `list`, `search`, `help`, `exit`
//! - Exact-then-partial search resolution against a pluggable store
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Listener                           │
//! │              (one thread per accepted client)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                               │
//! │        read frame → parse → dispatch → write batch          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Resolver   │          │  Formatter  │
//!   │(exact→part.)│          │  (tables)   │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │    Store    │
//!   │  (RwLock)   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod model;

pub mod protocol;
pub mod store;
pub mod resolver;
pub mod format;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SchedulerError, Result};
pub use config::Config;
pub use model::{Lecturer, Subject};
pub use store::{MemoryStore, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the scheduler
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
