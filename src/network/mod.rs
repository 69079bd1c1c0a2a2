//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - One thread per session, no shared mutable state
//! - Commands executed through `dispatch` against the shared store

mod client;
mod dispatch;
mod server;
mod session;

pub use client::Client;
pub use dispatch::{execute, Reply};
pub use server::{Server, ShutdownHandle};
pub use session::{Session, SessionEnd, SessionState};
