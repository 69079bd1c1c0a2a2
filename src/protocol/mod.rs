//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Frame Format
//! ```text
//! ┌──────────┬───────────────────────────────────────┐
//! │ Len (2)  │   Body (modified UTF-8, Len bytes)    │
//! └──────────┴───────────────────────────────────────┘
//! ```
//!
//! Every read yields exactly one previously written frame. The server answers
//! each client line with a *batch*: zero or more display lines followed by
//! the `END_TRANSMISSION` sentinel. After `exit` the batch is terminated by
//! `END_CONNECTION` instead and the socket is closed.
//!
//! ### Client Grammar (verbs are case-insensitive)
//! - `list <lecturer|subject>`
//! - `search <lecturer|subject> <term...>`
//! - `help [list|search]`
//! - `exit`
//!
//! Display lines may carry `@|style text|@` markup; the protocol transports
//! it unchanged and leaves rendering to the receiver (see [`markup`]).

mod codec;
mod command;
mod frame;
mod parser;
pub mod markup;
pub mod response;

pub use codec::{
    decode_frame, decode_modified_utf8, encode_frame, encode_modified_utf8, read_frame,
    write_frame, HEADER_SIZE, MAX_BODY_SIZE,
};
pub use command::{Action, Command, CommandType, HelpTopic, Target, Topic};
pub use frame::{read_batch, Batch, BatchEnd, Frame, END_CONNECTION, END_TRANSMISSION};
pub use parser::parse;
