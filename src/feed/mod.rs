//! Feed module: turns wire messages into validated quotes.
//!
//! - [`message`]: JSON envelope decoding and zlib frames from the live feed
//! - [`replay`]: JSON-lines history files (plain or gzip) replayed into a store

pub mod message;
pub mod replay;

pub use message::{decode_frame, decode_message, FeedMessage, Transaction};
pub use replay::{replay_into, replay_until_stopped, ReplayReader, ReplayStats};
