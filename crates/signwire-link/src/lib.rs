//! Sequential command delivery to LED signs over byte streams.
//!
//! The protocol layer produces ordered [`CommandSequence`]s; this crate
//! writes them, one command at a time, over anything that is `Read + Write`
//! (a serial port handle, a tty device file, an in-memory stream in tests)
//! and captures the device's per-command feedback. No retransmission or
//! link-level recovery happens here; read timeouts belong to the underlying
//! stream.
//!
//! [`CommandSequence`]: signwire_protocol::CommandSequence

pub mod error;
pub mod link;

pub use error::{LinkError, Result};
pub use link::{LinkConfig, Response, SignLink};
