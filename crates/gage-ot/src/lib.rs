//! Blocking IO driver for the oblivious transfer core.
//!
//! Frames the three protocol messages positionally over any
//! [`Read`](std::io::Read) + [`Write`](std::io::Write) byte stream. Both
//! peers know every message length from the protocol state, so there are no
//! length prefixes; reads block until the exact count arrives and any
//! shortfall surfaces as a transport error.
#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]

mod error;
mod receiver;
mod sender;
mod transport;

pub use error::OtError;
pub use receiver::receive_label;
pub use sender::send_labels;
pub use transport::Transport;
