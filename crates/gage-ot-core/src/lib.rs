//! A one-shot implementation of the Chou-Orlandi [`CO15`](https://eprint.iacr.org/2015/267.pdf)
//! oblivious transfer protocol over NIST P-256, carrying one wire label per
//! choice.
//!
//! The state machines here are sans-io: they consume and produce the
//! protocol messages in [`msgs`] and leave framing to the caller. Both
//! sides are consumed by each protocol step, so the ephemeral keys of an
//! exchange cannot be reused for another.
#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]

mod error;
pub mod msgs;
mod receiver;
mod sender;

pub use error::{ReceiverError, SenderError};
pub use receiver::{state as receiver_state, Receiver};
pub use sender::{state as sender_state, Sender};

use gage_core::{
    hash::sha256,
    point::{self, PointError},
    WireLabel,
};
use p256::ProjectivePoint;

/// Hashes a point to a symmetric masking key.
///
/// Computes SHA-256 over the SEC1 uncompressed encoding; both peers derive
/// their keys this way, so the encodings must match byte for byte.
pub(crate) fn hash_point(point: &ProjectivePoint) -> Result<[u8; 32], PointError> {
    Ok(sha256(&point::to_bytes(point)?))
}

/// XOR-masks (or unmasks) a label encoding with the repeating 32-byte key.
pub(crate) fn apply_mask(
    mut bytes: [u8; WireLabel::LEN],
    key: &[u8; 32],
) -> [u8; WireLabel::LEN] {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte ^= key[i % key.len()];
    }
    bytes
}
