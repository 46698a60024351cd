//! Messages for one oblivious transfer exchange.
//!
//! Framing is positional: each message has a fixed byte length that both
//! peers know from the protocol state, so there are no length prefixes or
//! message tags. Points use the SEC1 uncompressed form.

use gage_core::{
    point::{self, PointError, POINT_LEN},
    WireLabel,
};
use p256::ProjectivePoint;

/// An XOR-masked wire label encoding.
pub type MaskedLabel = [u8; WireLabel::LEN];

/// The sender's setup message announcing its ephemeral public point `A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SenderSetup {
    /// The sender's ephemeral public point.
    pub public_key: ProjectivePoint,
}

impl SenderSetup {
    /// The message length on the wire.
    pub const LEN: usize = POINT_LEN;

    /// Encodes the message for the wire.
    pub fn to_bytes(&self) -> Result<[u8; Self::LEN], PointError> {
        point::to_bytes(&self.public_key)
    }

    /// Decodes the message from the wire.
    pub fn from_bytes(bytes: &[u8; Self::LEN]) -> Result<Self, PointError> {
        Ok(Self {
            public_key: point::from_bytes(bytes)?,
        })
    }
}

/// The receiver's payload carrying the blinded choice point `B`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiverPayload {
    /// The receiver's blinded choice point.
    pub blinded_choice: ProjectivePoint,
}

impl ReceiverPayload {
    /// The message length on the wire.
    pub const LEN: usize = POINT_LEN;

    /// Encodes the message for the wire.
    pub fn to_bytes(&self) -> Result<[u8; Self::LEN], PointError> {
        point::to_bytes(&self.blinded_choice)
    }

    /// Decodes the message from the wire.
    pub fn from_bytes(bytes: &[u8; Self::LEN]) -> Result<Self, PointError> {
        Ok(Self {
            blinded_choice: point::from_bytes(bytes)?,
        })
    }
}

/// The sender's payload carrying both masked labels, `E0 ‖ E1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderPayload {
    /// The masked labels, indexed by choice bit.
    pub masked: [MaskedLabel; 2],
}

impl SenderPayload {
    /// The message length on the wire.
    pub const LEN: usize = 2 * WireLabel::LEN;

    /// Encodes the message for the wire.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut bytes = [0u8; Self::LEN];
        bytes[..WireLabel::LEN].copy_from_slice(&self.masked[0]);
        bytes[WireLabel::LEN..].copy_from_slice(&self.masked[1]);
        bytes
    }

    /// Decodes the message from the wire.
    pub fn from_bytes(bytes: &[u8; Self::LEN]) -> Self {
        let mut masked = [[0u8; WireLabel::LEN]; 2];
        masked[0].copy_from_slice(&bytes[..WireLabel::LEN]);
        masked[1].copy_from_slice(&bytes[WireLabel::LEN..]);
        Self { masked }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gage_core::point::{base_point, mul, random_scalar};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_sender_setup_round_trip() {
        let mut rng = ChaCha12Rng::seed_from_u64(0);
        let setup = SenderSetup {
            public_key: mul(&random_scalar(&mut rng), &base_point()),
        };

        let bytes = setup.to_bytes().unwrap();
        assert_eq!(bytes.len(), SenderSetup::LEN);
        assert_eq!(SenderSetup::from_bytes(&bytes).unwrap(), setup);
    }

    #[test]
    fn test_sender_setup_rejects_garbage() {
        assert!(SenderSetup::from_bytes(&[0xff; SenderSetup::LEN]).is_err());
    }

    #[test]
    fn test_receiver_payload_round_trip() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let payload = ReceiverPayload {
            blinded_choice: mul(&random_scalar(&mut rng), &base_point()),
        };

        let bytes = payload.to_bytes().unwrap();
        assert_eq!(ReceiverPayload::from_bytes(&bytes).unwrap(), payload);
    }

    #[test]
    fn test_sender_payload_round_trip() {
        let payload = SenderPayload {
            masked: [[0x0f; WireLabel::LEN], [0xf0; WireLabel::LEN]],
        };

        let bytes = payload.to_bytes();
        assert_eq!(bytes.len(), SenderPayload::LEN);
        assert_eq!(SenderPayload::from_bytes(&bytes), payload);
    }
}
