use rand::{CryptoRng, Rng};

/// A wire label: the symmetric secret standing for one logical value on one
/// circuit wire.
///
/// The two labels of a wire are sampled independently, so holding one gives
/// no information about the other. The permute bit is carried through the
/// protocol but not consulted during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireLabel {
    key: [u8; Self::KEY_LEN],
    permute: bool,
}

impl WireLabel {
    /// The length of the symmetric key in bytes.
    pub const KEY_LEN: usize = 16;
    /// The length of a label's byte encoding: the key followed by one
    /// permute byte.
    pub const LEN: usize = Self::KEY_LEN + 1;

    /// Creates a label from its parts.
    #[inline]
    pub fn new(key: [u8; Self::KEY_LEN], permute: bool) -> Self {
        Self { key, permute }
    }

    /// Generates a label with a fresh uniformly random key.
    #[inline]
    pub fn generate<R: Rng + CryptoRng + ?Sized>(rng: &mut R, permute: bool) -> Self {
        Self {
            key: rng.gen(),
            permute,
        }
    }

    /// Returns the symmetric key.
    #[inline]
    pub fn key(&self) -> &[u8; Self::KEY_LEN] {
        &self.key
    }

    /// Returns the permute bit.
    #[inline]
    pub fn permute(&self) -> bool {
        self.permute
    }

    /// Returns the byte encoding: key bytes followed by the permute byte.
    #[inline]
    pub fn to_bytes(self) -> [u8; Self::LEN] {
        let mut bytes = [0u8; Self::LEN];
        bytes[..Self::KEY_LEN].copy_from_slice(&self.key);
        bytes[Self::KEY_LEN] = self.permute as u8;
        bytes
    }

    /// Parses a label from its byte encoding.
    #[inline]
    pub fn from_bytes(bytes: &[u8; Self::LEN]) -> Self {
        let mut key = [0u8; Self::KEY_LEN];
        key.copy_from_slice(&bytes[..Self::KEY_LEN]);
        Self {
            key,
            permute: bytes[Self::KEY_LEN] != 0,
        }
    }
}
