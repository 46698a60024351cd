//! AES-128-CBC with explicit IVs and no padding.
//!
//! Callers supply block-aligned input; nothing is padded or truncated, so
//! ciphertext and plaintext lengths always match.

use aes::Aes128;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

/// The AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// The AES-128 key length in bytes.
pub const KEY_LEN: usize = 16;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Errors from the CBC helpers.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The input length is not a multiple of the AES block length.
    #[error("input length {0} is not block aligned")]
    UnalignedLength(usize),
}

/// Encrypts `plaintext` under `key` with the given IV.
pub fn aes128_cbc_encrypt(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    if plaintext.len() % BLOCK_LEN != 0 {
        return Err(CipherError::UnalignedLength(plaintext.len()));
    }

    let mut buf = plaintext.to_vec();
    Aes128CbcEnc::new(key.into(), iv.into())
        .encrypt_padded_mut::<NoPadding>(&mut buf, plaintext.len())
        .map_err(|_| CipherError::UnalignedLength(plaintext.len()))?;

    Ok(buf)
}

/// Decrypts `ciphertext` under `key` with the given IV.
pub fn aes128_cbc_decrypt(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CipherError::UnalignedLength(ciphertext.len()));
    }

    let mut buf = ciphertext.to_vec();
    Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| CipherError::UnalignedLength(ciphertext.len()))?;

    Ok(buf)
}
