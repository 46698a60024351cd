use gage_core::{
    aes::{aes128_cbc_encrypt, CipherError},
    WireLabel,
};
use rand::{CryptoRng, Rng};

use crate::circuit::{AndTable, TableEntry};

/// The length of an entry's plaintext payload in bytes.
pub(crate) const PAYLOAD_LEN: usize = 32;

/// Errors that can occur while garbling.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum GeneratorError {
    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Builds the garbled truth table for `z = x ∧ y`.
///
/// `a0`/`a1` are the labels of the first input wire and `b0`/`b1` of the
/// second. Entries are built in row-major `(i, j)` order, so the entry for
/// the pair `(a_i, b_j)` lands at index `2i + j`.
pub fn garble_and<R: Rng + CryptoRng + ?Sized>(
    rng: &mut R,
    a0: &WireLabel,
    a1: &WireLabel,
    b0: &WireLabel,
    b1: &WireLabel,
) -> Result<AndTable, GeneratorError> {
    Ok(AndTable::new([
        encrypt_entry(rng, a0, b0, false)?,
        encrypt_entry(rng, a0, b1, false)?,
        encrypt_entry(rng, a1, b0, false)?,
        encrypt_entry(rng, a1, b1, true)?,
    ]))
}

/// Encrypts one table entry.
///
/// The payload puts the output bit in byte 0 and zeros everywhere else; the
/// zero bytes are what the evaluator later checks to recognize the entry
/// matching its labels. The payload is encrypted under `wa`'s key with a
/// fresh IV, then under `wb`'s key with a second fresh IV.
fn encrypt_entry<R: Rng + CryptoRng + ?Sized>(
    rng: &mut R,
    wa: &WireLabel,
    wb: &WireLabel,
    output: bool,
) -> Result<TableEntry, GeneratorError> {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = output as u8;

    let iv1: [u8; 16] = rng.gen();
    let iv2: [u8; 16] = rng.gen();

    let inner = aes128_cbc_encrypt(wa.key(), &iv1, &payload)?;
    let outer = aes128_cbc_encrypt(wb.key(), &iv2, &inner)?;

    let mut ciphertext = [0u8; PAYLOAD_LEN];
    ciphertext.copy_from_slice(&outer);

    Ok(TableEntry::new(iv1, iv2, ciphertext))
}
