use gage_core::{aes::aes128_cbc_decrypt, WireLabel};

use crate::circuit::{AndTable, TableEntry};

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum EvaluatorError {
    #[error("no table entry decrypted to a valid payload")]
    GateEvaluationFailed,
}

/// Evaluates a garbled AND table with the evaluator's two input labels,
/// returning the output bit.
///
/// Entries are tried in index order and the first payload passing the
/// zero-padding check wins. A label pair that does not belong to the table
/// fails every entry, except with probability at most `2^-247`.
pub fn evaluate_and(
    wa: &WireLabel,
    wb: &WireLabel,
    table: &AndTable,
) -> Result<bool, EvaluatorError> {
    table
        .iter()
        .find_map(|entry| decrypt_entry(wa, wb, entry))
        .ok_or(EvaluatorError::GateEvaluationFailed)
}

/// Attempts to decrypt a single entry.
///
/// `None` means the entry does not belong to this label pair; the caller
/// moves on to the next one. The payload is accepted only when every byte
/// after the first is zero and byte 0 holds a valid bit.
fn decrypt_entry(wa: &WireLabel, wb: &WireLabel, entry: &TableEntry) -> Option<bool> {
    let inner = aes128_cbc_decrypt(wb.key(), entry.iv2(), entry.ciphertext()).ok()?;
    let payload = aes128_cbc_decrypt(wa.key(), entry.iv1(), &inner).ok()?;

    if payload[1..].iter().any(|&b| b != 0) {
        return None;
    }

    match payload[0] {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}
