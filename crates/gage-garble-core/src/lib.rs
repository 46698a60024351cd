//! Garbled AND gate construction and evaluation.
//!
//! This crate implements the classic four-row garbled truth table: each
//! entry encrypts the output bit under a pair of input wire labels with
//! nested AES-128-CBC, and the evaluator trial-decrypts rows in order until
//! the zero-padding check passes. There is no free-XOR, point-and-permute,
//! or row reduction; the permute bit on labels is carried but unused.
#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]

mod circuit;
mod evaluator;
mod generator;

pub use circuit::{AndTable, TableEntry};
pub use evaluator::{evaluate_and, EvaluatorError};
pub use generator::{garble_and, GeneratorError};

#[cfg(test)]
mod tests {
    use super::*;

    use gage_core::WireLabel;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::*;

    struct Wires {
        a0: WireLabel,
        a1: WireLabel,
        b0: WireLabel,
        b1: WireLabel,
    }

    #[fixture]
    fn wires() -> Wires {
        let mut rng = ChaCha12Rng::seed_from_u64(0);
        Wires {
            a0: WireLabel::generate(&mut rng, false),
            a1: WireLabel::generate(&mut rng, true),
            b0: WireLabel::generate(&mut rng, false),
            b1: WireLabel::generate(&mut rng, true),
        }
    }

    #[fixture]
    fn table(wires: Wires) -> (Wires, AndTable) {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let table = garble_and(&mut rng, &wires.a0, &wires.a1, &wires.b0, &wires.b1).unwrap();
        (wires, table)
    }

    #[rstest]
    fn test_and_truth_table(table: (Wires, AndTable)) {
        let (wires, table) = table;

        assert!(!evaluate_and(&wires.a0, &wires.b0, &table).unwrap());
        assert!(!evaluate_and(&wires.a0, &wires.b1, &table).unwrap());
        assert!(!evaluate_and(&wires.a1, &wires.b0, &table).unwrap());
        assert!(evaluate_and(&wires.a1, &wires.b1, &table).unwrap());
    }

    #[rstest]
    fn test_foreign_labels_fail(table: (Wires, AndTable)) {
        let (wires, table) = table;

        let mut rng = ChaCha12Rng::seed_from_u64(2);
        let stray = WireLabel::generate(&mut rng, false);

        assert_eq!(
            evaluate_and(&stray, &wires.b0, &table),
            Err(EvaluatorError::GateEvaluationFailed)
        );
        assert_eq!(
            evaluate_and(&wires.a1, &stray, &table),
            Err(EvaluatorError::GateEvaluationFailed)
        );
    }

    #[rstest]
    fn test_corrupted_entry_fails(table: (Wires, AndTable)) {
        let (wires, table) = table;

        // Flip one ciphertext byte of the (1, 1) entry; the row no longer
        // decrypts to a valid payload and the other three never match the
        // (a1, b1) pair.
        let mut bytes = table.to_bytes();
        bytes[3 * TableEntry::LEN + 63] ^= 0xa5;
        let table = AndTable::from_bytes(&bytes);

        assert_eq!(
            evaluate_and(&wires.a1, &wires.b1, &table),
            Err(EvaluatorError::GateEvaluationFailed)
        );
    }

    #[rstest]
    fn test_garbling_is_deterministic_per_seed(wires: Wires) {
        let mut rng1 = ChaCha12Rng::seed_from_u64(3);
        let mut rng2 = ChaCha12Rng::seed_from_u64(3);

        let t1 = garble_and(&mut rng1, &wires.a0, &wires.a1, &wires.b0, &wires.b1).unwrap();
        let t2 = garble_and(&mut rng2, &wires.a0, &wires.a1, &wires.b0, &wires.b1).unwrap();

        assert_eq!(t1, t2);
    }
}
