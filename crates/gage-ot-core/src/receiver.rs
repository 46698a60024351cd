use crate::{
    apply_mask, hash_point,
    msgs::{ReceiverPayload, SenderPayload, SenderSetup},
    ReceiverError,
};

use std::mem;

use gage_core::{point, WireLabel};
use p256::ProjectivePoint;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use subtle::{Choice, ConditionallySelectable};
use zeroize::{Zeroize, Zeroizing};

/// A [CO15](https://eprint.iacr.org/2015/267.pdf) receiver that obtains the
/// wire label matching its choice bit.
///
/// Like the sender, a receiver runs exactly one exchange; each protocol
/// step consumes the value.
#[derive(Debug, Default)]
pub struct Receiver<T: state::State = state::Initialized> {
    /// Current state
    state: T,
}

impl Receiver {
    /// Creates a new receiver seeded from system entropy.
    pub fn new() -> Self {
        Self {
            state: state::Initialized::default(),
        }
    }

    /// Creates a new receiver with the provided RNG seed.
    pub fn new_with_seed(seed: [u8; 32]) -> Self {
        Self {
            state: state::Initialized {
                rng: ChaCha20Rng::from_seed(seed),
            },
        }
    }

    /// Processes the sender's setup and commits to `choice`, returning the
    /// blinded choice point to send back.
    ///
    /// `B = b·G` for choice 0 and `B = A + b·G` for choice 1. The branch is
    /// taken with a constant-time point selection, so the time to build `B`
    /// is independent of the choice.
    pub fn setup(
        mut self,
        choice: bool,
        sender_setup: SenderSetup,
    ) -> Result<(ReceiverPayload, Receiver<state::Setup>), ReceiverError> {
        // `Initialized` wipes itself on drop, so swap the RNG out rather
        // than destructuring.
        let mut rng = mem::replace(&mut self.state.rng, ChaCha20Rng::from_seed([0u8; 32]));
        let SenderSetup { public_key } = sender_setup;

        let mut blinding = point::random_scalar(&mut rng);
        let t = point::mul(&blinding, &point::base_point());
        let offset = ProjectivePoint::conditional_select(
            &ProjectivePoint::IDENTITY,
            &public_key,
            Choice::from(choice as u8),
        );
        let blinded_choice = offset + t;

        // k = H(b·A); wipe b before the fallible return.
        let key = hash_point(&point::mul(&blinding, &public_key));
        blinding.zeroize();
        let key = Zeroizing::new(key?);

        Ok((
            ReceiverPayload { blinded_choice },
            Receiver {
                state: state::Setup { choice, key },
            },
        ))
    }
}

impl Receiver<state::Setup> {
    /// Unmasks and returns the label matching the committed choice.
    ///
    /// The other masked label stays encrypted under a key this receiver
    /// cannot derive.
    pub fn receive(self, payload: SenderPayload) -> WireLabel {
        let state::Setup { choice, key } = &self.state;
        let masked = payload.masked[*choice as usize];

        WireLabel::from_bytes(&apply_mask(masked, key))
    }
}

/// The receiver's state.
pub mod state {
    use super::*;

    mod sealed {
        pub trait Sealed {}

        impl Sealed for super::Initialized {}
        impl Sealed for super::Setup {}
    }

    /// The receiver's state.
    pub trait State: sealed::Sealed {}

    /// The receiver's initial state.
    pub struct Initialized {
        pub(super) rng: ChaCha20Rng,
    }

    impl State for Initialized {}

    opaque_debug::implement!(Initialized);

    impl Default for Initialized {
        fn default() -> Self {
            Self {
                rng: ChaCha20Rng::from_entropy(),
            }
        }
    }

    impl Drop for Initialized {
        fn drop(&mut self) {
            // ChaCha20Rng does not implement Zeroize; overwrite the seeded
            // state with a fixed one instead.
            self.rng = ChaCha20Rng::from_seed([0u8; 32]);
        }
    }

    /// The receiver's state once its blinded choice is committed.
    pub struct Setup {
        /// The committed choice bit.
        pub(super) choice: bool,
        /// The derived unmasking key, wiped on drop.
        pub(super) key: Zeroizing<[u8; 32]>,
    }

    impl State for Setup {}

    opaque_debug::implement!(Setup);
}
