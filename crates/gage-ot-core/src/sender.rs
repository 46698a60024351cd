use crate::{
    apply_mask, hash_point,
    msgs::{ReceiverPayload, SenderPayload, SenderSetup},
    SenderError,
};

use gage_core::{point, WireLabel};
use p256::{ProjectivePoint, Scalar};
use rand::{CryptoRng, Rng};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use zeroize::{Zeroize, Zeroizing};

/// A [CO15](https://eprint.iacr.org/2015/267.pdf) sender holding the two
/// wire labels of one evaluator input wire.
///
/// A sender runs exactly one exchange: each protocol step consumes the
/// value, so the ephemeral `(a, A)` pair cannot be reused.
#[derive(Debug, Default)]
pub struct Sender<T: state::State = state::Initialized> {
    /// Current state
    state: T,
}

impl Sender {
    /// Creates a new sender with ephemerals drawn from system entropy.
    pub fn new() -> Self {
        Self {
            state: state::Initialized::default(),
        }
    }

    /// Creates a new sender with ephemerals drawn from the provided RNG
    /// seed.
    pub fn new_with_seed(seed: [u8; 32]) -> Self {
        let mut rng = ChaCha20Rng::from_seed(seed);
        Self::new_from_rng(&mut rng)
    }

    /// Creates a new sender with ephemerals drawn from the provided RNG.
    pub fn new_from_rng<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let private_key = point::random_scalar(rng);
        let public_key = point::mul(&private_key, &point::base_point());

        Self {
            state: state::Initialized {
                private_key,
                public_key,
            },
        }
    }

    /// Returns the setup message announcing `A`, advancing to the send
    /// state.
    pub fn setup(self) -> (SenderSetup, Sender<state::Setup>) {
        // `Initialized` wipes itself on drop, so copy the ephemerals out
        // rather than destructuring.
        let private_key = self.state.private_key;
        let public_key = self.state.public_key;

        (
            SenderSetup { public_key },
            Sender {
                state: state::Setup {
                    private_key,
                    public_key,
                },
            },
        )
    }
}

impl Sender<state::Setup> {
    /// Masks both labels under the keys derived from the receiver's
    /// blinded choice point and returns the payload.
    ///
    /// The label at index 0 is recoverable by a receiver that chose 0 and
    /// the label at index 1 by one that chose 1; nothing in the blinded
    /// point tells the sender which case it is in.
    pub fn send(
        self,
        labels: &[WireLabel; 2],
        payload: ReceiverPayload,
    ) -> Result<SenderPayload, SenderError> {
        let state::Setup {
            private_key,
            public_key,
        } = &self.state;
        let ReceiverPayload { blinded_choice } = payload;

        // k0 = H(a·B); k1 = H(a·(B - A)) with B - A as 1·B + (-1)·A.
        let k0 = Zeroizing::new(hash_point(&point::mul(private_key, &blinded_choice))?);
        let diff = point::muladd(&Scalar::ONE, &blinded_choice, &-Scalar::ONE, public_key);
        let k1 = Zeroizing::new(hash_point(&point::mul(private_key, &diff))?);

        let masked = [
            apply_mask(labels[0].to_bytes(), &k0),
            apply_mask(labels[1].to_bytes(), &k1),
        ];

        Ok(SenderPayload { masked })
    }
}

/// The sender's state.
pub mod state {
    use super::*;

    mod sealed {
        pub trait Sealed {}

        impl Sealed for super::Initialized {}
        impl Sealed for super::Setup {}
    }

    /// The sender's state.
    pub trait State: sealed::Sealed {}

    /// The sender's initial state: ephemerals generated, setup not yet
    /// announced.
    pub struct Initialized {
        /// The ephemeral secret `a`.
        pub(super) private_key: Scalar,
        /// The public point `A = a·G`.
        pub(super) public_key: ProjectivePoint,
    }

    impl State for Initialized {}

    opaque_debug::implement!(Initialized);

    impl Default for Initialized {
        fn default() -> Self {
            let mut rng = ChaCha20Rng::from_entropy();
            let private_key = point::random_scalar(&mut rng);
            let public_key = point::mul(&private_key, &point::base_point());
            Initialized {
                private_key,
                public_key,
            }
        }
    }

    impl Drop for Initialized {
        fn drop(&mut self) {
            self.private_key.zeroize();
        }
    }

    /// The sender's state once `A` has been announced.
    pub struct Setup {
        /// The ephemeral secret `a`.
        pub(super) private_key: Scalar,
        /// The public point `A = a·G`.
        pub(super) public_key: ProjectivePoint,
    }

    impl State for Setup {}

    opaque_debug::implement!(Setup);

    impl Drop for Setup {
        fn drop(&mut self) {
            self.private_key.zeroize();
        }
    }
}
