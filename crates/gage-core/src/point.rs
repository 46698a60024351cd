//! Scalar and point arithmetic over NIST P-256.
//!
//! Points cross the wire in SEC1 uncompressed form: the tag byte `0x04`
//! followed by the two 32-byte big-endian coordinates.

use p256::{
    elliptic_curve::{
        ops::{LinearCombination, Reduce},
        sec1::{FromEncodedPoint, ToEncodedPoint},
        Curve,
    },
    AffinePoint, EncodedPoint, FieldBytes, NistP256, ProjectivePoint, Scalar, U256,
};
use rand::{CryptoRng, Rng};

/// The length of a SEC1 uncompressed point encoding in bytes.
pub const POINT_LEN: usize = 65;

/// The SEC1 uncompressed tag byte.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Errors from point encoding and decoding.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    /// The bytes are not a valid uncompressed encoding of a curve point.
    #[error("invalid curve point encoding")]
    InvalidPoint,
    /// The point at infinity has no uncompressed encoding.
    #[error("the point at infinity cannot be serialized")]
    Identity,
}

/// Samples a scalar uniformly from `[0, N)`.
///
/// Draws 32 bytes from the RNG, interprets them big-endian, and reduces
/// modulo the group order. The reduction bias is negligible for P-256.
pub fn random_scalar<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Scalar {
    let mut buf = [0u8; 32];
    rng.fill_bytes(&mut buf);
    <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(buf))
}

/// Returns the group generator `G`.
#[inline]
pub fn base_point() -> ProjectivePoint {
    ProjectivePoint::GENERATOR
}

/// Returns the group order `N`.
#[inline]
pub fn order() -> U256 {
    NistP256::ORDER
}

/// Computes `s·P`.
#[inline]
pub fn mul(s: &Scalar, p: &ProjectivePoint) -> ProjectivePoint {
    p * s
}

/// Computes `s1·P1 + s2·P2` in a single pass.
#[inline]
pub fn muladd(
    s1: &Scalar,
    p1: &ProjectivePoint,
    s2: &Scalar,
    p2: &ProjectivePoint,
) -> ProjectivePoint {
    ProjectivePoint::lincomb(p1, s1, p2, s2)
}

/// Serializes a point in SEC1 uncompressed form.
///
/// The point at infinity has no such encoding and is rejected with
/// [`PointError::Identity`].
pub fn to_bytes(point: &ProjectivePoint) -> Result<[u8; POINT_LEN], PointError> {
    let encoded = point.to_affine().to_encoded_point(false);
    let bytes = encoded.as_bytes();

    if bytes.len() != POINT_LEN {
        return Err(PointError::Identity);
    }

    let mut out = [0u8; POINT_LEN];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Deserializes a point from SEC1 uncompressed form.
///
/// Fails with [`PointError::InvalidPoint`] unless the tag is `0x04`, the
/// coordinates satisfy the curve equation, and the point is not the
/// identity.
pub fn from_bytes(bytes: &[u8; POINT_LEN]) -> Result<ProjectivePoint, PointError> {
    if bytes[0] != UNCOMPRESSED_TAG {
        return Err(PointError::InvalidPoint);
    }

    let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| PointError::InvalidPoint)?;

    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .map(ProjectivePoint::from)
        .ok_or(PointError::InvalidPoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_point_byte_round_trip() {
        let mut rng = ChaCha12Rng::seed_from_u64(0);

        for _ in 0..8 {
            let s = random_scalar(&mut rng);
            let p = mul(&s, &base_point());

            let bytes = to_bytes(&p).unwrap();
            assert_eq!(bytes[0], 0x04);
            assert_eq!(from_bytes(&bytes).unwrap(), p);
        }
    }

    #[test]
    fn test_from_bytes_rejects_bad_tag() {
        let mut bytes = to_bytes(&base_point()).unwrap();
        bytes[0] = 0x05;

        assert_eq!(from_bytes(&bytes), Err(PointError::InvalidPoint));
    }

    #[test]
    fn test_from_bytes_rejects_off_curve() {
        let mut bytes = to_bytes(&base_point()).unwrap();
        // Perturbing the y coordinate breaks the curve equation.
        bytes[64] ^= 0x01;

        assert_eq!(from_bytes(&bytes), Err(PointError::InvalidPoint));
    }

    #[test]
    fn test_identity_rejected_on_serialization() {
        // (N - 1)·G + G = N·G = O.
        let n_minus_one = -Scalar::ONE;
        let p = muladd(&n_minus_one, &base_point(), &Scalar::ONE, &base_point());

        assert_eq!(to_bytes(&p), Err(PointError::Identity));
    }

    #[test]
    fn test_muladd_matches_mul() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);

        let s1 = random_scalar(&mut rng);
        let s2 = random_scalar(&mut rng);
        let g = base_point();

        let lhs = muladd(&s1, &g, &s2, &g);
        let rhs = mul(&s1, &g) + mul(&s2, &g);

        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_random_scalars_are_reduced_and_distinct() {
        let mut rng = ChaCha12Rng::seed_from_u64(2);

        let mut seen = Vec::new();
        for _ in 0..32 {
            let s = random_scalar(&mut rng);
            let value = U256::from_be_slice(s.to_bytes().as_slice());

            assert!(value < order());
            assert!(!seen.contains(&value));
            seen.push(value);
        }
    }
}
