//! G2 points.
use crate::{
    constants::{FQ_LEN, G2_LEN},
    BaseField,
};
use alloy_primitives::{uint, U256};

/// G2 generator.
pub const P2: G2Point = G2Point::new(
    BaseField::new(uint!(
        0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed_U256
    )),
    BaseField::new(uint!(
        0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2_U256
    )),
    BaseField::new(uint!(
        0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa_U256
    )),
    BaseField::new(uint!(
        0x090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b_U256
    )),
);

/// Affine point on the twist over `Fp2`, with `x = x0 + x1·u` and
/// `y = y0 + y1·u`.
///
/// No validation happens here; the provider rejects malformed points when
/// they reach a pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct G2Point {
    /// Real part of x
    pub x0: BaseField,
    /// Imaginary part of x
    pub x1: BaseField,
    /// Real part of y
    pub y0: BaseField,
    /// Imaginary part of y
    pub y1: BaseField,
}

impl G2Point {
    /// Creates a point from raw coefficients without validation.
    pub const fn new(x0: BaseField, x1: BaseField, y0: BaseField, y1: BaseField) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Returns `true` if all coefficients are zero, the precompile encoding of
    /// the point at infinity.
    pub fn is_zero(&self) -> bool {
        [self.x0, self.x1, self.y0, self.y1]
            .iter()
            .all(|c| c.0.is_zero())
    }

    /// Encodes the point in the precompile layout: `x1 || x0 || y1 || y0`,
    /// each big-endian. The imaginary part comes first.
    pub fn to_be_bytes(&self) -> [u8; G2_LEN] {
        let mut out = [0u8; G2_LEN];
        for (chunk, c) in out
            .chunks_exact_mut(FQ_LEN)
            .zip([self.x1, self.x0, self.y1, self.y0])
        {
            chunk.copy_from_slice(&c.0.to_be_bytes::<FQ_LEN>());
        }
        out
    }

    /// Decodes the precompile layout written by [`G2Point::to_be_bytes`].
    pub fn from_be_bytes(bytes: &[u8; G2_LEN]) -> Self {
        let read = |n: usize| BaseField(U256::from_be_slice(&bytes[n * FQ_LEN..(n + 1) * FQ_LEN]));
        Self::new(read(1), read(0), read(3), read(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn generator_precompile_layout() {
        let expected = hex!(
            "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2"
            "1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed"
            "090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b"
            "12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa"
        );
        assert_eq!(P2.to_be_bytes(), expected);
        assert_eq!(G2Point::from_be_bytes(&expected), P2);
    }

    #[test]
    fn zero() {
        assert!(G2Point::default().is_zero());
        assert!(!P2.is_zero());
    }
}
