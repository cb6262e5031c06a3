//! Compressed G1 encoding.
//!
//! A compressed point is a 256-bit big-endian integer:
//!
//! | bit      | meaning                                              |
//! |----------|------------------------------------------------------|
//! | 255      | `y` is the larger root, i.e. `2y >= P`               |
//! | 254      | point at infinity; every other bit is then zero      |
//! | 253..0   | `x`                                                  |
//!
//! The flag bits sit in the most significant byte of the returned [`B256`].
use crate::{
    constants::{
        CURVE_B, INFINITY_FLAG, P_MINUS_ONE_DIV_TWO, P_MOD, P_PLUS_ONE_DIV_FOUR, X_MASK,
        Y_POSITIVE_FLAG,
    },
    provider::provider_result,
    BaseField, Bn254, Bn254Error, G1Point, GroupOp,
};
use alloy_primitives::{B256, U256};

impl G1Point {
    /// Encodes the point in compressed form.
    ///
    /// The point is expected to be valid and canonical; serialization is
    /// injective on such points.
    pub fn serialize(&self) -> B256 {
        if self.is_infinity() {
            return B256::new(INFINITY_FLAG.to_be_bytes::<32>());
        }
        let mut encoded = self.x.0;
        if !self.is_y_negative() {
            encoded |= Y_POSITIVE_FLAG;
        }
        B256::new(encoded.to_be_bytes::<32>())
    }
}

impl Bn254<'_> {
    /// Decodes a compressed point.
    ///
    /// When the infinity flag is set the remaining bits are ignored.
    pub fn deserialize(&self, input: B256) -> Result<G1Point, Bn254Error> {
        let encoded = U256::from_be_bytes(input.0);
        if !(encoded & INFINITY_FLAG).is_zero() {
            return Ok(G1Point::infinity());
        }

        let is_y_positive = !(encoded & Y_POSITIVE_FLAG).is_zero();
        let x = encoded & X_MASK;
        if x >= P_MOD {
            tracing::trace!(%input, "compressed x is not canonical");
            return Err(Bn254Error::InvalidArgs("non-canonical representation"));
        }
        let x = BaseField(x);

        // y^2 = x^3 + 3
        let (is_residue, a) = self.quadratic_residue(x * x * x + BaseField(CURVE_B))?;
        if !is_residue {
            tracing::trace!(%input, "compressed x is not on the curve");
            return Err(Bn254Error::InvalidG1);
        }

        let y = if is_y_positive { a.negate() } else { a };
        Ok(G1Point::new(x, y))
    }

    /// Square root of `x` in the base field.
    ///
    /// Computes `a = x^((P+1)/4)`, which is a root whenever one exists because
    /// `P ≡ 3 (mod 4)`. Returns the smaller of `a` and `P - a` together with
    /// whether `a^2 ≡ x (mod P)`. When the flag is `false` the returned value
    /// is meaningless. `x` does not need to be canonical.
    pub fn quadratic_residue(&self, x: BaseField) -> Result<(bool, BaseField), Bn254Error> {
        let x = BaseField(x.0.reduce_mod(P_MOD));
        let a = provider_result(
            GroupOp::ModExp,
            self.provider().mod_exp(x.0, P_PLUS_ONE_DIV_FOUR, P_MOD),
        )?;
        let mut a = BaseField(a);
        if a.0 > P_MINUS_ONE_DIV_TWO {
            a = a.negate();
        }
        Ok((a * a == x, a))
    }
}
