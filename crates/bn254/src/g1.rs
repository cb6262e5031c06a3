//! G1 points and their operations.
use crate::{
    constants::{CURVE_B, FQ_LEN, G1_LEN, P_MINUS_ONE_DIV_TWO},
    provider::provider_result,
    BaseField, Bn254, Bn254Error, GroupOp, ScalarField,
};
use alloy_primitives::{uint, U256};
use core::ops::Neg;

/// G1 generator `(1, 2)`.
pub const P1: G1Point = G1Point::new(BaseField::new(uint!(1_U256)), BaseField::new(uint!(2_U256)));

/// Affine G1 point.
///
/// `(0, 0)` is the point at infinity. It is a sentinel, not a point of the
/// curve. Equality compares the raw coordinates, so a non-canonical
/// coordinate never equals its reduced form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct G1Point {
    /// x coordinate
    pub x: BaseField,
    /// y coordinate
    pub y: BaseField,
}

impl G1Point {
    /// Creates a point from raw coordinates without validation.
    pub const fn new(x: BaseField, y: BaseField) -> Self {
        Self { x, y }
    }

    /// Returns the point at infinity, `(0, 0)`.
    pub const fn infinity() -> Self {
        Self::new(BaseField::ZERO, BaseField::ZERO)
    }

    /// Returns `true` if both coordinates are exactly zero.
    pub fn is_infinity(&self) -> bool {
        self.x.0.is_zero() && self.y.0.is_zero()
    }

    /// Returns `(x, P - y)`, or the point itself for infinity.
    ///
    /// `y` is not re-validated; callers on the hot path are trusted to pass a
    /// canonical point. Use [`G1Point::validate`] on untrusted input first.
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Self::new(self.x, self.y.negate())
    }

    /// Checks `y^2 = x^3 + 3 (mod P)` without range checks.
    pub fn is_on_curve(&self) -> bool {
        let x = self.x;
        self.y * self.y == x * x * x + BaseField(CURVE_B)
    }

    /// Succeeds for infinity and for canonical points on the curve.
    pub fn validate(&self) -> Result<(), Bn254Error> {
        if self.is_infinity() {
            return Ok(());
        }
        if !self.x.is_canonical() || !self.y.is_canonical() || !self.is_on_curve() {
            return Err(Bn254Error::InvalidG1);
        }
        Ok(())
    }

    /// Returns `true` if `2y < P`, i.e. `y` is the smaller of `y` and `P - y`.
    ///
    /// Compressed encoding sets its sign flag when this is `false`.
    pub fn is_y_negative(&self) -> bool {
        // P is odd, so `2y < P` is `y <= (P - 1) / 2`.
        self.y.0 <= P_MINUS_ONE_DIV_TWO
    }

    /// Encodes the point as `x || y`, big-endian, the uncompressed layout of
    /// the BN254 precompiles.
    pub fn to_be_bytes(&self) -> [u8; G1_LEN] {
        let mut out = [0u8; G1_LEN];
        out[..FQ_LEN].copy_from_slice(&self.x.0.to_be_bytes::<FQ_LEN>());
        out[FQ_LEN..].copy_from_slice(&self.y.0.to_be_bytes::<FQ_LEN>());
        out
    }

    /// Decodes `x || y`, big-endian. Coordinates are not validated.
    pub fn from_be_bytes(bytes: &[u8; G1_LEN]) -> Self {
        let (x, y) = bytes.split_at(FQ_LEN);
        Self::new(
            BaseField(U256::from_be_slice(x)),
            BaseField(U256::from_be_slice(y)),
        )
    }
}

impl Neg for G1Point {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Bn254<'_> {
    /// Adds two G1 points through the provider.
    pub fn add(&self, p1: G1Point, p2: G1Point) -> Result<G1Point, Bn254Error> {
        provider_result(GroupOp::EcAdd, self.provider().ec_add(p1, p2))
    }

    /// Multiplies a G1 point by a scalar through the provider.
    ///
    /// `s` is not validated; `s` and `s mod R` give the same point.
    pub fn scalar_mul(&self, p: G1Point, s: ScalarField) -> Result<G1Point, Bn254Error> {
        provider_result(GroupOp::EcMul, self.provider().ec_mul(p, s))
    }

    /// Returns `s * P1`.
    pub fn g1_from_scalar(&self, s: ScalarField) -> Result<G1Point, Bn254Error> {
        self.scalar_mul(P1, s)
    }
}
