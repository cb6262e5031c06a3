//! Conversions between the kernel's value types and arkworks types.
//!
//! The point at infinity is `(0, 0)` on the kernel side, following the BN254
//! precompile convention, and the affine identity on the arkworks side.
use crate::{BaseField, G1Point, G2Point, ProviderError, ScalarField};
use alloy_primitives::U256;
use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInt, PrimeField, Zero};

/// Converts a canonical base field element. Fails if `value >= P`.
#[inline]
pub fn read_fq(value: BaseField) -> Result<Fq, ProviderError> {
    Fq::from_bigint(BigInt::new(value.0.into_limbs())).ok_or(ProviderError::FieldPointNotAMember)
}

/// Converts an `Fq2` element from its `(c0, c1)` coefficients.
#[inline]
pub fn read_fq2(c0: BaseField, c1: BaseField) -> Result<Fq2, ProviderError> {
    Ok(Fq2::new(read_fq(c0)?, read_fq(c1)?))
}

/// Converts a scalar, reducing it modulo `R`.
#[inline]
pub fn read_scalar(value: ScalarField) -> Fr {
    Fr::from_be_bytes_mod_order(&value.0.to_be_bytes::<32>())
}

impl From<Fq> for BaseField {
    fn from(value: Fq) -> Self {
        Self(U256::from_limbs(value.into_bigint().0))
    }
}

impl From<Fr> for ScalarField {
    fn from(value: Fr) -> Self {
        Self(U256::from_limbs(value.into_bigint().0))
    }
}

impl From<G1Affine> for G1Point {
    fn from(p: G1Affine) -> Self {
        match p.xy() {
            Some((x, y)) => Self::new(x.into(), y.into()),
            None => Self::infinity(),
        }
    }
}

impl TryFrom<G1Point> for G1Affine {
    type Error = ProviderError;

    /// Fails unless the point is `(0, 0)` or a canonical point of the
    /// prime-order subgroup.
    fn try_from(p: G1Point) -> Result<Self, Self::Error> {
        let x = read_fq(p.x)?;
        let y = read_fq(p.y)?;
        if x.is_zero() && y.is_zero() {
            return Ok(G1Affine::identity());
        }
        // `G1Affine::new` asserts on invalid points.
        let point = G1Affine::new_unchecked(x, y);
        if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(ProviderError::AffineGFailedToCreate);
        }
        Ok(point)
    }
}

impl From<G2Affine> for G2Point {
    fn from(p: G2Affine) -> Self {
        match p.xy() {
            Some((x, y)) => Self::new(x.c0.into(), x.c1.into(), y.c0.into(), y.c1.into()),
            None => Self::default(),
        }
    }
}

impl TryFrom<G2Point> for G2Affine {
    type Error = ProviderError;

    /// Fails unless the point is all zeroes or a canonical point of the
    /// prime-order subgroup of the twist.
    fn try_from(p: G2Point) -> Result<Self, Self::Error> {
        let x = read_fq2(p.x0, p.x1)?;
        let y = read_fq2(p.y0, p.y1)?;
        if x.is_zero() && y.is_zero() {
            return Ok(G2Affine::identity());
        }
        let point = G2Affine::new_unchecked(x, y);
        if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(ProviderError::AffineGFailedToCreate);
        }
        Ok(point)
    }
}
