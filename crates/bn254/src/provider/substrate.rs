//! Substrate `bn` backend for the group provider.
use super::{modexp, GroupProvider};
use crate::{
    constants::{FQ_LEN, SCALAR_LEN},
    BaseField, G1Point, G2Point, ProviderError, ScalarField,
};
use alloy_primitives::U256;
use bn::{AffineG1, AffineG2, Fq, Fq2, Fr, Group, Gt, G1, G2};
use std::vec::Vec;

/// In-process provider backed by `substrate-bn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubstrateProvider;

/// Reads a single `Fq` field element, failing if it is not canonical.
#[inline]
fn read_fq(value: BaseField) -> Result<Fq, ProviderError> {
    Fq::from_slice(&value.0.to_be_bytes::<FQ_LEN>())
        .map_err(|_| ProviderError::FieldPointNotAMember)
}

/// Reads `Fq2` from its real and imaginary coefficients.
#[inline]
fn read_fq2(real: BaseField, imaginary: BaseField) -> Result<Fq2, ProviderError> {
    Ok(Fq2::new(read_fq(real)?, read_fq(imaginary)?))
}

/// Reads a scalar, reducing it modulo `R`.
#[inline]
fn read_scalar(value: ScalarField) -> Fr {
    // `Fr::from_slice` can only fail when the length is not `SCALAR_LEN`.
    Fr::from_slice(&value.0.to_be_bytes::<SCALAR_LEN>()).unwrap()
}

/// Creates a new `G1` point.
///
/// Note: The point at infinity which is represented as (0,0) is
/// handled specifically because `AffineG1` is not capable of
/// representing such a point.
#[inline]
fn read_g1_point(p: G1Point) -> Result<G1, ProviderError> {
    let px = read_fq(p.x)?;
    let py = read_fq(p.y)?;
    if px == Fq::zero() && py == Fq::zero() {
        Ok(G1::zero())
    } else {
        AffineG1::new(px, py)
            .map(Into::into)
            .map_err(|_| ProviderError::AffineGFailedToCreate)
    }
}

/// Creates a new `G2` point, all zeroes being the point at infinity.
#[inline]
fn read_g2_point(p: G2Point) -> Result<G2, ProviderError> {
    let x = read_fq2(p.x0, p.x1)?;
    let y = read_fq2(p.y0, p.y1)?;
    if x.is_zero() && y.is_zero() {
        Ok(G2::zero())
    } else {
        AffineG2::new(x, y)
            .map(Into::into)
            .map_err(|_| ProviderError::AffineGFailedToCreate)
    }
}

/// Converts a `G1` point in Jacobian coordinates back to affine coordinates.
///
/// Note: If the point is the point at infinity, this function returns `(0, 0)`.
#[inline]
fn encode_g1_point(point: G1) -> Result<G1Point, ProviderError> {
    let Some(affine) = AffineG1::from_jacobian(point) else {
        return Ok(G1Point::infinity());
    };
    let mut x = [0u8; FQ_LEN];
    let mut y = [0u8; FQ_LEN];
    affine
        .x()
        .to_big_endian(&mut x)
        .map_err(|_| ProviderError::other("failed to encode x coordinate"))?;
    affine
        .y()
        .to_big_endian(&mut y)
        .map_err(|_| ProviderError::other("failed to encode y coordinate"))?;
    Ok(G1Point::new(
        BaseField(U256::from_be_bytes(x)),
        BaseField(U256::from_be_bytes(y)),
    ))
}

impl GroupProvider for SubstrateProvider {
    fn ec_add(&self, p1: G1Point, p2: G1Point) -> Result<G1Point, ProviderError> {
        let p1 = read_g1_point(p1)?;
        let p2 = read_g1_point(p2)?;
        encode_g1_point(p1 + p2)
    }

    fn ec_mul(&self, p: G1Point, s: ScalarField) -> Result<G1Point, ProviderError> {
        let p = read_g1_point(p)?;
        encode_g1_point(p * read_scalar(s))
    }

    fn mod_exp(&self, base: U256, exponent: U256, modulus: U256) -> Result<U256, ProviderError> {
        modexp(base, exponent, modulus)
    }

    /// Note: If the input is empty, this function returns true.
    fn pairing_check(&self, pairs: &[(G1Point, G2Point)]) -> Result<bool, ProviderError> {
        if pairs.is_empty() {
            return Ok(true);
        }
        let points = pairs
            .iter()
            .map(|(g1, g2)| Ok((read_g1_point(*g1)?, read_g2_point(*g2)?)))
            .collect::<Result<Vec<_>, ProviderError>>()?;
        Ok(bn::pairing_batch(&points) == Gt::one())
    }
}
