//! Arkworks backend for the group provider.
use super::{modexp, GroupProvider};
use crate::{convert::read_scalar, G1Point, G2Point, ProviderError, ScalarField};
use alloy_primitives::U256;
use ark_bn254::{G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{One, PrimeField};
use std::vec::Vec;

/// In-process provider backed by `ark-bn254`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArkworksProvider;

impl GroupProvider for ArkworksProvider {
    fn ec_add(&self, p1: G1Point, p2: G1Point) -> Result<G1Point, ProviderError> {
        let p1: G1Projective = G1Affine::try_from(p1)?.into();
        let p2 = G1Affine::try_from(p2)?;
        Ok((p1 + p2).into_affine().into())
    }

    fn ec_mul(&self, p: G1Point, s: ScalarField) -> Result<G1Point, ProviderError> {
        let p = G1Affine::try_from(p)?;
        let big_int = read_scalar(s).into_bigint();
        Ok(p.mul_bigint(big_int).into_affine().into())
    }

    fn mod_exp(&self, base: U256, exponent: U256, modulus: U256) -> Result<U256, ProviderError> {
        modexp(base, exponent, modulus)
    }

    /// Note: If the input is empty, this function returns true.
    fn pairing_check(&self, pairs: &[(G1Point, G2Point)]) -> Result<bool, ProviderError> {
        if pairs.is_empty() {
            return Ok(true);
        }

        let mut g1_points = Vec::with_capacity(pairs.len());
        let mut g2_points = Vec::with_capacity(pairs.len());
        for (g1, g2) in pairs {
            g1_points.push(G1Affine::try_from(*g1)?);
            g2_points.push(G2Affine::try_from(*g2)?);
        }

        let pairing_result = ark_bn254::Bn254::multi_pairing(&g1_points, &g2_points);
        Ok(pairing_result.0.is_one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseField, P1, P2};
    use alloy_primitives::uint;

    fn point(x: U256, y: U256) -> G1Point {
        G1Point::new(BaseField(x), BaseField(y))
    }

    #[test]
    fn add_known_answer() {
        let p1 = point(
            uint!(0x18b18acfb4c2c30276db5411368e7185b311dd124691610c5d3b74034e093dc9_U256),
            uint!(0x063c909c4720840cb5134cb9f59fa749755796819658d32efc0d288198f37266_U256),
        );
        let p2 = point(
            uint!(0x07c2b7f58a84bd6145f00c9c2bc0bb1a187f20ff2c92963a88019e7c6a014eed_U256),
            uint!(0x06614e20c147e940f2d70da3f74c9a17df361706a4485c742bd6788478fa17d7_U256),
        );
        let expected = point(
            uint!(0x2243525c5efd4b9c3d3c45ac0ca3fe4dd85e830a4ce6b65fa1eeaee202839703_U256),
            uint!(0x301d1d33be6da8e509df21cc35964723180eed7532537db9ae5e7d48f195c915_U256),
        );
        assert_eq!(ArkworksProvider.ec_add(p1, p2), Ok(expected));
    }

    #[test]
    fn add_infinity() {
        let res = ArkworksProvider.ec_add(G1Point::infinity(), G1Point::infinity());
        assert_eq!(res, Ok(G1Point::infinity()));
    }

    #[test]
    fn mul_known_answer() {
        let p = point(
            uint!(0x2bd3e6d0f3b142924f5ca7b49ce5b9d54c4703d7ae5648e61d02268b1a0a9fb7_U256),
            uint!(0x21611ce0a6af85915e2f1d70300909ce2e49dfad4a4619c8390cae66cefdb204_U256),
        );
        let s = ScalarField(uint!(0x11138ce750fa15c2_U256));
        let expected = point(
            uint!(0x070a8d6a982153cae4be29d434e8faef8a47b274a053f5a4ee2a6c9c13c31e5c_U256),
            uint!(0x031b8ce914eba3a9ffb989f9cdd5b0f01943074bf4f0f315690ec3cec6981afc_U256),
        );
        assert_eq!(ArkworksProvider.ec_mul(p, s), Ok(expected));
    }

    #[test]
    fn rejects_point_not_on_curve() {
        let p = point(
            uint!(0x1111111111111111111111111111111111111111111111111111111111111111_U256),
            uint!(0x1111111111111111111111111111111111111111111111111111111111111111_U256),
        );
        assert_eq!(
            ArkworksProvider.ec_add(p, p),
            Err(ProviderError::AffineGFailedToCreate)
        );
        assert_eq!(
            ArkworksProvider.ec_mul(p, ScalarField::ONE),
            Err(ProviderError::AffineGFailedToCreate)
        );
    }

    #[test]
    fn pairing_known_answer() {
        let a1 = point(
            uint!(0x1c76476f4def4bb94541d57ebba1193381ffa7aa76ada664dd31c16024c43f59_U256),
            uint!(0x3034dd2920f673e204fee2811c678745fc819b55d3e9d294e45c9b03a76aef41_U256),
        );
        let a2 = G2Point::new(
            BaseField(uint!(0x04bf11ca01483bfa8b34b43561848d28905960114c8ac04049af4b6315a41678_U256)),
            BaseField(uint!(0x209dd15ebff5d46c4bd888e51a93cf99a7329636c63514396b4a452003a35bf7_U256)),
            BaseField(uint!(0x120a2a4cf30c1bf9845f20c6fe39e07ea2cce61f0c9bb048165fe5e4de877550_U256)),
            BaseField(uint!(0x2bb8324af6cfc93537a2ad1a445cfd0ca2a71acd7ac41fadbf933c2a51be344d_U256)),
        );
        let b1 = point(
            uint!(0x111e129f1cf1097710d41c4ac70fcdfa5ba2023c6ff1cbeac322de49d1b6df7c_U256),
            uint!(0x2032c61a830e3c17286de9462bf242fca2883585b93870a73853face6a6bf411_U256),
        );
        assert_eq!(ArkworksProvider.pairing_check(&[(a1, a2), (b1, P2)]), Ok(true));
        assert_eq!(ArkworksProvider.pairing_check(&[(a1, a2), (P1, P2)]), Ok(false));
    }

    #[test]
    fn pairing_empty_is_true() {
        assert_eq!(ArkworksProvider.pairing_check(&[]), Ok(true));
    }
}
