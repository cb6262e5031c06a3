//! Two-pair pairing product check.
use crate::{provider::provider_result, Bn254, Bn254Error, G1Point, G2Point, GroupOp};

impl Bn254<'_> {
    /// Returns `true` if `e(a1, a2) · e(b1, b2) == 1`.
    ///
    /// To test `e(a1, a2) == e(c1, c2)` pass `b1 = -c1` and `b2 = c2`.
    /// Subgroup membership of the inputs is the caller's responsibility. A
    /// provider that cannot evaluate the pairing yields
    /// [`Bn254Error::GroupOpFailed`], never `false`.
    pub fn pairing_prod2(
        &self,
        a1: G1Point,
        a2: G2Point,
        b1: G1Point,
        b2: G2Point,
    ) -> Result<bool, Bn254Error> {
        provider_result(
            GroupOp::Pairing,
            self.provider().pairing_check(&[(a1, a2), (b1, b2)]),
        )
    }
}
