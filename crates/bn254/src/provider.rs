//! Group primitive provider interface.
//!
//! The kernel never evaluates curve additions, scalar multiplications,
//! large-exponent modular exponentiation or pairings itself. It hands them to
//! a [`GroupProvider`] and only validates what goes in and comes out.

use crate::{Bn254Error, G1Point, G2Point, GroupOp, ProviderError, ScalarField};
use alloy_primitives::U256;
use core::fmt::Debug;
use once_cell::race::OnceBox;
use std::boxed::Box;

pub mod arkworks;
pub use arkworks::ArkworksProvider;

#[cfg(feature = "bn")]
pub mod substrate;
#[cfg(feature = "bn")]
pub use substrate::SubstrateProvider;

cfg_if::cfg_if! {
    if #[cfg(feature = "bn")] {
        /// Provider used when none is installed.
        pub type DefaultProvider = SubstrateProvider;
    } else {
        /// Provider used when none is installed.
        pub type DefaultProvider = ArkworksProvider;
    }
}

/// Elliptic curve and pairing primitives over BN254.
///
/// Implementations must fail only on malformed or out-of-subgroup input or
/// resource exhaustion, never silently return a wrong result.
pub trait GroupProvider: Send + Sync + Debug {
    /// G1 point addition.
    ///
    /// The point at infinity is passed and returned as `(0, 0)`.
    fn ec_add(&self, p1: G1Point, p2: G1Point) -> Result<G1Point, ProviderError>;

    /// G1 scalar multiplication.
    ///
    /// The scalar does not need to be canonical: `ec_mul(p, s)` and
    /// `ec_mul(p, s mod R)` must agree.
    fn ec_mul(&self, p: G1Point, s: ScalarField) -> Result<G1Point, ProviderError>;

    /// Modular exponentiation `base^exponent mod modulus`.
    fn mod_exp(&self, base: U256, exponent: U256, modulus: U256) -> Result<U256, ProviderError>;

    /// Returns `true` if `Π e(g1_i, g2_i) == 1`.
    fn pairing_check(&self, pairs: &[(G1Point, G2Point)]) -> Result<bool, ProviderError>;
}

/// Modular exponentiation shared by the in-process providers.
pub fn modexp(base: U256, exponent: U256, modulus: U256) -> Result<U256, ProviderError> {
    if modulus.is_zero() {
        return Err(ProviderError::ZeroModulus);
    }
    let output = aurora_engine_modexp::modexp(
        &base.to_be_bytes::<32>(),
        &exponent.to_be_bytes::<32>(),
        &modulus.to_be_bytes::<32>(),
    );
    U256::try_from_be_slice(&output)
        .ok_or_else(|| ProviderError::other("modexp output does not fit in 256 bits"))
}

/// Maps a provider failure into [`Bn254Error::GroupOpFailed`].
#[inline]
pub(crate) fn provider_result<T>(
    op: GroupOp,
    result: Result<T, ProviderError>,
) -> Result<T, Bn254Error> {
    result.map_err(|err| {
        tracing::debug!(%op, %err, "group provider call failed");
        Bn254Error::GroupOpFailed(op)
    })
}

/// Handle to the BN254 kernel operations that need a [`GroupProvider`].
///
/// Cheap to copy. [`Bn254::default`] uses the globally installed provider.
#[derive(Clone, Copy, Debug)]
pub struct Bn254<'a> {
    provider: &'a dyn GroupProvider,
}

impl<'a> Bn254<'a> {
    /// Creates a handle over the given provider.
    pub const fn new(provider: &'a dyn GroupProvider) -> Self {
        Self { provider }
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &'a dyn GroupProvider {
        self.provider
    }
}

impl Default for Bn254<'static> {
    fn default() -> Self {
        Self::new(get_provider())
    }
}

/// Global group provider instance
static PROVIDER: OnceBox<Box<dyn GroupProvider>> = OnceBox::new();

/// Install a custom group provider globally.
///
/// Returns `true` if the provider was installed, `false` if a provider was
/// already installed or the default was already initialized.
pub fn install_provider<P: GroupProvider + 'static>(provider: P) -> bool {
    let installed = PROVIDER.set(Box::new(Box::new(provider))).is_ok();
    if !installed {
        tracing::debug!("group provider already installed");
    }
    installed
}

/// Get the installed group provider, or the default if none is installed.
pub fn get_provider() -> &'static dyn GroupProvider {
    PROVIDER
        .get_or_init(|| Box::new(Box::new(DefaultProvider::default())))
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::P_MOD, P1, P2};

    #[derive(Debug)]
    struct FailingProvider;

    impl GroupProvider for FailingProvider {
        fn ec_add(&self, _p1: G1Point, _p2: G1Point) -> Result<G1Point, ProviderError> {
            Err(ProviderError::other("add unavailable"))
        }

        fn ec_mul(&self, _p: G1Point, _s: ScalarField) -> Result<G1Point, ProviderError> {
            Err(ProviderError::other("mul unavailable"))
        }

        fn mod_exp(&self, _b: U256, _e: U256, _m: U256) -> Result<U256, ProviderError> {
            Err(ProviderError::other("modexp unavailable"))
        }

        fn pairing_check(&self, _pairs: &[(G1Point, G2Point)]) -> Result<bool, ProviderError> {
            Err(ProviderError::other("pairing unavailable"))
        }
    }

    #[test]
    fn modexp_matches_pow_mod() {
        let base = U256::from(0xdead_beefu64);
        let exponent = P_MOD - U256::from(2);
        assert_eq!(
            modexp(base, exponent, P_MOD).unwrap(),
            base.pow_mod(exponent, P_MOD)
        );
        assert_eq!(modexp(U256::from(5), U256::ZERO, P_MOD).unwrap(), U256::from(1));
    }

    #[test]
    fn modexp_zero_modulus() {
        assert_eq!(
            modexp(U256::from(2), U256::from(3), U256::ZERO),
            Err(ProviderError::ZeroModulus)
        );
    }

    #[test]
    fn failures_map_to_group_op_failed() {
        let bn = Bn254::new(&FailingProvider);
        assert_eq!(bn.add(P1, P1), Err(Bn254Error::GroupOpFailed(GroupOp::EcAdd)));
        assert_eq!(
            bn.scalar_mul(P1, ScalarField::ONE),
            Err(Bn254Error::GroupOpFailed(GroupOp::EcMul))
        );
        assert_eq!(
            bn.invert(ScalarField::ONE),
            Err(Bn254Error::GroupOpFailed(GroupOp::ModExp))
        );
        assert_eq!(
            bn.pairing_prod2(P1, P2, P1.negate(), P2),
            Err(Bn254Error::GroupOpFailed(GroupOp::Pairing))
        );
    }

    #[test]
    fn default_provider_is_usable() {
        let bn = Bn254::default();
        assert_eq!(bn.add(G1Point::infinity(), P1), Ok(P1));
    }
}
