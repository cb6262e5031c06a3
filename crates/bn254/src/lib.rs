//! # revm-bn254
//!
//! Arithmetic over the BN254 pairing-friendly curve: base and scalar field
//! elements, G1/G2 points, point validation, compressed G1 encoding, multi
//! scalar multiplication and the two-pair pairing product check.
//!
//! Curve additions, scalar multiplications, large-exponent modular
//! exponentiation and pairings are delegated to a [`GroupProvider`]. The
//! operations that need one are methods on the [`Bn254`] handle:
//!
//! ```
//! use revm_bn254::{Bn254, ScalarField, P1, P2};
//!
//! let bn = Bn254::default();
//! let p = bn.scalar_mul(P1, ScalarField::from(5)).unwrap();
//! assert_eq!(bn.deserialize(p.serialize()).unwrap(), p);
//! assert!(bn.pairing_prod2(P1, P2, P1.negate(), P2).unwrap());
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod constants;
pub mod convert;
pub mod error;
pub mod field;
pub mod g1;
pub mod g2;
pub mod msm;
pub mod pairing;
pub mod pow;
pub mod provider;
pub mod serialize;

pub use alloy_primitives::{B256, U256};
pub use error::{Bn254Error, GroupOp, ProviderError};
pub use field::{BaseField, ScalarField};
pub use g1::{G1Point, P1};
pub use g2::{G2Point, P2};
pub use pow::pow_small;
pub use provider::{
    get_provider, install_provider, ArkworksProvider, Bn254, DefaultProvider, GroupProvider,
};
#[cfg(feature = "bn")]
pub use provider::SubstrateProvider;
