//! Base field and scalar field elements.
//!
//! Both fields wrap a raw [`U256`]. The wrapped integer is not required to be
//! canonical: every arithmetic operation reduces modulo the field's own
//! modulus, and canonical range checks happen where the value enters a point
//! ([`G1Point::validate`](crate::G1Point::validate)) or through
//! [`ScalarField::validate`]. The two types never mix implicitly.
use crate::{
    constants::{P_MOD, R_MINUS_TWO, R_MOD},
    pow::pow_small,
    provider::provider_result,
    Bn254, Bn254Error, GroupOp,
};
use alloy_primitives::U256;
use ark_ff::PrimeField;
use core::{
    fmt,
    ops::{Add, Mul, Neg},
};

macro_rules! prime_field {
    ($(#[$attr:meta])* $name:ident, $modulus:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub U256);

        impl $name {
            /// Field modulus.
            pub const MODULUS: U256 = $modulus;

            /// Additive identity.
            pub const ZERO: Self = Self(U256::ZERO);

            /// Multiplicative identity.
            pub const ONE: Self = Self(U256::from_limbs([1, 0, 0, 0]));

            /// Wraps a raw integer without reducing it.
            #[inline]
            pub const fn new(value: U256) -> Self {
                Self(value)
            }

            /// Returns the wrapped integer.
            #[inline]
            pub const fn into_inner(self) -> U256 {
                self.0
            }

            /// Returns `true` if the wrapped integer is less than the modulus.
            #[inline]
            pub fn is_canonical(&self) -> bool {
                self.0 < Self::MODULUS
            }

            /// Returns `true` if the element is congruent to zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.0.reduce_mod(Self::MODULUS).is_zero()
            }

            /// Returns `modulus - self mod modulus`. Zero negates to zero.
            #[inline]
            pub fn negate(self) -> Self {
                let reduced = self.0.reduce_mod(Self::MODULUS);
                if reduced.is_zero() {
                    Self::ZERO
                } else {
                    Self(Self::MODULUS - reduced)
                }
            }

            /// Raises the element to `exponent` with [`pow_small`].
            #[inline]
            pub fn pow(self, exponent: U256) -> Self {
                Self(pow_small(self.0, exponent, Self::MODULUS))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(U256::from(value))
            }
        }

        impl From<U256> for $name {
            fn from(value: U256) -> Self {
                Self(value)
            }
        }

        impl From<$name> for U256 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0.add_mod(rhs.0, Self::MODULUS))
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self(self.0.mul_mod(rhs.0, Self::MODULUS))
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self.negate()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

prime_field!(
    /// Element of the BN254 base field, modulo [`P_MOD`].
    ///
    /// Holds G1 coordinates and the Fp2 coefficients of G2 coordinates.
    BaseField,
    P_MOD
);

prime_field!(
    /// Element of the BN254 scalar field, modulo [`R_MOD`].
    ScalarField,
    R_MOD
);

impl ScalarField {
    /// Checks that the scalar is canonical, i.e. less than `R`.
    pub fn validate(&self) -> Result<(), Bn254Error> {
        if !self.is_canonical() {
            return Err(Bn254Error::InvalidScalar);
        }
        Ok(())
    }

    /// Interprets `bytes` as a little-endian integer of any length and
    /// reduces it modulo `R`.
    pub fn from_le_bytes_mod_order(bytes: &[u8]) -> Self {
        ark_bn254::Fr::from_le_bytes_mod_order(bytes).into()
    }
}

impl Bn254<'_> {
    /// Computes `s^(R-2) mod R` through the provider's modular exponentiation.
    ///
    /// Any `s` congruent to zero is rejected with
    /// [`Bn254Error::InversionOfZero`].
    pub fn invert(&self, s: ScalarField) -> Result<ScalarField, Bn254Error> {
        if s.is_zero() {
            return Err(Bn254Error::InversionOfZero);
        }
        let inv = provider_result(
            GroupOp::ModExp,
            self.provider().mod_exp(s.0, R_MINUS_TWO, R_MOD),
        )?;
        Ok(ScalarField(inv))
    }
}
