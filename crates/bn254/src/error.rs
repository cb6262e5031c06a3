//! Error types returned by the BN254 kernel and its group providers.
use core::fmt;
use std::string::String;

/// Provider-backed operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupOp {
    /// G1 point addition.
    EcAdd,
    /// G1 scalar multiplication.
    EcMul,
    /// Large-exponent modular exponentiation.
    ModExp,
    /// Pairing product check.
    Pairing,
}

impl fmt::Display for GroupOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EcAdd => "ecAdd",
            Self::EcMul => "ecMul",
            Self::ModExp => "modExp",
            Self::Pairing => "pairing",
        };
        f.write_str(s)
    }
}

/// BN254 kernel error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bn254Error {
    /// G1 point is not canonical or does not satisfy the curve equation.
    InvalidG1,
    /// Scalar is not less than `R`.
    InvalidScalar,
    /// Malformed arguments: MSM length mismatch, empty MSM input or a
    /// non-canonical compressed `x`.
    InvalidArgs(&'static str),
    /// Inverse of zero was requested.
    InversionOfZero,
    /// The group provider failed to evaluate the operation.
    GroupOpFailed(GroupOp),
}

impl Bn254Error {
    /// Returns `true` if the error originates from the group provider.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::GroupOpFailed(_))
    }
}

impl core::error::Error for Bn254Error {}

impl fmt::Display for Bn254Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidG1 => f.write_str("invalid bn254 G1 point"),
            Self::InvalidScalar => f.write_str("scalar is not a member of the bn254 scalar field"),
            Self::InvalidArgs(reason) => write!(f, "invalid arguments: {reason}"),
            Self::InversionOfZero => f.write_str("cannot compute the inverse of zero"),
            Self::GroupOpFailed(op) => write!(f, "bn254 {op} failed"),
        }
    }
}

/// Error reported by a [`GroupProvider`](crate::GroupProvider).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProviderError {
    /// Coordinate is not a member of the base field.
    FieldPointNotAMember,
    /// Coordinates do not describe a point of the expected group.
    AffineGFailedToCreate,
    /// Modular exponentiation with a zero modulus.
    ZeroModulus,
    /// Catch-all variant for other errors
    Other(String),
}

impl ProviderError {
    /// Returns another error with the given message.
    pub fn other(err: impl Into<String>) -> Self {
        Self::Other(err.into())
    }
}

impl core::error::Error for ProviderError {}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FieldPointNotAMember => "field point not a member of bn254 curve",
            Self::AffineGFailedToCreate => "failed to create affine g point for bn254 curve",
            Self::ZeroModulus => "modexp modulus is zero",
            Self::Other(s) => s,
        };
        f.write_str(s)
    }
}
