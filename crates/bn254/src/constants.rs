//! Constants for the BN254 curve.
use alloy_primitives::{uint, U256};

/// Base field modulus `P`.
pub const P_MOD: U256 =
    uint!(21888242871839275222246405745257275088696311157297823662689037894645226208583_U256);

/// Scalar field modulus `R`, the order of G1 and G2.
pub const R_MOD: U256 =
    uint!(21888242871839275222246405745257275088548364400416034343698204186575808495617_U256);

/// `(P + 1) / 4`, the square root exponent. Only valid because `P ≡ 3 (mod 4)`.
pub const P_PLUS_ONE_DIV_FOUR: U256 =
    uint!(0x0c19139cb84c680a6e14116da060561765e05aa45a1c72a34f082305b61f3f52_U256);

/// `(P - 1) / 2`. A base field element `y` is "negative" when `y <= (P - 1) / 2`.
pub const P_MINUS_ONE_DIV_TWO: U256 =
    uint!(0x183227397098d014dc2822db40c0ac2ecbc0b548b438e5469e10460b6c3e7ea3_U256);

/// `R - 2`, the Fermat inversion exponent in the scalar field.
pub const R_MINUS_TWO: U256 =
    uint!(0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593efffffff_U256);

/// `b` in the G1 curve equation `y^2 = x^3 + b`.
pub const CURVE_B: U256 = uint!(3_U256);

/// Field element length
pub const FQ_LEN: usize = 32;

/// Scalar field element length
pub const SCALAR_LEN: usize = 32;

/// Quadratic extension field element length (Fq2)
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// Uncompressed G1 point length (x, y coordinates)
pub const G1_LEN: usize = 2 * FQ_LEN;

/// Uncompressed G2 point length (x, y coordinates over Fq2)
pub const G2_LEN: usize = 2 * FQ2_LEN;

/// Compressed G1 point length.
pub const G1_COMPRESSED_LEN: usize = 32;

/// Bit 255 of a compressed point: set when `y` is the larger of the two roots.
pub const Y_POSITIVE_FLAG: U256 =
    uint!(0x8000000000000000000000000000000000000000000000000000000000000000_U256);

/// Bit 254 of a compressed point: set for the point at infinity.
pub const INFINITY_FLAG: U256 =
    uint!(0x4000000000000000000000000000000000000000000000000000000000000000_U256);

/// Low 254 bits of a compressed point, holding `x`.
pub const X_MASK: U256 =
    uint!(0x3fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff_U256);
