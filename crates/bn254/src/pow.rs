//! Square-and-multiply modular exponentiation.
use alloy_primitives::U256;

/// Computes `base^exponent mod modulus` by right-to-left square-and-multiply.
///
/// `exponent = 0` yields `1` for every base, including `0`. The result is only
/// reduced by the multiplications it performs, so `modulus` must be greater
/// than one.
///
/// Large exponents such as the inversion and square-root exponents go through
/// [`GroupProvider::mod_exp`](crate::GroupProvider::mod_exp) instead.
pub fn pow_small(base: U256, exponent: U256, modulus: U256) -> U256 {
    let mut result = U256::from(1);
    let mut input = base;
    for i in 0..exponent.bit_len() {
        if exponent.bit(i) {
            result = result.mul_mod(input, modulus);
        }
        input = input.mul_mod(input, modulus);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{P_MOD, R_MOD};
    use rstest::rstest;

    #[rstest]
    #[case::zero_exponent(7, 0, 11, 1)]
    #[case::zero_pow_zero(0, 0, 11, 1)]
    #[case::zero_base(0, 5, 11, 0)]
    #[case::small(3, 4, 11, 4)]
    #[case::fermat(5, 10, 11, 1)]
    #[case::base_over_modulus(13, 2, 11, 4)]
    fn small_cases(
        #[case] base: u64,
        #[case] exponent: u64,
        #[case] modulus: u64,
        #[case] expected: u64,
    ) {
        let res = pow_small(U256::from(base), U256::from(exponent), U256::from(modulus));
        assert_eq!(res, U256::from(expected));
    }

    #[test]
    fn matches_pow_mod_for_large_exponents() {
        let base = U256::from(0x1234_5678_9abc_def0u64);
        for modulus in [P_MOD, R_MOD] {
            let exponent = modulus - U256::from(2);
            assert_eq!(
                pow_small(base, exponent, modulus),
                base.pow_mod(exponent, modulus)
            );
        }
    }
}
