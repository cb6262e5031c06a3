//! Multi-scalar multiplication over G1.
use crate::{Bn254, Bn254Error, G1Point, ScalarField};

impl Bn254<'_> {
    /// Computes `Σ scalars[i] · bases[i]`.
    ///
    /// Accumulates left to right through the provider:
    /// `r = s0·b0`, then `r = r + si·bi` for every following pair.
    pub fn multi_scalar_mul(
        &self,
        bases: &[G1Point],
        scalars: &[ScalarField],
    ) -> Result<G1Point, Bn254Error> {
        if bases.len() != scalars.len() {
            return Err(Bn254Error::InvalidArgs("msm length does not match"));
        }
        let mut pairs = bases.iter().zip(scalars);
        let Some((base, scalar)) = pairs.next() else {
            return Err(Bn254Error::InvalidArgs("msm input is empty"));
        };

        let mut acc = self.scalar_mul(*base, *scalar)?;
        for (base, scalar) in pairs {
            acc = self.add(acc, self.scalar_mul(*base, *scalar)?)?;
        }
        Ok(acc)
    }
}
