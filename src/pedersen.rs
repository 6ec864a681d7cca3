//! Pedersen commitment in Z_q^* with q = 2p + 1
//!
//! Shares [`GroupParams`] with the discrete-log scheme: generator g, prime p and
//! secret exponent s with h = g^s. A commitment to message m under randomness r
//! is the single group element
//!
//! ```text
//! g^m · h^r mod q
//! ```
//!
//! Commitments are additively homomorphic in the exponents:
//! `C(m1, r1) · C(m2, r2) = C(m1 + m2, r1 + r2)`.

use crate::error::Result;
use crate::group::GroupParams;
use crate::modular_arithmetic::ModularField;
use crate::scheme::CommitmentScheme;
use rand::{CryptoRng, Rng, RngCore};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct PedersenCommitment {
    params: GroupParams,
    field: ModularField,
    h: u64,
}

impl PedersenCommitment {
    pub fn params(&self) -> &GroupParams {
        &self.params
    }

    pub fn modulus(&self) -> u64 {
        self.field.modulus()
    }

    /// Public key h = g^s mod q
    pub fn public_key(&self) -> u64 {
        self.h
    }

    /// Uniform element of [0, q)
    pub fn random_element<R: RngCore + CryptoRng>(&self, rng: &mut R) -> u64 {
        rng.gen_range(0..self.field.modulus())
    }

    /// Commitment to the sum of the committed messages and randomness
    pub fn combine(&self, a: u64, b: u64) -> u64 {
        self.field.mul(a, b)
    }
}

impl CommitmentScheme for PedersenCommitment {
    type Params = GroupParams;
    type Message = u64;
    type Randomness = u64;
    type Commitment = u64;

    fn setup<R: RngCore + CryptoRng>(params: GroupParams, _rng: &mut R) -> Result<Self> {
        let field = params.validate()?;
        let h = field.pow(params.generator, params.secret);

        debug!(
            g = params.generator,
            q = field.modulus(),
            "pedersen setup complete"
        );

        Ok(Self { params, field, h })
    }

    fn commit(&self, message: &u64, randomness: &u64) -> Result<u64> {
        let gm = self.field.pow(self.params.generator, *message);
        let hr = self.field.pow(self.h, *randomness);
        Ok(self.field.mul(gm, hr))
    }

    fn sample_randomness<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<u64> {
        Ok(self.random_element(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommitmentError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn scheme() -> PedersenCommitment {
        PedersenCommitment::setup(GroupParams::default(), &mut ChaCha20Rng::seed_from_u64(0))
            .unwrap()
    }

    #[test]
    fn test_known_commitment() {
        let scheme = scheme();
        assert_eq!(scheme.public_key(), 3561);

        // 5^17 · 3561^9 mod 4667
        let c = scheme.commit(&17, &9).unwrap();
        assert_eq!(c, 2686);
        assert!(scheme.verify(&c, &17, &9).unwrap());
        assert!(!scheme.verify(&c, &18, &9).unwrap());
        assert_eq!(scheme.commit(&18, &9).unwrap(), 4096);
    }

    #[test]
    fn test_correctness_and_binding() {
        let scheme = scheme();
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        for _ in 0..200 {
            let message = scheme.random_element(&mut rng);
            let (commitment, opening) = scheme.commit_random(message, &mut rng).unwrap();
            assert!(scheme
                .verify(&commitment, &opening.message, &opening.randomness)
                .unwrap());

            let bogus = (message + 1) % scheme.modulus();
            assert!(!scheme
                .verify(&commitment, &bogus, &opening.randomness)
                .unwrap());
        }
    }

    #[test]
    fn test_homomorphism() {
        let scheme = scheme();
        let c1 = scheme.commit(&17, &9).unwrap();
        let c2 = scheme.commit(&100, &250).unwrap();

        assert_eq!(scheme.combine(c1, c2), scheme.commit(&117, &259).unwrap());
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let composite = GroupParams {
            prime: 2332,
            ..GroupParams::default()
        };
        assert!(matches!(
            PedersenCommitment::setup(composite, &mut rng),
            Err(CommitmentError::InvalidConfiguration(_))
        ));
    }
}
