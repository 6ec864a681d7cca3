//! Discrete-log commitment in Z_q^* with q = 2p + 1
//!
//! Public parameters are a generator g, the modulus q and h = g^s for a secret
//! exponent s. A commitment to message m under randomness r is
//!
//! ```text
//! (g^m mod q, m · h^r mod q)
//! ```
//!
//! This multiplies the message directly by h^r instead of using g^m·h^r as in a
//! Pedersen commitment, so its hiding and binding properties differ from the
//! textbook construction. Binding of this form rests on the first component:
//! two messages that agree modulo the order of g give the same g^m.

use crate::error::{CommitmentError, Result};
use crate::modular_arithmetic::{is_prime, ModularField};
use crate::scheme::CommitmentScheme;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupParams {
    /// Generator g
    pub generator: u64,
    /// Prime p; the modulus is q = 2p + 1
    pub prime: u64,
    /// Secret exponent s with h = g^s
    pub secret: u64,
}

impl Default for GroupParams {
    fn default() -> Self {
        Self {
            generator: 5,
            prime: 2333,
            secret: 42,
        }
    }
}

impl GroupParams {
    pub fn validate(&self) -> Result<ModularField> {
        let q = self
            .prime
            .checked_mul(2)
            .and_then(|x| x.checked_add(1))
            .ok_or(CommitmentError::InvalidModulus { modulus: u64::MAX })?;
        let field = ModularField::new(q)?;

        // q fits the field, so p < 2^31 and trial division is cheap
        if !is_prime(self.prime) {
            return Err(CommitmentError::config(format!(
                "p = {} is not prime",
                self.prime
            )));
        }

        if self.generator < 2 || self.generator >= q || gcd(self.generator, q) != 1 {
            return Err(CommitmentError::config(format!(
                "generator {} is not a unit in Z_{q} other than 1",
                self.generator
            )));
        }

        if !is_prime(q) {
            warn!(p = self.prime, q, "q = 2p + 1 is not a safe prime");
        }

        Ok(field)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `(g^m, m·h^r)` mod q
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCommitment(pub u64, pub u64);

impl ConstantTimeEq for GroupCommitment {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0) & self.1.ct_eq(&other.1)
    }
}

#[derive(Clone, Debug)]
pub struct DiscreteLogCommitment {
    params: GroupParams,
    field: ModularField,
    h: u64,
}

impl DiscreteLogCommitment {
    pub fn params(&self) -> &GroupParams {
        &self.params
    }

    pub fn generator(&self) -> u64 {
        self.params.generator
    }

    /// Modulus q = 2p + 1
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
}

impl CommitmentScheme for DiscreteLogCommitment {
    type Params = GroupParams;
    type Message = u64;
    type Randomness = u64;
    type Commitment = GroupCommitment;

    /// Deterministic: all parameters are supplied by `params`
    fn setup<R: RngCore + CryptoRng>(params: GroupParams, _rng: &mut R) -> Result<Self> {
        let field = params.validate()?;
        let h = field.pow(params.generator, params.secret);

        debug!(
            g = params.generator,
            q = field.modulus(),
            "discrete-log setup complete"
        );

        Ok(Self { params, field, h })
    }

    fn commit(&self, message: &u64, randomness: &u64) -> Result<GroupCommitment> {
        let pin = self.field.pow(self.params.generator, *message);
        let blinded = self.field.mul(*message, self.field.pow(self.h, *randomness));
        Ok(GroupCommitment(pin, blinded))
    }

    fn sample_randomness<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<u64> {
        Ok(self.random_element(rng))
    }
}
