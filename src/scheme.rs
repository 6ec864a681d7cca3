//! Common setup / commit / verify contract
//!
//! A scheme instance is created once by [`CommitmentScheme::setup`], which fixes
//! its public parameters. From then on it is read-only: any number of commit and
//! verify calls may run against it, concurrently if desired.
//!
//! Opening is reveal-based. Verification recomputes the commitment from the
//! disclosed message and randomness and compares. No proof of knowledge is
//! produced.

use crate::error::Result;
use crate::lattice::{LatticeCommitment, LatticePoint};
use crate::modular_arithmetic::ModularField;
use rand::{CryptoRng, RngCore};
use std::fmt::{self, Debug};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

pub trait CommitmentScheme: Sized {
    /// Configuration consumed by `setup`
    type Params;
    type Message: Zeroize;
    type Randomness: Zeroize;
    type Commitment: Clone + Debug + PartialEq + ConstantTimeEq;

    /// Validate `params` and generate the public parameters
    fn setup<R: RngCore + CryptoRng>(params: Self::Params, rng: &mut R) -> Result<Self>;

    /// Compute the commitment to `message` under `randomness`
    ///
    /// Dimensions are checked before any arithmetic. Norm bounds are not
    /// re-validated; callers obtain short randomness from
    /// [`CommitmentScheme::sample_randomness`].
    fn commit(
        &self,
        message: &Self::Message,
        randomness: &Self::Randomness,
    ) -> Result<Self::Commitment>;

    /// Draw fresh randomness suitable for this scheme
    fn sample_randomness<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Self::Randomness>;

    /// Recompute the commitment and compare in constant time
    ///
    /// A mismatch is `Ok(false)`; only malformed inputs are errors.
    fn verify(
        &self,
        commitment: &Self::Commitment,
        message: &Self::Message,
        randomness: &Self::Randomness,
    ) -> Result<bool> {
        let recomputed = self.commit(message, randomness)?;
        Ok(bool::from(recomputed.ct_eq(commitment)))
    }

    /// Commit with freshly sampled randomness, returning the opening
    fn commit_random<R: RngCore + CryptoRng>(
        &self,
        message: Self::Message,
        rng: &mut R,
    ) -> Result<(Self::Commitment, Opening<Self::Message, Self::Randomness>)> {
        let randomness = self.sample_randomness(rng)?;
        let commitment = self.commit(&message, &randomness)?;
        Ok((commitment, Opening::new(message, randomness)))
    }
}

/// Schemes whose commitment is linear in (message, randomness) over Z_Q
pub trait LinearCommitmentScheme:
    CommitmentScheme<
    Message = LatticePoint,
    Randomness = LatticePoint,
    Commitment = LatticeCommitment,
>
{
    fn field(&self) -> &ModularField;
}

/// Disclosed opening of a commitment. Wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Opening<M: Zeroize, R: Zeroize> {
    pub message: M,
    pub randomness: R,
}

impl<M: Zeroize, R: Zeroize> Opening<M, R> {
    pub fn new(message: M, randomness: R) -> Self {
        Self {
            message,
            randomness,
        }
    }
}

impl<M: Zeroize, R: Zeroize> Debug for Opening<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opening { .. }")
    }
}

impl<M: Zeroize, R: Zeroize> Zeroize for Opening<M, R> {
    fn zeroize(&mut self) {
        self.message.zeroize();
        self.randomness.zeroize();
    }
}

impl<M: Zeroize, R: Zeroize> Drop for Opening<M, R> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
