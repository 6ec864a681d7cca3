//! Opening checks against a configured scheme
//!
//! [`Verifier`] is the binding-enforcement point: it takes a published
//! commitment and a disclosed [`Opening`] and recomputes. Public parameters are
//! read-only after setup, so many openings can be checked in parallel against
//! the same scheme without locking.

use crate::error::Result;
use crate::lattice::{LatticeCommitment, LatticePoint};
use crate::scheme::{CommitmentScheme, LinearCommitmentScheme, Opening};
use rand::{CryptoRng, Rng, RngCore};
use rayon::prelude::*;
use tracing::debug;

pub struct Verifier<'a, S: CommitmentScheme> {
    scheme: &'a S,
}

impl<'a, S: CommitmentScheme> Verifier<'a, S> {
    pub fn new(scheme: &'a S) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &S {
        self.scheme
    }

    pub fn verify(
        &self,
        commitment: &S::Commitment,
        opening: &Opening<S::Message, S::Randomness>,
    ) -> Result<bool> {
        self.scheme
            .verify(commitment, &opening.message, &opening.randomness)
    }

    /// Check every (commitment, opening) pair in parallel
    pub fn verify_all(
        &self,
        items: &[(S::Commitment, Opening<S::Message, S::Randomness>)],
    ) -> Result<Vec<bool>>
    where
        S: Sync,
        S::Commitment: Sync,
        S::Message: Sync,
        S::Randomness: Sync,
    {
        items
            .par_iter()
            .map(|(commitment, opening)| self.verify(commitment, opening))
            .collect()
    }
}

impl<'a, S: LinearCommitmentScheme> Verifier<'a, S> {
    /// Check many openings with a single commit
    ///
    /// Draws non-zero weights wᵢ and checks Σ wᵢ·Cᵢ against the commitment to
    /// (Σ wᵢ·mᵢ, Σ wᵢ·rᵢ). For a prime modulus a single bad opening makes the
    /// combination fail. An empty batch is accepted.
    pub fn batch_verify<R: RngCore + CryptoRng>(
        &self,
        items: &[(LatticeCommitment, Opening<LatticePoint, LatticePoint>)],
        rng: &mut R,
    ) -> Result<bool> {
        let field = *self.scheme.field();
        let Some(((first_c, first_o), rest)) = items.split_first() else {
            return Ok(true);
        };

        let w = rng.gen_range(1..field.modulus());
        let mut commitment = first_c.scale(w, &field);
        let mut message = first_o.message.scale_mod(w, &field);
        let mut randomness = first_o.randomness.scale_mod(w, &field);

        for (c, opening) in rest {
            let w = rng.gen_range(1..field.modulus());
            commitment = commitment.add(&c.scale(w, &field), &field)?;
            message = message.add_mod(&opening.message.scale_mod(w, &field), &field)?;
            randomness = randomness.add_mod(&opening.randomness.scale_mod(w, &field), &field)?;
        }

        debug!(batch = items.len(), "batch verifying openings");
        self.scheme.verify(&commitment, &message, &randomness)
    }
}
