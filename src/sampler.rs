//! Bounded-norm short vector sampling
//!
//! Draws every coordinate uniformly from [0, β) and then repairs the vector:
//! while its norm exceeds β, a uniformly chosen coordinate is halved (integer
//! division). Each repair step builds a fresh vector rather than mutating the
//! previous one in place.
//!
//! The output distribution is biased toward the bound. It is a correctness-level
//! sampler and must not be treated as uniform over the β-ball.
//!
//! Halving always makes progress, so the loop terminates in theory, but the
//! number of steps grows with the dimension and with log β. The sampler
//! therefore runs under an explicit iteration cap and reports
//! [`CommitmentError::SamplingDidNotConverge`] once the cap is hit.

use crate::error::{CommitmentError, Result};
use crate::lattice::LatticePoint;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Norm used to compare a sampled vector against β
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormKind {
    /// ‖v‖₂ ≤ β, evaluated exactly as Σ vᵢ² ≤ β²
    #[default]
    Euclidean,
    /// maxᵢ vᵢ ≤ β
    Infinity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortVectorSampler {
    bound: u64,
    max_iterations: usize,
    norm: NormKind,
}

impl ShortVectorSampler {
    pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

    /// Creates a Euclidean-norm sampler for bound β
    ///
    /// β = 0 admits no non-zero vector and is rejected here rather than
    /// being discovered by a sampling loop.
    pub fn new(bound: u64) -> Result<Self> {
        if bound == 0 {
            return Err(CommitmentError::config("norm bound β must be positive"));
        }
        Ok(Self {
            bound,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            norm: NormKind::Euclidean,
        })
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(CommitmentError::config(
                "sampler iteration cap must be positive",
            ));
        }
        self.max_iterations = max_iterations;
        Ok(self)
    }

    pub fn with_norm(mut self, norm: NormKind) -> Self {
        self.norm = norm;
        self
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn norm(&self) -> NormKind {
        self.norm
    }

    /// Whether `v` satisfies the configured norm bound
    pub fn satisfies_bound(&self, v: &LatticePoint) -> bool {
        match self.norm {
            NormKind::Euclidean => {
                let bound = self.bound as u128;
                v.norm_squared() <= bound * bound
            }
            NormKind::Infinity => v.infinity_norm() <= self.bound,
        }
    }

    /// Sample a vector of exactly `len` coordinates within the bound
    ///
    /// # Error Conditions
    /// - [`CommitmentError::SamplingDidNotConverge`] if the repair loop needs
    ///   more than `max_iterations` halving steps
    pub fn sample<R: RngCore + CryptoRng>(&self, len: usize, rng: &mut R) -> Result<LatticePoint> {
        let mut point =
            LatticePoint::new((0..len).map(|_| rng.gen_range(0..self.bound)).collect());

        let mut iterations = 0usize;
        while !self.satisfies_bound(&point) {
            if iterations == self.max_iterations {
                warn!(
                    len,
                    bound = self.bound,
                    iterations,
                    "short vector sampling hit iteration cap"
                );
                return Err(CommitmentError::SamplingDidNotConverge {
                    iterations,
                    bound: self.bound,
                });
            }

            // An empty vector always satisfies the bound, so len > 0 here
            let index = rng.gen_range(0..len);
            trace!(index, value = point.coordinates[index], "halving coordinate");
            point = halve_coordinate(&point, index);
            iterations += 1;
        }

        debug!(len, bound = self.bound, iterations, norm = ?self.norm, "sampled short vector");
        Ok(point)
    }
}

/// Copy of `point` with coordinate `index` halved
fn halve_coordinate(point: &LatticePoint, index: usize) -> LatticePoint {
    point
        .coordinates
        .iter()
        .enumerate()
        .map(|(i, &x)| if i == index { x / 2 } else { x })
        .collect::<Vec<_>>()
        .into()
}
