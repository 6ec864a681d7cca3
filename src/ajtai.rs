//! Ajtai/SIS-style commitment with two uniform public matrices
//!
//! Public parameters are A₁ ∈ Z_Q^{κ×m} and A₂ ∈ Z_Q^{κ×ρ}, where κ is the
//! commitment dimension, m the message dimension and ρ the randomness dimension.
//!
//! Two evaluation modes are provided:
//!
//! - [`AjtaiMode::Entrywise`] (default): the message and randomness are broadcast
//!   over the κ rows and multiplied entrywise,
//!   `C[i][j] = A₁[i][j]·m[j] + A₂[i][j]·r[j] mod Q`. The commitment is κ × m and
//!   the randomness must have the same width as the message.
//! - [`AjtaiMode::MatrixVector`]: the textbook SIS commitment `C = A₁·m + A₂·r`,
//!   a κ × 1 commitment with independent message and randomness widths.
//!
//! Binding in matrix-vector mode reduces to SIS on [A₁ | A₂] for short openings.
//! Entrywise mode does not compress each coordinate and should be treated as a
//! modelling simplification.

use crate::error::{CommitmentError, Result};
use crate::lattice::{LatticeCommitment, LatticeMatrix, LatticePoint};
use crate::matrix_generator::MatrixGenerator;
use crate::modular_arithmetic::ModularField;
use crate::sampler::{NormKind, ShortVectorSampler};
use crate::scheme::{CommitmentScheme, LinearCommitmentScheme};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AjtaiMode {
    #[default]
    Entrywise,
    MatrixVector,
}

/// Configuration of an Ajtai commitment instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AjtaiParams {
    /// Modulus Q
    pub modulus: u64,
    pub message_dim: usize,
    pub randomness_dim: usize,
    /// Number of commitment rows κ
    pub commitment_dim: usize,
    /// Euclidean bound β on sampled randomness
    pub norm_bound: u64,
    pub max_sampling_iterations: usize,
    pub mode: AjtaiMode,
}

impl Default for AjtaiParams {
    fn default() -> Self {
        Self {
            modulus: 655_360_001,
            message_dim: 10,
            randomness_dim: 10,
            commitment_dim: 15,
            norm_bound: 50,
            max_sampling_iterations: ShortVectorSampler::DEFAULT_MAX_ITERATIONS,
            mode: AjtaiMode::Entrywise,
        }
    }
}

impl AjtaiParams {
    /// Check the configuration and build the field and sampler it implies
    pub fn validate(&self) -> Result<(ModularField, ShortVectorSampler)> {
        let field = ModularField::new(self.modulus)?;

        if self.message_dim == 0 || self.randomness_dim == 0 || self.commitment_dim == 0 {
            return Err(CommitmentError::config(format!(
                "dimensions must be positive (message={}, randomness={}, commitment={})",
                self.message_dim, self.randomness_dim, self.commitment_dim
            )));
        }

        if self.mode == AjtaiMode::Entrywise && self.message_dim != self.randomness_dim {
            return Err(CommitmentError::config(format!(
                "entrywise mode needs equal message and randomness widths ({} != {})",
                self.message_dim, self.randomness_dim
            )));
        }

        let sampler = ShortVectorSampler::new(self.norm_bound)?
            .with_norm(NormKind::Euclidean)
            .with_max_iterations(self.max_sampling_iterations)?;

        Ok((field, sampler))
    }
}

#[derive(Clone, Debug)]
pub struct AjtaiCommitment {
    params: AjtaiParams,
    field: ModularField,
    sampler: ShortVectorSampler,
    a_1: LatticeMatrix,
    a_2: LatticeMatrix,
}

impl AjtaiCommitment {
    pub fn params(&self) -> &AjtaiParams {
        &self.params
    }

    pub fn a_1(&self) -> &LatticeMatrix {
        &self.a_1
    }

    pub fn a_2(&self) -> &LatticeMatrix {
        &self.a_2
    }

    pub fn sampler(&self) -> &ShortVectorSampler {
        &self.sampler
    }

    fn check_dimension(expected: usize, v: &LatticePoint) -> Result<()> {
        if v.dimension() != expected {
            return Err(CommitmentError::InvalidDimension {
                expected,
                got: v.dimension(),
            });
        }
        Ok(())
    }
}

impl CommitmentScheme for AjtaiCommitment {
    type Params = AjtaiParams;
    type Message = LatticePoint;
    type Randomness = LatticePoint;
    type Commitment = LatticeCommitment;

    fn setup<R: RngCore + CryptoRng>(params: AjtaiParams, rng: &mut R) -> Result<Self> {
        let (field, sampler) = params.validate()?;
        let generator = MatrixGenerator::new(field);

        let a_1 = generator.random(params.commitment_dim, params.message_dim, rng);
        let a_2 = generator.random(params.commitment_dim, params.randomness_dim, rng);

        debug!(
            modulus = params.modulus,
            message_dim = params.message_dim,
            randomness_dim = params.randomness_dim,
            commitment_dim = params.commitment_dim,
            mode = ?params.mode,
            "ajtai setup complete"
        );

        Ok(Self {
            params,
            field,
            sampler,
            a_1,
            a_2,
        })
    }

    fn commit(&self, message: &LatticePoint, randomness: &LatticePoint) -> Result<LatticeCommitment> {
        Self::check_dimension(self.params.message_dim, message)?;
        Self::check_dimension(self.params.randomness_dim, randomness)?;

        let field = &self.field;
        match self.params.mode {
            AjtaiMode::Entrywise => {
                let am = self.a_1.hadamard_rows_mod(message.as_slice(), field)?;
                let ar = self.a_2.hadamard_rows_mod(randomness.as_slice(), field)?;
                LatticeCommitment::new(
                    self.params.commitment_dim,
                    self.params.message_dim,
                    field.add_vec(&am, &ar),
                )
            }
            AjtaiMode::MatrixVector => {
                let am = self.a_1.mul_vector_mod(message.as_slice(), field)?;
                let ar = self.a_2.mul_vector_mod(randomness.as_slice(), field)?;
                LatticeCommitment::new(self.params.commitment_dim, 1, field.add_vec(&am, &ar))
            }
        }
    }

    fn sample_randomness<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<LatticePoint> {
        self.sampler.sample(self.params.randomness_dim, rng)
    }
}

impl LinearCommitmentScheme for AjtaiCommitment {
    fn field(&self) -> &ModularField {
        &self.field
    }
}
