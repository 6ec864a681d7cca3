//! Structured commitment over a systematic-form matrix
//!
//! The public matrix A is (N + L) × K with identity blocks (see
//! [`MatrixGenerator::systematic`]). For randomness r ∈ Z^K and message
//! m ∈ Z_Q^L the commitment is
//!
//! ```text
//! C = A·r + [0 (N) ; m (L)]   mod Q
//! ```
//!
//! The first N coordinates depend on the randomness only, which allows checking
//! them without the message. The last L coordinates carry the message on top of
//! the identity block, so anyone holding r can read m back.

use crate::error::{CommitmentError, Result};
use crate::lattice::{LatticeCommitment, LatticeMatrix, LatticePoint};
use crate::matrix_generator::MatrixGenerator;
use crate::modular_arithmetic::ModularField;
use crate::sampler::{NormKind, ShortVectorSampler};
use crate::scheme::{CommitmentScheme, LinearCommitmentScheme};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredParams {
    pub modulus: u64,
    /// N: rows bound to the randomness alone
    pub identity_rows: usize,
    /// L: message length
    pub message_dim: usize,
    /// K: randomness length (number of matrix columns)
    pub randomness_dim: usize,
    /// β on sampled randomness
    pub norm_bound: u64,
    pub norm: NormKind,
    pub max_sampling_iterations: usize,
}

impl Default for StructuredParams {
    fn default() -> Self {
        Self {
            modulus: 655_360_001,
            identity_rows: 100,
            message_dim: 100,
            randomness_dim: 500,
            norm_bound: 100,
            norm: NormKind::Infinity,
            max_sampling_iterations: ShortVectorSampler::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl StructuredParams {
    /// Check the scalar parameters; the block layout is checked by the generator
    pub fn validate(&self) -> Result<(ModularField, ShortVectorSampler)> {
        let field = ModularField::new(self.modulus)?;
        let sampler = ShortVectorSampler::new(self.norm_bound)?
            .with_norm(self.norm)
            .with_max_iterations(self.max_sampling_iterations)?;
        Ok((field, sampler))
    }

    pub fn commitment_dim(&self) -> usize {
        self.identity_rows + self.message_dim
    }
}

#[derive(Clone, Debug)]
pub struct StructuredCommitment {
    params: StructuredParams,
    field: ModularField,
    sampler: ShortVectorSampler,
    a: LatticeMatrix,
}

impl StructuredCommitment {
    pub fn params(&self) -> &StructuredParams {
        &self.params
    }

    pub fn matrix(&self) -> &LatticeMatrix {
        &self.a
    }

    pub fn sampler(&self) -> &ShortVectorSampler {
        &self.sampler
    }

    fn check_dimension(expected: usize, got: usize) -> Result<()> {
        if expected != got {
            return Err(CommitmentError::InvalidDimension { expected, got });
        }
        Ok(())
    }

    fn check_opening_shape(&self, commitment: &LatticeCommitment, randomness: &LatticePoint) -> Result<()> {
        Self::check_dimension(self.params.randomness_dim, randomness.dimension())?;
        Self::check_dimension(self.params.commitment_dim(), commitment.values().len())
    }

    /// Read the message back from the commitment given the randomness
    pub fn recover_message(
        &self,
        commitment: &LatticeCommitment,
        randomness: &LatticePoint,
    ) -> Result<LatticePoint> {
        self.check_opening_shape(commitment, randomness)?;
        let ar = self.a.mul_vector_mod(randomness.as_slice(), &self.field)?;
        let n = self.params.identity_rows;

        Ok(commitment.values()[n..]
            .iter()
            .zip(&ar[n..])
            .map(|(&c, &x)| self.field.sub(c, x))
            .collect::<Vec<_>>()
            .into())
    }

    /// Check only the first N rows, which do not involve the message
    pub fn verify_randomness_rows(
        &self,
        commitment: &LatticeCommitment,
        randomness: &LatticePoint,
    ) -> Result<bool> {
        self.check_opening_shape(commitment, randomness)?;
        let n = self.params.identity_rows;
        let expected: Vec<u64> = (0..n)
            .map(|i| self.field.inner_product(self.a.row(i), randomness.as_slice()))
            .collect();

        Ok(bool::from(expected.as_slice().ct_eq(&commitment.values()[..n])))
    }
}

impl CommitmentScheme for StructuredCommitment {
    type Params = StructuredParams;
    type Message = LatticePoint;
    type Randomness = LatticePoint;
    type Commitment = LatticeCommitment;

    fn setup<R: RngCore + CryptoRng>(params: StructuredParams, rng: &mut R) -> Result<Self> {
        let (field, sampler) = params.validate()?;
        let a = MatrixGenerator::new(field).systematic(
            params.identity_rows,
            params.message_dim,
            params.randomness_dim,
            rng,
        )?;

        debug!(
            modulus = params.modulus,
            n = params.identity_rows,
            l = params.message_dim,
            k = params.randomness_dim,
            "structured setup complete"
        );

        Ok(Self {
            params,
            field,
            sampler,
            a,
        })
    }

    fn commit(&self, message: &LatticePoint, randomness: &LatticePoint) -> Result<LatticeCommitment> {
        Self::check_dimension(self.params.message_dim, message.dimension())?;
        Self::check_dimension(self.params.randomness_dim, randomness.dimension())?;

        let n = self.params.identity_rows;
        let mut values = self.a.mul_vector_mod(randomness.as_slice(), &self.field)?;
        for (slot, &m) in values[n..].iter_mut().zip(message.as_slice()) {
            *slot = self.field.add(*slot, m);
        }

        LatticeCommitment::new(self.params.commitment_dim(), 1, values)
    }

    fn sample_randomness<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<LatticePoint> {
        self.sampler.sample(self.params.randomness_dim, rng)
    }
}

impl LinearCommitmentScheme for StructuredCommitment {
    fn field(&self) -> &ModularField {
        &self.field
    }
}
