//! Public matrix generation for the lattice commitment schemes
//!
//! Two layouts are supported:
//!
//! - **Random**: every entry drawn independently and uniformly from [0, Q).
//! - **Systematic**: an (N + L) × K matrix
//!
//! ```text
//! [ I_N   | R_1                 ]   N rows
//! [ 0_LxN | I_L | R_2           ]   L rows
//! ```
//!
//! where R_1 and R_2 are uniform. The first N output coordinates of A·r depend on
//! the randomness alone and the next L coordinates line up with the message.
//!
//! All randomness is supplied by the caller. [`seeded_rng`] and [`rng_from_label`]
//! give reproducible public parameters.

use crate::error::{CommitmentError, Result};
use crate::lattice::LatticeMatrix;
use crate::modular_arithmetic::ModularField;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

#[derive(Clone, Copy, Debug)]
pub struct MatrixGenerator {
    field: ModularField,
}

impl MatrixGenerator {
    pub fn new(field: ModularField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &ModularField {
        &self.field
    }

    /// Uniform `rows × cols` matrix over Z_Q
    pub fn random<R: RngCore + CryptoRng>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> LatticeMatrix {
        let q = self.field.modulus();
        LatticeMatrix::from_fn(rows, cols, |_, _| rng.gen_range(0..q))
    }

    /// Systematic-form matrix with identity blocks of width `n` and `l`
    /// and `k` columns in total
    ///
    /// # Error Conditions
    /// - `n` and `l` must be non-zero
    /// - `n + l` must not exceed `k`
    pub fn systematic<R: RngCore + CryptoRng>(
        &self,
        n: usize,
        l: usize,
        k: usize,
        rng: &mut R,
    ) -> Result<LatticeMatrix> {
        if n == 0 || l == 0 {
            return Err(CommitmentError::config(format!(
                "identity blocks must be non-empty (N={n}, L={l})"
            )));
        }
        let identity_width = n
            .checked_add(l)
            .filter(|&width| width <= k)
            .ok_or_else(|| {
                CommitmentError::config(format!(
                    "identity blocks N={n} and L={l} do not fit in K={k} columns"
                ))
            })?;

        let q = self.field.modulus();

        // Block 1 = [I_N | R_1]
        let block_1 =
            LatticeMatrix::identity(n).hconcat(&self.random(n, k - n, rng))?;

        // Block 2 = [0 | I_L | R_2]
        let block_2 = LatticeMatrix::from_fn(l, k, |i, j| match j {
            j if j < n => 0,
            j if j < identity_width => u64::from(j - n == i),
            _ => rng.gen_range(0..q),
        });

        debug!(n, l, k, modulus = q, "generated systematic matrix");
        block_1.vconcat(&block_2)
    }
}

/// ChaCha20 generator for reproducible setup
pub fn seeded_rng(seed: [u8; 32]) -> ChaCha20Rng {
    ChaCha20Rng::from_seed(seed)
}

/// ChaCha20 generator seeded with the blake3 hash of a public label
///
/// Anyone holding the label can rebuild the same public matrices.
pub fn rng_from_label(label: &[u8]) -> ChaCha20Rng {
    seeded_rng(*blake3::hash(label).as_bytes())
}
