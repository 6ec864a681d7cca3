//! Vectors, matrices and commitment values over Z_Q
//!
//! [`LatticePoint`] carries secret material (messages and randomness) and is
//! wiped on drop. [`LatticeMatrix`] holds public matrices, which are never
//! mutated after setup. [`LatticeCommitment`] is the published output of the
//! lattice schemes.

use crate::error::{CommitmentError, Result};
use crate::modular_arithmetic::ModularField;
use std::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A vector of non-negative integers, used for messages and randomness
///
/// Coordinates are not required to be reduced; schemes reduce them mod Q when
/// they are consumed. Short vectors produced by the sampler are in [0, β].
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct LatticePoint {
    pub coordinates: Vec<u64>,
}

impl LatticePoint {
    pub fn new(coordinates: Vec<u64>) -> Self {
        Self { coordinates }
    }

    pub fn zero(dimension: usize) -> Self {
        Self {
            coordinates: vec![0; dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.coordinates
    }

    /// Squared Euclidean norm, saturating at u128::MAX
    pub fn norm_squared(&self) -> u128 {
        self.coordinates.iter().fold(0u128, |acc, &x| {
            acc.saturating_add((x as u128).saturating_mul(x as u128))
        })
    }

    /// ℓ∞ norm (largest coordinate)
    pub fn infinity_norm(&self) -> u64 {
        self.coordinates.iter().copied().max().unwrap_or(0)
    }

    /// Coordinate-wise (self + other) mod Q
    pub fn add_mod(&self, other: &Self, field: &ModularField) -> Result<Self> {
        if self.dimension() != other.dimension() {
            return Err(CommitmentError::InvalidDimension {
                expected: self.dimension(),
                got: other.dimension(),
            });
        }
        Ok(Self::new(field.add_vec(&self.coordinates, &other.coordinates)))
    }

    /// (scalar · self) mod Q
    pub fn scale_mod(&self, scalar: u64, field: &ModularField) -> Self {
        Self::new(field.scale_vec(&self.coordinates, scalar))
    }
}

/// Prints the dimension only; coordinates are secret
impl fmt::Debug for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatticePoint")
            .field("dimension", &self.dimension())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u64>> for LatticePoint {
    fn from(coordinates: Vec<u64>) -> Self {
        Self::new(coordinates)
    }
}

/// Dense row-major matrix with entries in [0, Q)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeMatrix {
    data: Vec<Vec<u64>>,
    rows: usize,
    cols: usize,
}

impl LatticeMatrix {
    pub fn new(data: Vec<Vec<u64>>) -> Result<Self> {
        if data.is_empty() {
            return Err(CommitmentError::config("matrix cannot be empty"));
        }

        let rows = data.len();
        let cols = data[0].len();

        for row in &data {
            if row.len() != cols {
                return Err(CommitmentError::InvalidDimension {
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a per-entry function, row by row
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> u64) -> Self {
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| f(i, j)).collect())
            .collect();
        Self { data, rows, cols }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| 0)
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| u64::from(i == j))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[u64] {
        &self.data[i]
    }

    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.data[i][j]
    }

    /// Horizontal concatenation [self | other]
    pub fn hconcat(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows {
            return Err(CommitmentError::InvalidDimension {
                expected: self.rows,
                got: other.rows,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().chain(b).copied().collect())
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols + other.cols,
        })
    }

    /// Vertical concatenation [self ; other]
    pub fn vconcat(&self, other: &Self) -> Result<Self> {
        if self.cols != other.cols {
            return Err(CommitmentError::InvalidDimension {
                expected: self.cols,
                got: other.cols,
            });
        }
        let data = self.data.iter().chain(&other.data).cloned().collect();
        Ok(Self {
            data,
            rows: self.rows + other.rows,
            cols: self.cols,
        })
    }

    /// A · v mod Q
    pub fn mul_vector_mod(&self, v: &[u64], field: &ModularField) -> Result<Vec<u64>> {
        if v.len() != self.cols {
            return Err(CommitmentError::InvalidDimension {
                expected: self.cols,
                got: v.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .map(|row| field.inner_product(row, v))
            .collect())
    }

    /// Entrywise product of every row with `v`, flattened row-major:
    /// out[i·cols + j] = A[i][j] · v[j] mod Q
    pub fn hadamard_rows_mod(&self, v: &[u64], field: &ModularField) -> Result<Vec<u64>> {
        if v.len() != self.cols {
            return Err(CommitmentError::InvalidDimension {
                expected: self.cols,
                got: v.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .flat_map(|row| field.hadamard(row, v))
            .collect())
    }
}

/// Commitment value of the lattice schemes: a `rows × cols` array mod Q
///
/// Holds no reference to the message or randomness it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeCommitment {
    rows: usize,
    cols: usize,
    values: Vec<u64>,
}

impl LatticeCommitment {
    pub fn new(rows: usize, cols: usize, values: Vec<u64>) -> Result<Self> {
        if values.len() != rows * cols {
            return Err(CommitmentError::InvalidDimension {
                expected: rows * cols,
                got: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Homomorphic addition: (self + other) mod Q
    pub fn add(&self, other: &Self, field: &ModularField) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(CommitmentError::InvalidDimension {
                expected: self.values.len(),
                got: other.values.len(),
            });
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            values: field.add_vec(&self.values, &other.values),
        })
    }

    /// Homomorphic scaling: (scalar · self) mod Q
    pub fn scale(&self, scalar: u64, field: &ModularField) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            values: field.scale_vec(&self.values, scalar),
        }
    }
}

impl ConstantTimeEq for LatticeCommitment {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.shape() != other.shape() {
            return Choice::from(0);
        }
        self.values.as_slice().ct_eq(other.values.as_slice())
    }
}
