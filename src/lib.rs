//! Commitment schemes over Z_Q
//!
//! - [`AjtaiCommitment`]: SIS-style commitment with two uniform matrices
//! - [`StructuredCommitment`]: commitment over a systematic-form matrix
//! - [`DiscreteLogCommitment`]: `(g^m, m·h^r)` in Z_q^*
//! - [`PedersenCommitment`]: `g^m·h^r` in Z_q^*
//!
//! All four implement [`CommitmentScheme`] (setup / commit / verify). Lattice
//! randomness comes from the bounded-norm [`ShortVectorSampler`]. Every source of
//! randomness is an explicit `RngCore + CryptoRng` argument, so a seeded
//! generator makes setup and sampling reproducible.

pub mod ajtai;
pub mod error;
pub mod group;
pub mod lattice;
pub mod matrix_generator;
pub mod modular_arithmetic;
pub mod pedersen;
pub mod sampler;
pub mod scheme;
pub mod structured;
pub mod verifier;

pub use ajtai::{AjtaiCommitment, AjtaiMode, AjtaiParams};
pub use error::{CommitmentError, Result};
pub use group::{DiscreteLogCommitment, GroupCommitment, GroupParams};
pub use lattice::{LatticeCommitment, LatticeMatrix, LatticePoint};
pub use matrix_generator::{rng_from_label, seeded_rng, MatrixGenerator};
pub use modular_arithmetic::ModularField;
pub use pedersen::PedersenCommitment;
pub use sampler::{NormKind, ShortVectorSampler};
pub use scheme::{CommitmentScheme, LinearCommitmentScheme, Opening};
pub use structured::{StructuredCommitment, StructuredParams};
pub use verifier::Verifier;

#[cfg(test)]
mod tests;
