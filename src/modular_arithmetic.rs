//! Modular arithmetic over Z_Q for the commitment schemes
//!
//! Every value handed out by [`ModularField`] is a canonical representative in
//! [0, Q). The modulus is restricted to the 32-bit range so that the product of
//! two reduced values always fits in a u64 and no intermediate result has to be
//! widened. Vector helpers reduce after every product and every addition, which
//! keeps long inner products from overflowing regardless of their length.

use crate::error::{CommitmentError, Result};
use serde::{Deserialize, Serialize};

/// Arithmetic context for Z_Q
///
/// Construction validates the modulus once; all operations afterwards are
/// total and never fail.
///
/// # Example
/// ```
/// use commitment_engine::ModularField;
///
/// let zq = ModularField::new(17).unwrap();
/// assert_eq!(zq.add(10, 12), 5);
/// assert_eq!(zq.mul(10, 12), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModularField {
    modulus: u64,
}

impl ModularField {
    /// Largest supported modulus. Products of two residues stay below 2^64.
    pub const MAX_MODULUS: u64 = u32::MAX as u64;

    /// Creates a field context for Z_Q
    ///
    /// # Error Conditions
    /// - Q must be at least 2
    /// - Q must not exceed [`Self::MAX_MODULUS`]
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus < 2 || modulus > Self::MAX_MODULUS {
            return Err(CommitmentError::InvalidModulus { modulus });
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduce an arbitrary u64 to [0, Q)
    #[inline(always)]
    pub fn reduce(&self, x: u64) -> u64 {
        x % self.modulus
    }

    /// Reduce a signed value to [0, Q)
    #[inline(always)]
    pub fn reduce_signed(&self, x: i64) -> u64 {
        x.rem_euclid(self.modulus as i64) as u64
    }

    /// (a + b) mod Q
    #[inline(always)]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let sum = self.reduce(a) + self.reduce(b);
        if sum >= self.modulus {
            sum - self.modulus
        } else {
            sum
        }
    }

    /// (a - b) mod Q
    #[inline(always)]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let (a, b) = (self.reduce(a), self.reduce(b));
        if a >= b {
            a - b
        } else {
            self.modulus - b + a
        }
    }

    /// -a mod Q
    #[inline(always)]
    pub fn neg(&self, a: u64) -> u64 {
        match self.reduce(a) {
            0 => 0,
            a => self.modulus - a,
        }
    }

    /// (a * b) mod Q
    #[inline(always)]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        (self.reduce(a) * self.reduce(b)) % self.modulus
    }

    /// base^exp mod Q by square-and-multiply
    pub fn pow(&self, base: u64, mut exp: u64) -> u64 {
        let mut result = 1 % self.modulus;
        let mut base = self.reduce(base);
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        result
    }

    /// Reduce every coordinate of a vector
    pub fn reduce_vec(&self, v: &[u64]) -> Vec<u64> {
        v.iter().map(|&x| self.reduce(x)).collect()
    }

    /// Coordinate-wise sum
    pub fn add_vec(&self, a: &[u64], b: &[u64]) -> Vec<u64> {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).map(|(&x, &y)| self.add(x, y)).collect()
    }

    /// Multiply every coordinate by `scalar`
    pub fn scale_vec(&self, v: &[u64], scalar: u64) -> Vec<u64> {
        v.iter().map(|&x| self.mul(x, scalar)).collect()
    }

    /// Coordinate-wise (Hadamard) product
    pub fn hadamard(&self, a: &[u64], b: &[u64]) -> Vec<u64> {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).map(|(&x, &y)| self.mul(x, y)).collect()
    }

    /// ⟨a, b⟩ mod Q, reducing after each step
    pub fn inner_product(&self, a: &[u64], b: &[u64]) -> u64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(0, |acc, (&x, &y)| self.add(acc, self.mul(x, y)))
    }
}

/// Deterministic primality test by trial division over 6k ± 1
///
/// Only used to validate small group parameters at setup.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
