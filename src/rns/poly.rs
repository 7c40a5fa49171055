//! Polynomials whose coefficients are CRT integers
//!
//! Coefficient `i` is the degree-`i` term. All coefficients share the
//! polynomial's modulus set, so ring operations lift directly from
//! [`CrtInteger`] and recovery maps CRT reconstruction over the terms.

use super::{CrtInteger, ModulusSet, RnsError, RnsResult};
use num_bigint::BigUint;
use rand::Rng;
use std::sync::Arc;
use tracing::{instrument, trace};

#[derive(Debug, Clone)]
pub struct CrtPolynomial {
    coefficients: Vec<CrtInteger>,
    modulus_set: Arc<ModulusSet>,
}

impl CrtPolynomial {
    /// Builds a polynomial from existing coefficients, rejecting any that
    /// use a different modulus set.
    pub fn from_coefficients(
        modulus_set: Arc<ModulusSet>,
        coefficients: Vec<CrtInteger>,
    ) -> RnsResult<Self> {
        for coefficient in &coefficients {
            if !modulus_set.is_compatible(coefficient.modulus_set()) {
                return Err(RnsError::ModulusSetMismatch);
            }
        }
        Ok(Self {
            coefficients,
            modulus_set,
        })
    }

    /// One coefficient per residue list, each taken as already reduced.
    pub fn from_residue_coefficients(
        modulus_set: Arc<ModulusSet>,
        coefficient_residues: Vec<Vec<u64>>,
    ) -> RnsResult<Self> {
        let coefficients = coefficient_residues
            .into_iter()
            .map(|residues| CrtInteger::from_residues(modulus_set.clone(), residues))
            .collect::<RnsResult<Vec<_>>>()?;

        Ok(Self {
            coefficients,
            modulus_set,
        })
    }

    pub fn from_integer_coefficients(
        modulus_set: Arc<ModulusSet>,
        coefficients: &[BigUint],
    ) -> Self {
        let coefficients = coefficients
            .iter()
            .map(|value| CrtInteger::from_integer(modulus_set.clone(), value))
            .collect();

        Self {
            coefficients,
            modulus_set,
        }
    }

    pub fn from_u64_coefficients(modulus_set: Arc<ModulusSet>, coefficients: &[u64]) -> Self {
        let coefficients = coefficients
            .iter()
            .map(|&value| CrtInteger::from_u64(modulus_set.clone(), value))
            .collect();

        Self {
            coefficients,
            modulus_set,
        }
    }

    pub fn sample_uniform<R: Rng + ?Sized>(
        modulus_set: Arc<ModulusSet>,
        len: usize,
        rng: &mut R,
    ) -> Self {
        let coefficients = (0..len)
            .map(|_| CrtInteger::sample_uniform(modulus_set.clone(), rng))
            .collect();

        Self {
            coefficients,
            modulus_set,
        }
    }

    /// Recovered coefficients, constant term first.
    pub fn recover(&self) -> Vec<BigUint> {
        self.coefficients.iter().map(CrtInteger::recover).collect()
    }

    /// Coefficient-wise sum; both operands must have the same length.
    pub fn add(&self, other: &Self) -> RnsResult<Self> {
        self.ensure_compatible(other)?;
        if self.len() != other.len() {
            return Err(RnsError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let coefficients = self
            .coefficients
            .iter()
            .zip(&other.coefficients)
            .map(|(a, b)| a.add(b))
            .collect::<RnsResult<Vec<_>>>()?;

        Ok(Self {
            coefficients,
            modulus_set: self.modulus_set.clone(),
        })
    }

    /// Schoolbook convolution: output index `k` accumulates every
    /// `self[i] * other[j]` with `i + j = k`.
    ///
    /// A product with an empty polynomial is empty.
    #[instrument(level = "debug", skip_all, fields(lhs = self.len(), rhs = other.len()))]
    pub fn multiply(&self, other: &Self) -> RnsResult<Self> {
        self.ensure_compatible(other)?;
        if self.is_empty() || other.is_empty() {
            return Ok(Self {
                coefficients: Vec::new(),
                modulus_set: self.modulus_set.clone(),
            });
        }

        let mut coefficients: Vec<CrtInteger> =
            Vec::with_capacity(self.len() + other.len() - 1);
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                let term = a.multiply(b)?;
                let k = i + j;
                // Indices are reached in order, so `k` is either new or seen.
                if k == coefficients.len() {
                    coefficients.push(term);
                } else {
                    coefficients[k] = coefficients[k].add(&term)?;
                }
            }
        }

        trace!(len = coefficients.len(), "convolution finished");

        Ok(Self {
            coefficients,
            modulus_set: self.modulus_set.clone(),
        })
    }

    pub fn coefficients(&self) -> &[CrtInteger] {
        &self.coefficients
    }

    pub fn modulus_set(&self) -> &Arc<ModulusSet> {
        &self.modulus_set
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// `len - 1`, or `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    fn ensure_compatible(&self, other: &Self) -> RnsResult<()> {
        if !self.modulus_set.is_compatible(&other.modulus_set) {
            return Err(RnsError::ModulusSetMismatch);
        }
        Ok(())
    }
}

impl PartialEq for CrtPolynomial {
    fn eq(&self, other: &Self) -> bool {
        self.modulus_set.is_compatible(&other.modulus_set)
            && self.coefficients == other.coefficients
    }
}

impl Eq for CrtPolynomial {}
