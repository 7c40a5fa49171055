//! Core CrtInteger type and component-wise ring operations

use super::{ModulusSet, RnsError, RnsResult};
use crate::math::{add_mod, mul_mod, uniform_residues};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::Rng;
use std::sync::Arc;

/// A non-negative integer below the modulus-set product, stored as one
/// residue per modulus.
#[derive(Debug, Clone)]
pub struct CrtInteger {
    residues: Vec<u64>,
    modulus_set: Arc<ModulusSet>,
}

impl CrtInteger {
    /// Reduces `value` modulo each modulus.
    ///
    /// No reduction modulo the full product happens first, so a value at or
    /// above `product` recovers as `value mod product`, not as `value`.
    pub fn from_integer(modulus_set: Arc<ModulusSet>, value: &BigUint) -> Self {
        let residues = modulus_set
            .moduli()
            .iter()
            .map(|&modulus| (value % modulus).to_u64().unwrap_or_default())
            .collect();

        Self {
            residues,
            modulus_set,
        }
    }

    pub fn from_u64(modulus_set: Arc<ModulusSet>, value: u64) -> Self {
        let residues = modulus_set
            .moduli()
            .iter()
            .map(|&modulus| value % modulus)
            .collect();

        Self {
            residues,
            modulus_set,
        }
    }

    /// Wraps residues that are already reduced; only the count is checked.
    pub fn from_residues(
        modulus_set: Arc<ModulusSet>,
        residues: Vec<u64>,
    ) -> RnsResult<Self> {
        if residues.len() != modulus_set.len() {
            return Err(RnsError::LengthMismatch {
                expected: modulus_set.len(),
                actual: residues.len(),
            });
        }
        debug_assert!(
            residues
                .iter()
                .zip(modulus_set.moduli())
                .all(|(&r, &m)| r < m),
            "residues must be reduced modulo their moduli"
        );

        Ok(Self {
            residues,
            modulus_set,
        })
    }

    pub fn zero(modulus_set: Arc<ModulusSet>) -> Self {
        Self::from_u64(modulus_set, 0)
    }

    pub fn one(modulus_set: Arc<ModulusSet>) -> Self {
        Self::from_u64(modulus_set, 1)
    }

    pub fn sample_uniform<R: Rng + ?Sized>(
        modulus_set: Arc<ModulusSet>,
        rng: &mut R,
    ) -> Self {
        let residues = uniform_residues(modulus_set.moduli(), rng);
        Self {
            residues,
            modulus_set,
        }
    }

    /// Chinese Remainder Theorem reconstruction into `[0, product)`.
    pub fn recover(&self) -> BigUint {
        self.modulus_set.reconstruct(&self.residues)
    }

    pub fn add(&self, other: &Self) -> RnsResult<Self> {
        self.zip_with(other, add_mod)
    }

    pub fn multiply(&self, other: &Self) -> RnsResult<Self> {
        self.zip_with(other, mul_mod)
    }

    pub fn residues(&self) -> &[u64] {
        &self.residues
    }

    pub fn modulus_set(&self) -> &Arc<ModulusSet> {
        &self.modulus_set
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub(crate) fn ensure_compatible(&self, other: &Self) -> RnsResult<()> {
        if !self.modulus_set.is_compatible(&other.modulus_set) {
            return Err(RnsError::ModulusSetMismatch);
        }
        if self.residues.len() != other.residues.len() {
            return Err(RnsError::LengthMismatch {
                expected: self.residues.len(),
                actual: other.residues.len(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: fn(u64, u64, u64) -> u64) -> RnsResult<Self> {
        self.ensure_compatible(other)?;

        let residues = self
            .residues
            .iter()
            .zip(&other.residues)
            .zip(self.modulus_set.moduli())
            .map(|((&a, &b), &m)| op(a, b, m))
            .collect();

        Ok(Self {
            residues,
            modulus_set: self.modulus_set.clone(),
        })
    }
}

impl PartialEq for CrtInteger {
    fn eq(&self, other: &Self) -> bool {
        self.modulus_set.is_compatible(&other.modulus_set)
            && self.residues == other.residues
    }
}

impl Eq for CrtInteger {}
