//! Validated sets of pairwise-coprime moduli
use super::{RnsError, RnsResult};
use crate::math::{gcd, mod_inverse, mul_mod};
use num_bigint::BigUint;
use num_traits::One;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Every modulus must be strictly below `2^MAX_MODULUS_BITS`.
pub const MAX_MODULUS_BITS: u32 = 60;

/// Ordered collection of pairwise-coprime moduli and their exact product.
///
/// Residue vectors are positionally aligned to [`ModulusSet::moduli`]. The
/// per-modulus reconstruction constants are computed once here so that
/// recovering a value never has to search for an inverse.
#[derive(Debug)]
pub struct ModulusSet {
    moduli: Vec<u64>,
    product: BigUint,
    /// `product / moduli[i]`
    partial_products: Vec<BigUint>,
    /// `(product / moduli[i])^-1 mod moduli[i]`
    inverses: Vec<u64>,
}

impl ModulusSet {
    #[instrument(level = "debug", skip(moduli), fields(count = moduli.len()))]
    pub fn new(moduli: Vec<u64>) -> RnsResult<Self> {
        validate(&moduli)?;

        let product = moduli
            .iter()
            .fold(BigUint::one(), |acc, &m| acc * BigUint::from(m));

        let mut partial_products = Vec::with_capacity(moduli.len());
        let mut inverses = Vec::with_capacity(moduli.len());
        for (i, &modulus) in moduli.iter().enumerate() {
            // (product / moduli[i]) mod moduli[i], without leaving u64
            let reduced = moduli
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(1 % modulus, |acc, (_, &m)| mul_mod(acc, m % modulus, modulus));
            let inverse = mod_inverse(reduced, modulus).ok_or(
                RnsError::NoModularInverse {
                    value: reduced,
                    modulus,
                },
            )?;
            partial_products.push(&product / modulus);
            inverses.push(inverse);
        }

        debug!(product_bits = product.bits(), "modulus set validated");

        Ok(Self {
            moduli,
            product,
            partial_products,
            inverses,
        })
    }

    pub fn moduli(&self) -> &[u64] {
        &self.moduli
    }

    pub fn len(&self) -> usize {
        self.moduli.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.moduli.is_empty()
    }

    pub fn product(&self) -> &BigUint {
        &self.product
    }

    /// Bit length of the product, i.e. the dynamic range of the set.
    pub fn bit_size(&self) -> u64 {
        self.product.bits()
    }

    /// Same instance, or an equal modulus sequence.
    pub fn is_compatible(self: &Arc<Self>, other: &Arc<Self>) -> bool {
        Arc::ptr_eq(self, other) || self.moduli == other.moduli
    }

    /// CRT reconstruction of the unique value in `[0, product)` congruent to
    /// `residues[i]` modulo `moduli[i]` for every `i`.
    pub(crate) fn reconstruct(&self, residues: &[u64]) -> BigUint {
        let sum = residues
            .iter()
            .zip(&self.partial_products)
            .zip(&self.inverses)
            .fold(BigUint::default(), |acc, ((&r, partial), &inv)| {
                acc + partial * (BigUint::from(r) * inv)
            });
        sum % &self.product
    }
}

impl PartialEq for ModulusSet {
    fn eq(&self, other: &Self) -> bool {
        self.moduli == other.moduli
    }
}

impl Eq for ModulusSet {}

fn validate(moduli: &[u64]) -> RnsResult<()> {
    if moduli.is_empty() {
        return Err(RnsError::EmptyModulusSet);
    }

    for &modulus in moduli {
        if modulus == 0 {
            return Err(RnsError::ZeroModulus);
        }
        if modulus >> MAX_MODULUS_BITS != 0 {
            return Err(RnsError::ModulusTooLarge {
                modulus,
                max_bits: MAX_MODULUS_BITS,
            });
        }
    }

    for (i, &left) in moduli.iter().enumerate() {
        for &right in &moduli[i + 1..] {
            let g = gcd(left, right);
            if g != 1 {
                return Err(RnsError::ModuliNotCoprime {
                    left,
                    right,
                    gcd: g,
                });
            }
        }
    }

    Ok(())
}

/// Builder for constructing a shared modulus set.
#[derive(Debug, Default)]
pub struct ModulusSetBuilder {
    moduli: Vec<u64>,
}

impl ModulusSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moduli(mut self, moduli: Vec<u64>) -> Self {
        self.moduli = moduli;
        self
    }

    pub fn push_modulus(mut self, modulus: u64) -> Self {
        self.moduli.push(modulus);
        self
    }

    pub fn build(self) -> RnsResult<Arc<ModulusSet>> {
        Ok(Arc::new(ModulusSet::new(self.moduli)?))
    }
}
