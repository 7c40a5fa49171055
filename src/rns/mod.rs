//! Residue Number System (RNS) arithmetic over a set of coprime moduli
//!
//! Large integers and polynomials with large coefficients are represented
//! as residues modulo small moduli, operated on component-wise, and
//! recovered through the Chinese Remainder Theorem.

mod display;
mod element;
mod modulus_set;
mod poly;
mod value;

pub use element::CrtInteger;
pub use modulus_set::{MAX_MODULUS_BITS, ModulusSet, ModulusSetBuilder};
pub use poly::CrtPolynomial;
pub use value::{CrtValue, Recovered};

use thiserror::Error;

pub type RnsResult<T> = Result<T, RnsError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RnsError {
    #[error("modulus {modulus} does not fit in {max_bits} bits")]
    ModulusTooLarge { modulus: u64, max_bits: u32 },
    #[error("moduli {left} and {right} are not coprime (gcd {gcd})")]
    ModuliNotCoprime { left: u64, right: u64, gcd: u64 },
    #[error("modulus set must contain at least one modulus")]
    EmptyModulusSet,
    #[error("modulus must be non-zero")]
    ZeroModulus,
    #[error("operands use different modulus sets")]
    ModulusSetMismatch,
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("operand kind mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("{value} has no inverse modulo {modulus}")]
    NoModularInverse { value: u64, modulus: u64 },
}
