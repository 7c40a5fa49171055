pub mod math;
pub mod rns;

pub use num_bigint::BigUint;
pub use rns::{
    CrtInteger, CrtPolynomial, CrtValue, MAX_MODULUS_BITS, ModulusSet, ModulusSetBuilder,
    Recovered, RnsError, RnsResult,
};
