pub mod sampling;
pub mod utils;

pub use sampling::uniform_residues;
pub use utils::{add_mod, extended_gcd, gcd, mod_inverse, mul_mod};
