use super::{CrtInteger, CrtPolynomial, ModulusSet};
use std::fmt;

impl fmt::Display for ModulusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{:?} (product {})", self.moduli(), self.product())
    }
}

impl fmt::Display for CrtInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.residues())
    }
}

// Prints recovered coefficients, highest degree first.
impl fmt::Display for CrtPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs = self.recover();
        let mut first = true;

        for (i, c) in coeffs.iter().enumerate().rev() {
            if c.bits() == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{i}")?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
