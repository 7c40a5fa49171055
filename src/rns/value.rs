use super::{CrtInteger, CrtPolynomial, RnsError, RnsResult};
use num_bigint::BigUint;

/// An operand whose kind is only known at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrtValue {
    Integer(CrtInteger),
    Polynomial(CrtPolynomial),
}

/// Output of [`CrtValue::recover`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovered {
    Integer(BigUint),
    Polynomial(Vec<BigUint>),
}

impl CrtValue {
    pub fn kind(&self) -> &'static str {
        match self {
            CrtValue::Integer(_) => "integer",
            CrtValue::Polynomial(_) => "polynomial",
        }
    }

    pub fn recover(&self) -> Recovered {
        match self {
            CrtValue::Integer(x) => Recovered::Integer(x.recover()),
            CrtValue::Polynomial(p) => Recovered::Polynomial(p.recover()),
        }
    }

    pub fn add(&self, other: &Self) -> RnsResult<Self> {
        match (self, other) {
            (CrtValue::Integer(a), CrtValue::Integer(b)) => a.add(b).map(CrtValue::Integer),
            (CrtValue::Polynomial(a), CrtValue::Polynomial(b)) => {
                a.add(b).map(CrtValue::Polynomial)
            }
            _ => Err(self.mismatch(other)),
        }
    }

    pub fn multiply(&self, other: &Self) -> RnsResult<Self> {
        match (self, other) {
            (CrtValue::Integer(a), CrtValue::Integer(b)) => {
                a.multiply(b).map(CrtValue::Integer)
            }
            (CrtValue::Polynomial(a), CrtValue::Polynomial(b)) => {
                a.multiply(b).map(CrtValue::Polynomial)
            }
            _ => Err(self.mismatch(other)),
        }
    }

    fn mismatch(&self, other: &Self) -> RnsError {
        RnsError::TypeMismatch {
            expected: self.kind(),
            actual: other.kind(),
        }
    }
}

impl From<CrtInteger> for CrtValue {
    fn from(value: CrtInteger) -> Self {
        CrtValue::Integer(value)
    }
}

impl From<CrtPolynomial> for CrtValue {
    fn from(value: CrtPolynomial) -> Self {
        CrtValue::Polynomial(value)
    }
}
