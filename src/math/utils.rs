pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if a == 0 {
        (b, 0, 1)
    } else {
        let (g, x, y) = extended_gcd(b % a, a);
        (g, y - (b / a) * x, x)
    }
}

/// Inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
///
/// A modulus of 1 has the single residue 0, which is its own inverse.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m == 1 {
        return Some(0);
    }
    let (g, x, _) = extended_gcd((a % m) as i128, m as i128);
    if g != 1 {
        return None;
    }
    let m = m as i128;
    Some(((x % m + m) % m) as u64)
}

/// Computes `(a * b) mod modulus` with a `u128` intermediate.
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Computes `(a + b) mod modulus` for already-reduced operands.
pub fn add_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 + b as u128) % modulus as u128) as u64
}
