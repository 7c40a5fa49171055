use rand::Rng;

/// Sample one residue per modulus, each uniform in `[0, modulus)`.
pub fn uniform_residues<R: Rng + ?Sized>(moduli: &[u64], rng: &mut R) -> Vec<u64> {
    moduli
        .iter()
        .map(|&modulus| rng.random_range(0..modulus))
        .collect()
}
