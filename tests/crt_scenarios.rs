use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rns_crt::{
    CrtInteger, CrtPolynomial, CrtValue, ModulusSet, ModulusSetBuilder, Recovered, RnsError,
};
use std::sync::Arc;

fn q_280() -> Arc<ModulusSet> {
    ModulusSetBuilder::new()
        .with_moduli(vec![5, 7, 8])
        .build()
        .unwrap()
}

#[test]
fn test_integer_scenario() {
    let q = q_280();
    assert_eq!(q.product(), &BigUint::from(280u32));

    let a = CrtInteger::from_residues(q.clone(), vec![3, 1, 6]).unwrap();
    let b = CrtInteger::from_residues(q, vec![4, 2, 2]).unwrap();

    assert_eq!(a.recover(), BigUint::from(78u32));
    assert_eq!(b.recover(), BigUint::from(114u32));
    assert_eq!(a.add(&b).unwrap().recover(), BigUint::from(192u32));
    assert_eq!(a.multiply(&b).unwrap().recover(), BigUint::from(172u32));
}

#[test]
fn test_polynomial_scenario() {
    let q = q_280();
    let poly =
        CrtPolynomial::from_residue_coefficients(q, vec![vec![3, 1, 6], vec![4, 2, 2]])
            .unwrap();
    assert_eq!(
        poly.recover(),
        vec![BigUint::from(78u32), BigUint::from(114u32)]
    );

    let square = poly.multiply(&poly).unwrap();
    let expected: Vec<BigUint> = [78u64 * 78 % 280, 2 * 78 * 114 % 280, 114 * 114 % 280]
        .into_iter()
        .map(BigUint::from)
        .collect::<Vec<BigUint>>();
    assert_eq!(square.recover(), expected);
}

#[test]
fn test_original_validation_cases() {
    assert!(ModulusSet::new(vec![2, 3, 5]).is_ok());
    assert!(matches!(
        ModulusSet::new(vec![2, 3, 9]),
        Err(RnsError::ModuliNotCoprime { .. })
    ));
    assert!(matches!(
        ModulusSet::new(vec![2, 3, 1 << 61]),
        Err(RnsError::ModulusTooLarge { .. })
    ));
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let q = ModulusSetBuilder::new()
        .with_moduli(vec![(1 << 60) - 1, (1 << 60) - 3, (1 << 59) - 1])
        .build()
        .unwrap();

    let mut rng1 = ChaCha20Rng::seed_from_u64(7);
    let mut rng2 = ChaCha20Rng::seed_from_u64(7);
    let p1 = CrtPolynomial::sample_uniform(q.clone(), 16, &mut rng1);
    let p2 = CrtPolynomial::sample_uniform(q.clone(), 16, &mut rng2);
    assert_eq!(p1, p2);

    for c in p1.recover() {
        assert!(&c < q.product());
    }
}

#[test]
fn test_shared_set_across_threads() {
    let q = q_280();
    let handles: Vec<_> = (0u64..4)
        .map(|i| {
            let q = q.clone();
            std::thread::spawn(move || {
                let x = CrtInteger::from_u64(q.clone(), 10 + i);
                let y = CrtInteger::from_u64(q, 20);
                x.multiply(&y).unwrap().recover()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), BigUint::from((10 + i as u64) * 20));
    }
}

#[test]
fn test_dynamic_operands() {
    let q = q_280();
    let x: CrtValue = CrtInteger::from_u64(q.clone(), 78).into();
    let p: CrtValue = CrtPolynomial::from_u64_coefficients(q, &[78, 114]).into();

    assert!(matches!(x.add(&p), Err(RnsError::TypeMismatch { .. })));
    assert_eq!(
        x.add(&x).unwrap().recover(),
        Recovered::Integer(BigUint::from(156u32))
    );
}
