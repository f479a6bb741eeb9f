use math::prelude::*;
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use secret_core::{
    reconstruct_secret, ErrorKind, ReconstructError, Share, ShareSet,
};

/// Horner evaluation of `coeffs` (constant term first) at `x`.
fn evaluate(coeffs: &[BigInt], x: &BigInt) -> BigInt {
    coeffs
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, c| acc * x + c)
}

/// A random polynomial of degree `k - 1` with coefficients of roughly
/// `limbs * 64` bits and the given constant term.
fn random_polynomial(
    rng: &mut StdRng,
    secret: &BigInt,
    k: usize,
    limbs: usize,
) -> Vec<BigInt> {
    std::iter::once(secret.clone())
        .chain((1..k).map(|_| {
            (0..limbs).fold(BigInt::zero(), |acc, _| {
                (acc << 64u32) + BigInt::from(rng.random::<u64>())
            })
        }))
        .collect()
}

/// Encode the polynomial's values at `xs` as shares written in rotating
/// bases, the way a share file would carry them.
fn encoded_shares(coeffs: &[BigInt], xs: &[i64]) -> Vec<Share> {
    xs.iter()
        .enumerate()
        .map(|(i, &x)| {
            let base = 2 + (i as u32 % 15);
            let y = evaluate(coeffs, &BigInt::from(x));
            let y: BigUint =
                y.to_biguint().expect("test polynomials are non-negative");
            let digits = encode(&y, base).expect("valid base");
            Share::decode(&x.to_string(), &digits.to_uppercase(), base)
                .expect("encoded share decodes")
        })
        .collect()
}

#[test]
fn reconstructs_sample_share_file() {
    // n = 4, k = 3; f(x) = x^2 + 3
    let shares = vec![
        Share::decode("1", "4", 10).unwrap(),
        Share::decode("2", "111", 2).unwrap(),
        Share::decode("3", "12", 10).unwrap(),
        Share::decode("6", "213", 4).unwrap(),
    ];
    let set = ShareSet::new(3, shares).unwrap().with_declared_total(4);
    assert_eq!(reconstruct_secret(&set).unwrap(), BigInt::from(3));
}

#[test]
fn reconstructs_secret_wider_than_any_machine_word() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let secret: BigInt = (BigInt::one() << 256u32) - 189;
    let k = 7;
    let coeffs = random_polynomial(&mut rng, &secret, k, 4);

    let shares = encoded_shares(&coeffs, &[1, 2, 3, 4, 5, 6, 7]);
    let set = ShareSet::new(k, shares).unwrap();
    assert_eq!(reconstruct_secret(&set).unwrap(), secret);
}

#[test]
fn large_threshold_with_scattered_indices() {
    let mut rng = StdRng::seed_from_u64(42);
    let secret = BigInt::from(u128::MAX) * 1_000_003u32;
    let k = 12;
    let coeffs = random_polynomial(&mut rng, &secret, k, 2);

    let mut xs: Vec<i64> = (1..=200).collect();
    xs.shuffle(&mut rng);
    xs.truncate(k);

    let set = ShareSet::new(k, encoded_shares(&coeffs, &xs)).unwrap();
    assert_eq!(reconstruct_secret(&set).unwrap(), secret);
}

#[test]
fn every_ordering_of_a_share_set_agrees() {
    let mut rng = StdRng::seed_from_u64(7);
    let secret = BigInt::from(987_654_321u64);
    let coeffs = random_polynomial(&mut rng, &secret, 4, 1);
    let mut shares = encoded_shares(&coeffs, &[3, 9, 14, 27]);

    for _ in 0..24 {
        shares.shuffle(&mut rng);
        let set = ShareSet::new(4, shares.clone()).unwrap();
        assert_eq!(reconstruct_secret(&set).unwrap(), secret);
    }
}

#[test]
fn any_threshold_window_of_extra_shares_agrees() {
    let mut rng = StdRng::seed_from_u64(11);
    let secret = BigInt::from(31_337u32);
    let k = 3;
    let coeffs = random_polynomial(&mut rng, &secret, k, 1);
    let shares = encoded_shares(&coeffs, &[1, 2, 3, 4, 5, 6]);

    for start in 0..=shares.len() - k {
        let set = ShareSet::new(k, shares[start..].to_vec()).unwrap();
        assert_eq!(reconstruct_secret(&set).unwrap(), secret);
    }
}

#[test]
fn too_few_shares_reconstruct_a_different_value() {
    // Degree-2 polynomial reconstructed from 2 shares is a different line.
    let coeffs: Vec<BigInt> =
        [5, 0, 1].into_iter().map(BigInt::from).collect();
    let set = ShareSet::new(2, encoded_shares(&coeffs, &[1, 3])).unwrap();
    assert_ne!(reconstruct_secret(&set).unwrap(), BigInt::from(5));
}

#[test]
fn tampered_share_is_reported_as_inconsistent() {
    let shares = vec![Share::new(1, 4), Share::new(2, 7), Share::new(4, 20)];
    let set = ShareSet::new(3, shares).unwrap();
    let err = reconstruct_secret(&set).unwrap_err();
    assert!(matches!(err, ReconstructError::NonIntegerResult { .. }));
    assert_eq!(err.kind(), ErrorKind::InconsistentShares);
}

#[test]
fn repeated_index_is_reported_as_malformed() {
    let shares = vec![Share::new(5, 1), Share::new(5, 2)];
    let set = ShareSet::new(2, shares).unwrap();
    let err = reconstruct_secret(&set).unwrap_err();
    assert!(err.is_division_by_zero());
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn bad_digit_aborts_before_reconstruction() {
    let err = Share::decode("1", "10z", 16).unwrap_err();
    assert!(err.is_invalid_digit());
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn independent_reconstructions_run_in_parallel() {
    let sets: Vec<(BigInt, ShareSet)> = (0..8u64)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let secret = BigInt::from(rng.random::<u64>());
            let coeffs = random_polynomial(&mut rng, &secret, 5, 2);
            let shares = encoded_shares(&coeffs, &[1, 2, 3, 4, 5]);
            (secret, ShareSet::new(5, shares).unwrap())
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = sets
            .iter()
            .map(|(secret, set)| {
                scope.spawn(move || {
                    assert_eq!(&reconstruct_secret(set).unwrap(), secret)
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}
