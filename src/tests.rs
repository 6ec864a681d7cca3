use super::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const PRIMES: [u64; 4] = [97, 7681, 8_380_417, 655_360_001];

fn uniform_point(len: usize, q: u64, rng: &mut ChaCha20Rng) -> LatticePoint {
    LatticePoint::new((0..len).map(|_| rng.gen_range(0..q)).collect())
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_schemes_are_send_and_sync() {
    assert_send_sync::<AjtaiCommitment>();
    assert_send_sync::<StructuredCommitment>();
    assert_send_sync::<DiscreteLogCommitment>();
    assert_send_sync::<PedersenCommitment>();
}

#[test]
fn test_discrete_log_scenario() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let scheme = DiscreteLogCommitment::setup(GroupParams::default(), &mut rng).unwrap();
    let verifier = Verifier::new(&scheme);

    let first = scheme.commit(&17, &9).unwrap();
    let second = scheme.commit(&17, &9).unwrap();
    assert_eq!(first, second);

    assert!(verifier.verify(&first, &Opening::new(17, 9)).unwrap());
    assert!(!verifier.verify(&first, &Opening::new(18, 9)).unwrap());
}

#[test]
fn test_params_from_json() {
    let ajtai: AjtaiParams = serde_json::from_str(
        r#"{ "modulus": 7681, "commitment_dim": 4, "mode": "MatrixVector" }"#,
    )
    .unwrap();
    assert_eq!(ajtai.modulus, 7681);
    assert_eq!(ajtai.commitment_dim, 4);
    assert_eq!(ajtai.message_dim, AjtaiParams::default().message_dim);
    assert_eq!(ajtai.mode, AjtaiMode::MatrixVector);

    let structured: StructuredParams = serde_json::from_str(
        r#"{ "identity_rows": 8, "message_dim": 8, "randomness_dim": 32, "norm": "Euclidean" }"#,
    )
    .unwrap();
    assert_eq!(structured.commitment_dim(), 16);
    assert_eq!(structured.norm, NormKind::Euclidean);

    let group: GroupParams = serde_json::from_str(r#"{ "secret": 7 }"#).unwrap();
    assert_eq!(group, GroupParams { secret: 7, ..GroupParams::default() });
}

#[test]
fn test_setup_from_public_label() {
    let params = StructuredParams {
        identity_rows: 4,
        message_dim: 4,
        randomness_dim: 12,
        ..StructuredParams::default()
    };
    let a = StructuredCommitment::setup(params.clone(), &mut rng_from_label(b"demo")).unwrap();
    let b = StructuredCommitment::setup(params, &mut rng_from_label(b"demo")).unwrap();
    assert_eq!(a.matrix(), b.matrix());
}

#[test]
fn test_euclidean_structured_randomness() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let params = StructuredParams {
        norm: NormKind::Euclidean,
        ..StructuredParams::default()
    };
    let scheme = StructuredCommitment::setup(params, &mut rng).unwrap();

    let r = scheme.sample_randomness(&mut rng).unwrap();
    assert_eq!(r.dimension(), 500);
    assert!(r.norm_squared() <= 100 * 100);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_structured_linearity(seed in any::<u64>(), q_index in 0usize..4) {
        let q = PRIMES[q_index];
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let params = StructuredParams {
            modulus: q,
            identity_rows: 3,
            message_dim: 4,
            randomness_dim: 12,
            norm_bound: 6,
            ..StructuredParams::default()
        };
        let scheme = StructuredCommitment::setup(params, &mut rng).unwrap();
        let field = *scheme.field();

        let (m1, m2) = (uniform_point(4, q, &mut rng), uniform_point(4, q, &mut rng));
        let r1 = scheme.sample_randomness(&mut rng).unwrap();
        let r2 = scheme.sample_randomness(&mut rng).unwrap();

        let lhs = scheme
            .commit(&m1.add_mod(&m2, &field).unwrap(), &r1.add_mod(&r2, &field).unwrap())
            .unwrap();
        let rhs = scheme
            .commit(&m1, &r1)
            .unwrap()
            .add(&scheme.commit(&m2, &r2).unwrap(), &field)
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_ajtai_linearity(seed in any::<u64>(), q_index in 0usize..4, matrix_vector in any::<bool>()) {
        let q = PRIMES[q_index];
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mode = if matrix_vector { AjtaiMode::MatrixVector } else { AjtaiMode::Entrywise };
        let params = AjtaiParams {
            modulus: q,
            message_dim: 5,
            randomness_dim: 5,
            commitment_dim: 3,
            norm_bound: 20,
            mode,
            ..AjtaiParams::default()
        };
        let scheme = AjtaiCommitment::setup(params, &mut rng).unwrap();
        let field = *scheme.field();

        let (m1, m2) = (uniform_point(5, q, &mut rng), uniform_point(5, q, &mut rng));
        let r1 = scheme.sample_randomness(&mut rng).unwrap();
        let r2 = scheme.sample_randomness(&mut rng).unwrap();

        let lhs = scheme
            .commit(&m1.add_mod(&m2, &field).unwrap(), &r1.add_mod(&r2, &field).unwrap())
            .unwrap();
        let rhs = scheme
            .commit(&m1, &r1)
            .unwrap()
            .add(&scheme.commit(&m2, &r2).unwrap(), &field)
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_lattice_binding(seed in any::<u64>(), index in 0usize..8, delta in 1u64..1000) {
        // Random matrices over the largest prime make a collision negligible
        let q = PRIMES[3];
        let mut rng = ChaCha20Rng::seed_from_u64(seed);

        let structured = StructuredCommitment::setup(
            StructuredParams {
                identity_rows: 4,
                message_dim: 8,
                randomness_dim: 24,
                ..StructuredParams::default()
            },
            &mut rng,
        )
        .unwrap();
        let ajtai = AjtaiCommitment::setup(
            AjtaiParams { message_dim: 8, randomness_dim: 8, ..AjtaiParams::default() },
            &mut rng,
        )
        .unwrap();

        let message = uniform_point(8, q, &mut rng);
        let mut other = message.coordinates.clone();
        other[index] = (other[index] + delta) % q;
        let other = LatticePoint::new(other);

        let (c, opening) = structured.commit_random(message.clone(), &mut rng).unwrap();
        prop_assert!(structured.verify(&c, &opening.message, &opening.randomness).unwrap());
        prop_assert!(!structured.verify(&c, &other, &opening.randomness).unwrap());

        let (c, opening) = ajtai.commit_random(message, &mut rng).unwrap();
        prop_assert!(ajtai.verify(&c, &opening.message, &opening.randomness).unwrap());
        prop_assert!(!ajtai.verify(&c, &other, &opening.randomness).unwrap());
    }

    #[test]
    fn test_group_correctness(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let scheme = DiscreteLogCommitment::setup(GroupParams::default(), &mut rng).unwrap();
        let message = scheme.random_element(&mut rng);

        let (c, opening) = scheme.commit_random(message, &mut rng).unwrap();
        prop_assert!(scheme.verify(&c, &opening.message, &opening.randomness).unwrap());
        let bogus = (message + 1) % scheme.modulus();
        prop_assert!(!scheme.verify(&c, &bogus, &opening.randomness).unwrap());
    }

    #[test]
    fn test_pedersen_correctness(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let scheme = PedersenCommitment::setup(GroupParams::default(), &mut rng).unwrap();
        let message = scheme.random_element(&mut rng);

        let (c, opening) = scheme.commit_random(message, &mut rng).unwrap();
        prop_assert!(scheme.verify(&c, &opening.message, &opening.randomness).unwrap());
        let bogus = (message + 1) % scheme.modulus();
        prop_assert!(!scheme.verify(&c, &bogus, &opening.randomness).unwrap());
    }
}
