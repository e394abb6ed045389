// SPDX short identifier: Unlicense

use ctproofs::{
    common::*,
    rangeproof::{
        BulletproofRangeProof,
        RangeConfig,
        RangeParameters,
        DEFAULT_UPPER_BOUND
    }
};

fn parameters(upper_bound: i64) -> RangeParameters {
    return RangeParameters::setup(&RangeConfig::new(0, upper_bound)).unwrap()
}

#[test]
fn bulletproof_test() {
    let params = parameters(1 << 8);
    assert_eq!(params.n(), 8);

    for value in [0, 1, 77, 128, 255] {
        let (gamma, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(value)).unwrap();
        assert_eq!(proof.commitment(), params.pedersen_gens().commit(&Scalar::from(value), &gamma));
        assert_eq!(proof.inner_product_proof().l_vec().len(), 3);
        assert!(proof.verify(&params).unwrap());
    }
}

#[test]
fn default_config_test() {
    let config = RangeConfig::default();
    assert_eq!(config.lower_bound, 0);
    assert_eq!(config.upper_bound, DEFAULT_UPPER_BOUND);

    let params = RangeParameters::setup(&config).unwrap();
    assert_eq!(params.n(), 32);
    assert_eq!(params.gg().len(), 32);
    assert_eq!(params.hh().len(), 32);

    let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(u32::MAX)).unwrap();
    assert!(proof.verify(&params).unwrap());
}

#[test]
fn out_of_range_test() {
    let params = parameters(1 << 8);

    //too large, only the low bits are proven
    let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(256)).unwrap();
    assert!(!proof.verify(&params).unwrap());
    let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(1000)).unwrap();
    assert!(!proof.verify(&params).unwrap());

    //negative
    let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(-1)).unwrap();
    assert!(!proof.verify(&params).unwrap());
}

#[test]
fn prove_with_blinding_test() {
    let params = parameters(1 << 16);
    let gamma = random_scalar();
    let value = Scalar::from(40000);

    let proof = BulletproofRangeProof::prove_with_blinding(&params, &value, &gamma).unwrap();
    assert_eq!(proof.commitment(), params.pedersen_gens().commit(&value, &gamma));
    assert!(proof.verify(&params).unwrap());

    //the remaining randomness is fresh for every proof
    let other = BulletproofRangeProof::prove_with_blinding(&params, &value, &gamma).unwrap();
    assert_eq!(other.commitment(), proof.commitment());
    assert_ne!(other, proof);
}

#[test]
fn tampered_proof_test() {
    let params = parameters(1 << 8);
    let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(99)).unwrap();
    let encoded = serde_json::to_value(&proof).unwrap();

    let tamper = |field: &str, value: serde_json::Value| {
        let mut tampered = encoded.clone();
        tampered[field] = value;
        let tampered: BulletproofRangeProof = serde_json::from_value(tampered).unwrap();
        return tampered.verify(&params).unwrap()
    };

    let tprime = (proof.tprime() + Scalar::from(1)).to_string();
    assert!(!tamper("Tprime", serde_json::json!(tprime)));
    let taux = (proof.taux() + Scalar::from(1)).to_string();
    assert!(!tamper("Taux", serde_json::json!(taux)));
    let mu = (proof.mu() + Scalar::from(1)).to_string();
    assert!(!tamper("Mu", serde_json::json!(mu)));

    for field in ["V", "A", "S", "T1", "T2", "Commit"] {
        assert!(!tamper(field, serde_json::to_value(random_point()).unwrap()));
    }

    //a commitment to another value
    let (_, other) = BulletproofRangeProof::prove(&params, &Scalar::from(100)).unwrap();
    assert!(!tamper("V", serde_json::to_value(other.commitment().to_point()).unwrap()));

    assert!(tamper("V", encoded["V"].clone()));
}

#[test]
fn swapped_inner_product_test() {
    let params = parameters(1 << 8);
    let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(99)).unwrap();
    let (_, other) = BulletproofRangeProof::prove(&params, &Scalar::from(99)).unwrap();
    assert!(other.verify(&params).unwrap());

    //a valid inner product proof, but for another range proof's commitment
    let mut encoded = serde_json::to_value(&proof).unwrap();
    encoded["Proofip"] = serde_json::to_value(&other).unwrap()["Proofip"].clone();
    let swapped: BulletproofRangeProof = serde_json::from_value(encoded).unwrap();
    assert!(!swapped.verify(&params).unwrap());
}

#[test]
fn delta_test() {
    let params = parameters(1 << 8);

    //(3 - 9) * 255 - 27 * 255
    let delta = params.delta(&Scalar::from(2), &Scalar::from(3)).unwrap();
    assert_eq!(delta, reduce(&Scalar::from(-8415)));
}

#[test]
fn setup_test() {
    assert_eq!(
        RangeParameters::setup(&RangeConfig::new(10, 5)),
        Err(RangeProofError::InvalidBounds)
    );
    assert_eq!(
        RangeParameters::setup(&RangeConfig::new(0, 1)),
        Err(RangeProofError::InvalidBounds)
    );
    //3 bits
    assert_eq!(
        RangeParameters::setup(&RangeConfig::new(0, 8)),
        Err(RangeProofError::NotPowerOfTwo(3))
    );

    //floor(log2(upper_bound))
    assert_eq!(parameters(2).n(), 1);
    assert_eq!(parameters(31).n(), 4);

    //deterministic
    assert_eq!(parameters(16), parameters(16));

    //other seeds give other generators
    let config = RangeConfig {
        seed_h: "another seed".to_string(),
        ..RangeConfig::new(0, 16)
    };
    let params = RangeParameters::setup(&config).unwrap();
    assert_ne!(params.hh(), parameters(16).hh());
    assert_eq!(params.u(), parameters(16).u());
}

#[test]
fn single_bit_test() {
    let params = parameters(2);
    for value in [0, 1] {
        let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(value)).unwrap();
        assert!(proof.verify(&params).unwrap());
    }
    let (_, proof) = BulletproofRangeProof::prove(&params, &Scalar::from(2)).unwrap();
    assert!(!proof.verify(&params).unwrap());
}

#[test]
fn mismatched_parameters_test() {
    let (_, proof) = BulletproofRangeProof::prove(&parameters(1 << 8), &Scalar::from(5)).unwrap();
    assert_eq!(proof.verify(&parameters(1 << 16)), Err(RangeProofError::Malformed));

    //same width, different generators
    let config = RangeConfig {
        seed_u: "another seed".to_string(),
        ..RangeConfig::new(0, 1 << 8)
    };
    let other = RangeParameters::setup(&config).unwrap();
    assert!(!proof.verify(&other).unwrap());
}

#[test]
fn concurrent_test() {
    let params = parameters(1 << 8);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64).map(|i| {
            let params = &params;
            scope.spawn(move || {
                let value = Scalar::from(i * 50);
                let (_, proof) = BulletproofRangeProof::prove(params, &value).unwrap();
                return proof.verify(params).unwrap()
            })
        }).collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
