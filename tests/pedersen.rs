// SPDX short identifier: Unlicense

use ctproofs::{
    common::*,
    hashes::seeds::SEED_H
};

fn pedersen() -> PedersenGens {
    return PedersenGens::new(SEED_H).unwrap()
}

#[test]
fn generators_test() {
    let gens = pedersen();
    assert_eq!(gens.g, Point::generator());
    assert_eq!(gens.h, map_to_group(SEED_H).unwrap());
    assert_ne!(gens.g, gens.h);
}

#[test]
fn homomorphism_test() {
    let gens = pedersen();
    let a = random_scalar();
    let b = random_scalar();
    let r1 = random_scalar();
    let r2 = random_scalar();

    let sum = &gens.commit(&a, &r1).to_point() + &gens.commit(&b, &r2).to_point();
    assert_eq!(Commitment(sum), gens.commit(&(&a + &b), &(&r1 + &r2)));

    let commitments = vec![gens.commit(&a, &r1), gens.commit(&b, &r2)];
    assert_eq!(commitments.into_iter().sum::<Commitment>(), gens.commit(&(&a + &b), &(&r1 + &r2)));
}

#[test]
fn verify_balance_test() {
    let gens = pedersen();
    let bx = random_scalar();
    let by = random_scalar();
    let bz = random_scalar();

    let cx = gens.commit(&Scalar::from(30), &bx);
    let cy = gens.commit(&Scalar::from(20), &by);
    let cz = gens.commit(&Scalar::from(10), &bz);
    let difference = &bx - (&by + &bz);
    assert!(Commitment::verify_balance(&gens, &[cx.clone()], &[cy.clone(), cz.clone()], &difference));

    //an output value changes without its blinding factor being adjusted
    let cz_changed = gens.commit(&Scalar::from(11), &bz);
    assert!(!Commitment::verify_balance(&gens, &[cx.clone()], &[cy.clone(), cz_changed], &difference));

    //wrong blinding difference
    assert!(!Commitment::verify_balance(&gens, &[cx], &[cy, cz], &(&difference + Scalar::from(1))));
}

#[test]
fn is_balanced_test() {
    let gens = pedersen();
    let b1 = random_scalar();
    let b2 = random_scalar();

    //30 in, 25 out, fee of 5
    let input = gens.commit(&Scalar::from(30), &(&b1 + &b2));
    let outputs = vec![gens.commit(&Scalar::from(20), &b1), gens.commit(&Scalar::from(5), &b2)];
    assert!(Commitment::is_balanced(&gens, &[input.clone()], &outputs, &Scalar::from(5)));
    assert!(!Commitment::is_balanced(&gens, &[input], &outputs, &Scalar::from(4)));
}
