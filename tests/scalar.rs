// SPDX short identifier: Unlicense

use ctproofs::common::*;

fn s(value: i64) -> Scalar {
    return Scalar::from(value)
}

#[test]
fn mod_pow_test() {
    assert_eq!(mod_pow(&s(10), &s(3), &s(7)).unwrap(), s(6));
    assert_eq!(mod_pow(&s(30), &s(2), &s(7)).unwrap(), s(4));

    //negative exponents go through the inverse
    assert_eq!(mod_pow(&s(16), &s(-1), &s(7)).unwrap(), s(4));
    assert_eq!(mod_pow(&s(34), &s(-2), &s(9)).unwrap(), s(7));
    assert_eq!(mod_pow(&s(3), &s(-1), &s(9)), Err(ArithmeticError::NotInvertible));
}

#[test]
fn mod_inverse_test() {
    assert_eq!(mod_inverse(&s(3), &s(7)).unwrap(), s(5));

    let y: Scalar = "103823382860325249552741530200099120077084118788867728791742258217664299339569"
        .parse().unwrap();
    let expected: Scalar = "38397371868935917445400134055424677162505875368971619911110421656148020877351"
        .parse().unwrap();
    assert_eq!(mod_inverse(&y, &ORDER).unwrap(), expected);

    //everything is 0 modulo 1
    assert_eq!(mod_inverse(&s(5), &s(1)).unwrap(), s(0));

    assert_eq!(mod_inverse(&s(3), &s(6)), Err(ArithmeticError::NotInvertible));
    assert_eq!(mod_inverse(&s(3), &s(0)), Err(ArithmeticError::InvalidModulus));
}

#[test]
fn modulo_test() {
    assert_eq!(modulo(&s(16), &s(7)).unwrap(), s(2));
    assert_eq!(modulo(&s(-1), &s(7)).unwrap(), s(6));
    assert_eq!(modulo(&s(1), &s(-7)), Err(ArithmeticError::InvalidModulus));

    assert_eq!(reduce(&-s(1)), &*ORDER - s(1));
    assert_eq!(reduce(&ORDER), s(0));
}

#[test]
fn decompose_test() {
    assert_eq!(decompose(&s(925), 10, 3).unwrap(), vec![5, 2, 9]);
    assert_eq!(decompose(&s(5), 2, 4).unwrap(), vec![1, 0, 1, 0]);

    //higher digits are dropped
    assert_eq!(decompose(&s(256), 2, 8).unwrap(), vec![0; 8]);
    //negative values decompose through Euclidean division
    assert_eq!(decompose(&s(-1), 2, 4).unwrap(), vec![1; 4]);

    assert_eq!(decompose(&s(5), 1, 4), Err(ArithmeticError::InvalidBase));
}

#[test]
fn random_scalar_test() {
    for _ in 0..32 {
        let scalar = random_scalar();
        assert!(scalar >= s(0) && scalar < *ORDER);
    }
}
