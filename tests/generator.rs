//! End-to-end generator computation
//!
//! Known generators for small codes, error surfaces and output formats

use bchpoly::{
    compute_generator_polynomial, BchError, Coefficients, FieldElement, GeneratorConfig,
    Gf2Polynomial, OutputFormat,
};
use test_case::test_case;

#[test_case(7, 4, 1, &[1, 0, 1, 1] ; "hamming 7 4")]
#[test_case(7, 1, 3, &[1, 1, 1, 1, 1, 1, 1] ; "repetition 7 1")]
#[test_case(15, 11, 1, &[1, 0, 0, 1, 1] ; "bch 15 11")]
#[test_case(15, 7, 2, &[1, 1, 1, 0, 1, 0, 0, 0, 1] ; "bch 15 7")]
#[test_case(15, 5, 3, &[1, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1] ; "bch 15 5")]
#[test_case(15, 1, 7, &[1; 15] ; "repetition 15 1")]
#[test_case(31, 26, 1, &[1, 0, 0, 1, 0, 1] ; "bch 31 26")]
#[test_case(31, 21, 2, &[1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1] ; "bch 31 21")]
#[test_case(31, 16, 3, &[1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1] ; "bch 31 16")]
#[test_case(63, 51, 2, &[1, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1] ; "bch 63 51")]
fn known_generators(n: usize, k: usize, t: u32, expected: &[u32]) {
    let generator = compute_generator_polynomial(&GeneratorConfig::new(n, k)).unwrap();
    assert_eq!(generator.t, t);
    assert_eq!(generator.values(), expected);
    assert_eq!(generator.degree(), Some(n - k));
    assert_eq!(generator.design_distance(), 2 * t + 1);
}

#[test]
fn bch_15_5_renders_as_polynomial() {
    let generator = compute_generator_polynomial(&GeneratorConfig::new(15, 5)).unwrap();
    assert_eq!(generator.to_string(), "x^10 + x^8 + x^5 + x^4 + x^2 + x + 1");
}

#[test]
fn explicit_primitive_poly_changes_field() {
    // x^3 + x^2 + 1 gives the mirrored Hamming generator
    let config = GeneratorConfig::new(7, 4).with_primitive_poly(0b1101);
    let generator = compute_generator_polynomial(&config).unwrap();
    assert_eq!(generator.values(), vec![1, 1, 0, 1]);

    // Passing the default explicitly matches the implicit default
    let explicit = GeneratorConfig::new(15, 5).with_primitive_poly(0b1_0011);
    assert_eq!(
        compute_generator_polynomial(&explicit).unwrap(),
        compute_generator_polynomial(&GeneratorConfig::new(15, 5)).unwrap()
    );
}

#[test_case(0 ; "zero")]
#[test_case(3 ; "m equals two")]
#[test_case(8 ; "power of two")]
#[test_case(14 ; "even")]
#[test_case(100 ; "arbitrary")]
#[test_case(131_071 ; "m equals seventeen")]
fn rejects_invalid_length(n: usize) {
    let err = compute_generator_polynomial(&GeneratorConfig::new(n, 1)).unwrap_err();
    assert_eq!(err, BchError::InvalidLength { length: n });
}

#[test_case(0b1111 ; "cube of x plus one")]
#[test_case(0b1001 ; "x cubed plus one")]
#[test_case(0b1010 ; "no constant term")]
fn rejects_non_primitive_poly(poly: u32) {
    let config = GeneratorConfig::new(7, 4).with_primitive_poly(poly);
    let err = compute_generator_polynomial(&config).unwrap_err();
    assert_eq!(err, BchError::NotPrimitive { poly, degree: 3 });
}

#[test]
fn rejects_wrong_width_poly() {
    for poly in [0, 0b111, 0b1_0011] {
        let config = GeneratorConfig::new(7, 4).with_primitive_poly(poly);
        assert!(matches!(
            compute_generator_polynomial(&config),
            Err(BchError::InvalidPrimitivePolynomial(_))
        ));
    }
}

#[test_case(15, 6 ; "between t 3 and t 4")]
#[test_case(15, 10 ; "between t 1 and t 2")]
#[test_case(15, 15 ; "k equals n")]
#[test_case(15, 0 ; "k zero")]
#[test_case(31, 25 ; "below minimal redundancy")]
fn rejects_unrealizable_message_length(n: usize, k: usize) {
    let err = compute_generator_polynomial(&GeneratorConfig::new(n, k)).unwrap_err();
    assert_eq!(
        err,
        BchError::InvalidMessageLength {
            length: n,
            message_length: k
        }
    );
}

#[test]
fn length_is_checked_before_primitive_poly() {
    let config = GeneratorConfig::new(9, 4).with_primitive_poly(0b1111);
    assert!(matches!(
        compute_generator_polynomial(&config),
        Err(BchError::InvalidLength { length: 9 })
    ));
}

#[test]
fn output_formats_agree_numerically() {
    let binary = compute_generator_polynomial(&GeneratorConfig::new(31, 16)).unwrap();
    let field = compute_generator_polynomial(
        &GeneratorConfig::new(31, 16).with_output_format(OutputFormat::FieldElements),
    )
    .unwrap();

    assert_eq!(binary.values(), field.values());
    assert_eq!(binary.t, field.t);
    assert!(matches!(binary.coefficients, Coefficients::Binary(_)));
    match &field.coefficients {
        Coefficients::Field(elements) => {
            assert_eq!(elements[0], FieldElement::ONE);
            assert!(elements.iter().all(|e| *e == FieldElement::ZERO || *e == FieldElement::ONE));
        }
        other => panic!("expected field elements, got {:?}", other),
    }
    assert_eq!(binary.to_gf2(), field.to_gf2());
}

#[test]
fn boundary_lengths() {
    let smallest = compute_generator_polynomial(&GeneratorConfig::new(7, 4)).unwrap();
    assert_eq!(smallest.coefficients.len(), 4);

    // (65535, 65519) is the single-error-correcting code over GF(2^16)
    let largest = compute_generator_polynomial(&GeneratorConfig::new(65_535, 65_519)).unwrap();
    assert_eq!(largest.t, 1);
    assert_eq!(largest.to_gf2(), Gf2Polynomial::from_mask(0x1100B));
}
