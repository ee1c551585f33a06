//! Algebra over GF(2^m) and GF(2)
//!
//! - Log/antilog field tables under a primitive polynomial
//! - Bit-packed GF(2) polynomials
//! - Minimal polynomials of cyclotomic cosets
//! - Generator assembly from the selected minimal polynomials

mod combiner;
mod field;
mod minimal;
mod polynomial;

pub use combiner::GeneratorAssembler;
pub use field::{
    default_primitive_poly, degree_for_length, is_primitive, FieldElement, FiniteField,
    MAX_DEGREE, MIN_DEGREE,
};
pub use minimal::minimal_polynomial;
pub use polynomial::Gf2Polynomial;
