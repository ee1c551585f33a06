//! Minimal polynomials of cyclotomic cosets
//!
//! For a coset C the minimal polynomial is ∏_{i ∈ C} (x + α^i). The product is
//! expanded with GF(2^m) coefficients; closure of C under squaring forces every
//! coefficient into the prime subfield {0, 1}.

use tracing::trace;

use super::{FiniteField, Gf2Polynomial};
use crate::{cosets::CyclotomicCoset, BchError};

/// Minimal polynomial over GF(2) of the roots α^i, i ∈ `coset`.
///
/// The degree equals the coset size. A coefficient outside {0, 1} means the
/// field tables or the coset are inconsistent and is reported as
/// [`BchError::FieldConsistencyError`].
pub fn minimal_polynomial(
    field: &FiniteField,
    coset: &CyclotomicCoset,
) -> Result<Gf2Polynomial, BchError> {
    // Ascending powers, coefficients in GF(2^m)
    let mut coeffs: Vec<u32> = vec![1];

    for &exponent in coset.members() {
        let root = field.antilog(exponent);
        let mut next = vec![0u32; coeffs.len() + 1];
        for (power, &c) in coeffs.iter().enumerate() {
            // x · c x^power
            next[power + 1] = field.add(next[power + 1], c);
            // α^i · c x^power
            next[power] = field.add(next[power], field.mul(root, c));
        }
        coeffs = next;
    }

    let mut poly = Gf2Polynomial::zero();
    for (power, &c) in coeffs.iter().enumerate() {
        match c {
            0 => {}
            1 => poly.set_coeff(power, true),
            other => {
                return Err(BchError::FieldConsistencyError(format!(
                    "coefficient of x^{} in minimal polynomial of coset {} is {:#b}",
                    power,
                    coset.representative(),
                    other
                )))
            }
        }
    }

    trace!(
        representative = coset.representative(),
        polynomial = %poly,
        "minimal polynomial"
    );
    Ok(poly)
}
