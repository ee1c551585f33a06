//! Generator assembly
//!
//! g(x) = ∏ m_C(x) over the cosets C whose representative lies in 1..=2t,
//! i.e. the least common multiple of the minimal polynomials of α¹ … α²ᵗ.

use tracing::debug;

use super::{minimal_polynomial, FiniteField, Gf2Polynomial};
use crate::{
    cosets::{select_for_capability, CyclotomicCoset},
    BchError,
};

/// Combines minimal polynomials into a generator polynomial
#[derive(Debug)]
pub struct GeneratorAssembler<'a> {
    field: &'a FiniteField,
    /// Decomposition of `field`, ordered by representative
    cosets: &'a [CyclotomicCoset],
}

impl<'a> GeneratorAssembler<'a> {
    /// Create assembler over a field and its coset decomposition
    pub fn new(field: &'a FiniteField, cosets: &'a [CyclotomicCoset]) -> Self {
        Self { field, cosets }
    }

    /// Cosets contributing roots for capability `t`, in representative order
    pub fn selected_cosets(&self, t: u32) -> impl Iterator<Item = &'a CyclotomicCoset> {
        select_for_capability(self.cosets, t)
    }

    /// Generator polynomial for capability `t`.
    ///
    /// The product's degree must equal the total size of the selected cosets;
    /// anything else is a [`BchError::FieldConsistencyError`].
    pub fn assemble(&self, t: u32) -> Result<Gf2Polynomial, BchError> {
        let mut generator = Gf2Polynomial::one();
        let mut expected_degree = 0usize;
        let mut factors = 0usize;

        for coset in self.selected_cosets(t) {
            let minimal = minimal_polynomial(self.field, coset)?;
            generator = generator.multiply(&minimal);
            expected_degree += coset.len();
            factors += 1;
        }

        check_degree(t, &generator, expected_degree)?;
        debug!(t, factors, degree = expected_degree, "assembled generator");
        Ok(generator)
    }
}

/// Reject a generator whose degree is not the summed coset size.
fn check_degree(t: u32, generator: &Gf2Polynomial, expected: usize) -> Result<(), BchError> {
    if generator.degree() != Some(expected) {
        return Err(BchError::FieldConsistencyError(format!(
            "generator for t = {} has degree {:?}, expected {}",
            t,
            generator.degree(),
            expected
        )));
    }
    Ok(())
}
