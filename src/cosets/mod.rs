//! Cyclotomic coset decomposition
//!
//! Partitions the exponents {0, …, N−1} into orbits of the doubling map
//! s ↦ 2s mod N. Each orbit is the exponent set of one conjugacy class of
//! roots and therefore of one minimal polynomial.

use bitvec::prelude::*;
use tracing::trace;

use crate::algebra::FiniteField;

/// Orbit of an exponent under doubling modulo N
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct CyclotomicCoset {
    /// Members in orbit order: s, 2s, 4s, … (mod N)
    members: Vec<u32>,
}

impl CyclotomicCoset {
    /// Smallest member, which is also the first in orbit order
    pub fn representative(&self) -> u32 {
        self.members[0]
    }

    /// Members in orbit order
    pub fn members(&self) -> &[u32] {
        &self.members
    }

    /// Coset size, equal to the degree of its minimal polynomial
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; every coset holds its representative
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Membership test
    pub fn contains(&self, exponent: u32) -> bool {
        self.members.contains(&exponent)
    }

    /// Wrap an arbitrary exponent list, bypassing orbit closure
    #[cfg(test)]
    pub(crate) fn from_members(members: Vec<u32>) -> Self {
        Self { members }
    }
}

/// Cosets whose roots α^i a capability-`t` generator must contain:
/// representative in 1..=2t, in the input order.
pub fn select_for_capability(
    cosets: &[CyclotomicCoset],
    t: u32,
) -> impl Iterator<Item = &CyclotomicCoset> {
    let bound = 2 * u64::from(t);
    cosets.iter().filter(move |c| {
        let rep = u64::from(c.representative());
        rep != 0 && rep <= bound
    })
}

/// Decompose the exponents of `field` into cyclotomic cosets.
///
/// Cosets come out in increasing order of representative, starting with {0}.
pub fn decompose(field: &FiniteField) -> Vec<CyclotomicCoset> {
    let order = field.order();
    let mut assigned = bitvec![0; order as usize];
    let mut cosets = Vec::new();

    for start in 0..order {
        if assigned[start as usize] {
            continue;
        }

        // Scanning upward, the first unassigned exponent is its orbit's minimum
        let mut members = Vec::new();
        let mut exponent = start;
        loop {
            assigned.set(exponent as usize, true);
            members.push(exponent);
            exponent = (exponent * 2) % order;
            if exponent == start {
                break;
            }
        }

        trace!(representative = start, size = members.len(), "coset");
        cosets.push(CyclotomicCoset { members });
    }

    cosets
}
