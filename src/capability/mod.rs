//! Error-correcting capability search
//!
//! The generator for capability t has degree r(t) = Σ |C| over cosets with
//! representative in 1..=2t. r is non-decreasing in t, so the capability for a
//! message length K is found by walking t upward until r(t) passes N − K.

use tracing::debug;

use crate::{
    algebra::FiniteField,
    cosets::{select_for_capability, CyclotomicCoset},
    BchError,
};

/// One realizable narrow-sense binary BCH code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct CodeParameters {
    /// Code length N
    pub length: usize,
    /// Message length K
    pub message_length: usize,
    /// Largest capability t giving this K
    pub t: u32,
}

/// Capability search over one field's coset decomposition
#[derive(Debug)]
pub struct CapabilitySearch<'a> {
    length: usize,
    /// Decomposition ordered by representative
    cosets: &'a [CyclotomicCoset],
}

impl<'a> CapabilitySearch<'a> {
    /// Create search over a field and its coset decomposition
    pub fn new(field: &FiniteField, cosets: &'a [CyclotomicCoset]) -> Self {
        Self {
            length: field.order() as usize,
            cosets,
        }
    }

    /// Largest meaningful capability ⌊(N − 1) / 2⌋
    pub fn max_capability(&self) -> u32 {
        ((self.length - 1) / 2) as u32
    }

    /// Redundancy r(t): generator degree for capability `t`
    pub fn redundancy(&self, t: u32) -> usize {
        select_for_capability(self.cosets, t)
            .map(CyclotomicCoset::len)
            .sum()
    }

    /// (t, r(t)) for t = 1, 2, …, max_capability, computed in one pass
    fn redundancy_profile(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        let mut remaining = self
            .cosets
            .iter()
            .filter(|c| c.representative() != 0)
            .peekable();
        let mut redundancy = 0usize;

        (1..=self.max_capability()).map(move |t| {
            let bound = 2 * u64::from(t);
            while let Some(coset) = remaining.next_if(|c| u64::from(c.representative()) <= bound) {
                redundancy += coset.len();
            }
            (t, redundancy)
        })
    }

    /// Largest t whose generator has degree exactly N − `message_length`.
    ///
    /// Fails with [`BchError::InvalidMessageLength`] when K is outside 1..N or
    /// r(t) skips over N − K.
    pub fn capability(&self, message_length: usize) -> Result<u32, BchError> {
        let invalid = BchError::InvalidMessageLength {
            length: self.length,
            message_length,
        };
        if message_length == 0 || message_length >= self.length {
            return Err(invalid);
        }

        let target = self.length - message_length;
        let mut found = None;
        for (t, redundancy) in self.redundancy_profile() {
            if redundancy == target {
                found = Some(t);
            } else if redundancy > target {
                break;
            }
        }

        let t = found.ok_or(invalid)?;
        debug!(length = self.length, message_length, t, "capability search settled");
        Ok(t)
    }

    /// Every realizable (N, K, t), ordered by increasing t
    pub fn valid_codes(&self) -> Vec<CodeParameters> {
        let mut codes: Vec<CodeParameters> = Vec::new();
        for (t, redundancy) in self.redundancy_profile() {
            let message_length = self.length - redundancy;
            match codes.last_mut() {
                Some(last) if last.message_length == message_length => last.t = t,
                _ => codes.push(CodeParameters {
                    length: self.length,
                    message_length,
                    t,
                }),
            }
        }
        codes
    }
}
