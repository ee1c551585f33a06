//! Polynomials over GF(2)
//!
//! Coefficients are packed 64 per word, bit i of the polynomial holding the
//! coefficient of x^i. Products are XORs of shifted copies, so a generator of
//! degree ~65000 costs a few thousand words per factor.

use std::fmt;
use std::ops::Mul;

const WORD_BITS: usize = 64;

/// Polynomial with coefficients in {0, 1}
///
/// Kept normalized: no trailing all-zero words.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Gf2Polynomial {
    words: Vec<u64>,
}

impl Gf2Polynomial {
    /// The zero polynomial
    pub fn zero() -> Self {
        Self { words: Vec::new() }
    }

    /// The constant 1
    pub fn one() -> Self {
        Self { words: vec![1] }
    }

    /// x^power
    pub fn monomial(power: usize) -> Self {
        let mut poly = Self::zero();
        poly.set_coeff(power, true);
        poly
    }

    /// x^n − 1, which over GF(2) is x^n + 1
    pub fn x_pow_n_minus_one(n: usize) -> Self {
        let mut poly = Self::monomial(n);
        let constant = !poly.coeff(0);
        poly.set_coeff(0, constant);
        poly
    }

    /// Build from coefficients listed highest power first; nonzero entries count as 1
    pub fn from_descending(coefficients: &[u8]) -> Self {
        let mut poly = Self::zero();
        let top = coefficients.len();
        for (idx, &c) in coefficients.iter().enumerate() {
            if c != 0 {
                poly.set_coeff(top - 1 - idx, true);
            }
        }
        poly
    }

    /// Build from a bitmask, bit i = coefficient of x^i
    pub fn from_mask(mask: u64) -> Self {
        let mut poly = Self { words: vec![mask] };
        poly.normalize();
        poly
    }

    /// Degree, or `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.words
            .last()
            .map(|&top| (self.words.len() - 1) * WORD_BITS + (63 - top.leading_zeros() as usize))
    }

    /// True for the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of nonzero coefficients
    pub fn weight(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Coefficient of x^power
    pub fn coeff(&self, power: usize) -> bool {
        self.words
            .get(power / WORD_BITS)
            .map_or(false, |w| (w >> (power % WORD_BITS)) & 1 == 1)
    }

    /// Set the coefficient of x^power.
    pub fn set_coeff(&mut self, power: usize, value: bool) {
        let word = power / WORD_BITS;
        if value {
            if self.words.len() <= word {
                self.words.resize(word + 1, 0);
            }
            self.words[word] |= 1 << (power % WORD_BITS);
        } else if word < self.words.len() {
            self.words[word] &= !(1 << (power % WORD_BITS));
            self.normalize();
        }
    }

    /// Coefficients highest power first, left-padded with zeros to `width`.
    ///
    /// `width` below degree + 1 is raised to degree + 1 so no term is lost.
    pub fn to_descending(&self, width: usize) -> Vec<u8> {
        let needed = self.degree().map_or(0, |d| d + 1);
        let width = width.max(needed);
        (0..width)
            .rev()
            .map(|power| u8::from(self.coeff(power)))
            .collect()
    }

    /// Add (XOR) `other · x^shift` into `self`.
    fn xor_shifted(&mut self, other: &Self, shift: usize) {
        if other.is_zero() {
            return;
        }
        let word_shift = shift / WORD_BITS;
        let bit_shift = shift % WORD_BITS;
        let needed = other.words.len() + word_shift + 1;
        if self.words.len() < needed {
            self.words.resize(needed, 0);
        }

        for (idx, &word) in other.words.iter().enumerate() {
            let target = idx + word_shift;
            self.words[target] ^= word << bit_shift;
            if bit_shift != 0 {
                self.words[target + 1] ^= word >> (WORD_BITS - bit_shift);
            }
        }
        self.normalize();
    }

    /// Product over GF(2)
    pub fn multiply(&self, other: &Self) -> Self {
        // Iterate over the sparser operand's set bits
        let (dense, sparse) = if self.weight() >= other.weight() {
            (self, other)
        } else {
            (other, self)
        };

        let mut product = Self::zero();
        for (idx, &word) in sparse.words.iter().enumerate() {
            let mut bits = word;
            while bits != 0 {
                let bit = bits.trailing_zeros() as usize;
                product.xor_shifted(dense, idx * WORD_BITS + bit);
                bits &= bits - 1;
            }
        }
        product
    }

    /// Remainder of division by `divisor`; `None` when `divisor` is zero
    pub fn rem(&self, divisor: &Self) -> Option<Self> {
        let divisor_degree = divisor.degree()?;
        let mut remainder = self.clone();
        while let Some(degree) = remainder.degree() {
            if degree < divisor_degree {
                break;
            }
            remainder.xor_shifted(divisor, degree - divisor_degree);
        }
        Some(remainder)
    }

    /// True when `self` divides `other` exactly
    pub fn divides(&self, other: &Self) -> bool {
        other.rem(self).map_or(false, |r| r.is_zero())
    }

    fn normalize(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

impl Mul for &Gf2Polynomial {
    type Output = Gf2Polynomial;

    fn mul(self, rhs: Self) -> Gf2Polynomial {
        self.multiply(rhs)
    }
}

impl fmt::Debug for Gf2Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf2Polynomial({})", self)
    }
}

impl fmt::Display for Gf2Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(degree) = self.degree() else {
            return write!(f, "0");
        };

        let mut first = true;
        for power in (0..=degree).rev().filter(|&p| self.coeff(p)) {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match power {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
        }
        Ok(())
    }
}
