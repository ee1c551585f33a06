//! Finite field GF(2^m) for 3 ≤ m ≤ 16
//!
//! Elements are m-bit integers; addition is XOR and multiplication goes
//! through discrete log tables relative to the primitive root α = x.

use std::fmt;

use tracing::debug;

use crate::BchError;

/// Smallest supported extension degree
pub const MIN_DEGREE: u32 = 3;

/// Largest supported extension degree
pub const MAX_DEGREE: u32 = 16;

/// Default primitive polynomials for m = 3..=16, as (m+1)-bit masks
const DEFAULT_PRIMITIVE_POLYS: [u32; 14] = [
    0b1011,                // x^3 + x + 1
    0b1_0011,              // x^4 + x + 1
    0b10_0101,             // x^5 + x^2 + 1
    0b100_0011,            // x^6 + x + 1
    0b1000_1001,           // x^7 + x^3 + 1
    0b1_0001_1101,         // x^8 + x^4 + x^3 + x^2 + 1
    0b10_0001_0001,        // x^9 + x^4 + 1
    0b100_0000_1001,       // x^10 + x^3 + 1
    0b1000_0000_0101,      // x^11 + x^2 + 1
    0b1_0000_0101_0011,    // x^12 + x^6 + x^4 + x + 1
    0b10_0000_0001_1011,   // x^13 + x^4 + x^3 + x + 1
    0b100_0100_0100_0011,  // x^14 + x^10 + x^6 + x + 1
    0b1000_0000_0000_0011, // x^15 + x + 1
    0x1100B,               // x^16 + x^12 + x^3 + x + 1
];

/// Default primitive polynomial for GF(2^m), or `None` outside 3..=16.
pub fn default_primitive_poly(degree: u32) -> Option<u32> {
    if (MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
        Some(DEFAULT_PRIMITIVE_POLYS[(degree - MIN_DEGREE) as usize])
    } else {
        None
    }
}

/// Extension degree m for a code length N = 2^m − 1.
pub fn degree_for_length(length: usize) -> Result<u32, BchError> {
    let size = length.checked_add(1).filter(|s| s.is_power_of_two());
    match size.map(|s| s.trailing_zeros()) {
        Some(degree) if (MIN_DEGREE..=MAX_DEGREE).contains(&degree) => Ok(degree),
        _ => Err(BchError::InvalidLength { length }),
    }
}

/// Primitivity test over GF(2).
///
/// `poly` must have degree exactly `degree` and x must have multiplicative
/// order 2^m − 1 modulo `poly`. No field tables are consulted.
pub fn is_primitive(poly: u32, degree: u32) -> bool {
    if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) || poly >> degree != 1 {
        return false;
    }

    let order = (1u32 << degree) - 1;
    let overflow = 1u32 << degree;
    let mut residue = 1u32;

    for step in 1..=order {
        residue <<= 1;
        if residue & overflow != 0 {
            residue ^= poly;
        }
        if residue == 1 {
            return step == order;
        }
    }

    false
}

/// An element of GF(2^m), tagged so typed consumers can tell it from a plain bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct FieldElement(u32);

impl FieldElement {
    /// Additive identity
    pub const ZERO: FieldElement = FieldElement(0);
    /// Multiplicative identity
    pub const ONE: FieldElement = FieldElement(1);

    /// Wrap an m-bit value
    pub const fn new(value: u32) -> Self {
        FieldElement(value)
    }

    /// Underlying bit representation
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finite field GF(2^m) with log/antilog tables
///
/// Immutable after construction; every computation borrows one explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct FiniteField {
    degree: u32,
    /// Primitive polynomial, (m+1)-bit mask
    primitive_poly: u32,
    /// `log[e]` for nonzero `e`; slot 0 is unused
    log: Vec<u32>,
    /// `antilog[i] = α^i` for `i < N`
    antilog: Vec<u32>,
}

impl FiniteField {
    /// Create GF(2^m) under the default primitive polynomial
    pub fn new(degree: u32) -> Result<Self, BchError> {
        let poly = default_primitive_poly(degree).ok_or(BchError::InvalidLength {
            length: (1usize << degree.min(31)).saturating_sub(1),
        })?;
        Self::build(degree, poly)
    }

    /// Create GF(2^m) under a caller-supplied primitive polynomial
    pub fn with_primitive_poly(degree: u32, poly: u32) -> Result<Self, BchError> {
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
            return Err(BchError::InvalidLength {
                length: (1usize << degree.min(31)).saturating_sub(1),
            });
        }
        if poly >> degree != 1 {
            return Err(BchError::InvalidPrimitivePolynomial(format!(
                "{:#b} is not a {}-bit polynomial for GF(2^{})",
                poly,
                degree + 1,
                degree
            )));
        }
        if !is_primitive(poly, degree) {
            return Err(BchError::NotPrimitive { poly, degree });
        }
        Self::build(degree, poly)
    }

    /// Walk α^0, α^1, … recording both directions of the mapping
    fn build(degree: u32, poly: u32) -> Result<Self, BchError> {
        let order = (1usize << degree) - 1;
        let overflow = 1u32 << degree;

        let mut log = vec![0u32; order + 1];
        let mut antilog = Vec::with_capacity(order);
        let mut element = 1u32;

        for exponent in 0..order {
            antilog.push(element);
            log[element as usize] = exponent as u32;
            element <<= 1;
            if element & overflow != 0 {
                element ^= poly;
            }
        }

        // α^N must land back on 1
        if element != 1 {
            return Err(BchError::FieldConsistencyError(format!(
                "α^{} = {:#b} under {:#b}, expected 1",
                order, element, poly
            )));
        }

        let field = Self {
            degree,
            primitive_poly: poly,
            log,
            antilog,
        };
        debug!(
            degree,
            primitive_poly = poly,
            fingerprint = %field.fingerprint().to_hex(),
            "built field tables"
        );
        Ok(field)
    }

    /// Extension degree m
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Primitive polynomial bitmask
    pub fn primitive_poly(&self) -> u32 {
        self.primitive_poly
    }

    /// Multiplicative group order N = 2^m − 1 (also the code length)
    pub fn order(&self) -> u32 {
        self.antilog.len() as u32
    }

    /// Number of elements 2^m
    pub fn size(&self) -> usize {
        1 << self.degree
    }

    /// Discrete log of a nonzero element; `None` for zero or out-of-range input
    pub fn log(&self, element: u32) -> Option<u32> {
        if element == 0 || element as usize >= self.log.len() {
            return None;
        }
        Some(self.log[element as usize])
    }

    /// α^exponent, with the exponent taken mod N
    pub fn antilog(&self, exponent: u32) -> u32 {
        self.antilog[(exponent % self.order()) as usize]
    }

    /// Add two field elements (XOR for characteristic 2)
    pub fn add(&self, a: u32, b: u32) -> u32 {
        a ^ b
    }

    /// Multiply two field elements via the log tables.
    ///
    /// Both operands must be below 2^m. Out-of-range values have no logarithm
    /// and multiply to 0 in release builds; debug builds panic instead.
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        debug_assert!(
            (a as usize) < self.size() && (b as usize) < self.size(),
            "operands {} and {} outside GF(2^{})",
            a,
            b,
            self.degree
        );
        match (self.log(a), self.log(b)) {
            (Some(la), Some(lb)) => self.antilog(la + lb),
            _ => 0,
        }
    }

    /// Square, i.e. the Frobenius map
    pub fn square(&self, a: u32) -> u32 {
        self.mul(a, a)
    }

    /// Digest of the field tables, stable across reconstructions
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.degree.to_le_bytes());
        hasher.update(&self.primitive_poly.to_le_bytes());
        for value in self.antilog.iter().chain(self.log.iter()) {
            hasher.update(&value.to_le_bytes());
        }
        hasher.finalize()
    }
}

impl fmt::Debug for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteField")
            .field("degree", &self.degree)
            .field("primitive_poly", &format_args!("{:#b}", self.primitive_poly))
            .finish()
    }
}
