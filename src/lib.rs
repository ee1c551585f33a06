//! # Binary BCH generator polynomials
//!
//! This library computes the generator polynomial of a narrow-sense binary
//! BCH code of length N = 2^m − 1 and message length K.
//!
//! ## Pipeline
//!
//! 1. **Field construction**: log/antilog tables for GF(2^m) under a primitive polynomial
//! 2. **Coset decomposition**: partition {0, …, N−1} into cyclotomic cosets
//! 3. **Capability search**: find the largest t whose design roots α¹…α²ᵗ give degree N − K
//! 4. **Assembly**: multiply the minimal polynomials of the selected cosets over GF(2)
//!
//! Every step takes an explicit [`FiniteField`]; nothing is cached between calls.
//!
//! ## Usage Example
//!
//! ```
//! use bchpoly::{compute_generator_polynomial, GeneratorConfig};
//!
//! let generator = compute_generator_polynomial(&GeneratorConfig::new(15, 5))?;
//! assert_eq!(generator.t, 3);
//! assert_eq!(generator.values(), vec![1, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1]);
//! # Ok::<(), bchpoly::BchError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra;    // Field arithmetic, GF(2) polynomials, minimal polynomials
pub mod capability; // Error-correcting capability search
pub mod cosets;     // Cyclotomic coset decomposition
/// Python bindings for exposing the generator computation to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use algebra::{
    default_primitive_poly, degree_for_length, is_primitive, minimal_polynomial,
    FieldElement, FiniteField, GeneratorAssembler, Gf2Polynomial,
};
pub use capability::{CapabilitySearch, CodeParameters};
pub use cosets::{decompose, select_for_capability, CyclotomicCoset};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while computing a generator polynomial
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BchError {
    /// Code length is not 2^m − 1 for a supported m
    #[error("invalid code length {length}: expected 2^m - 1 with m in 3..=16")]
    InvalidLength {
        /// Requested code length N
        length: usize,
    },

    /// Primitive polynomial candidate is malformed or has the wrong width
    #[error("invalid primitive polynomial: {0}")]
    InvalidPrimitivePolynomial(String),

    /// Candidate does not generate the full multiplicative group
    #[error("polynomial {poly:#b} is not primitive over GF(2^{degree})")]
    NotPrimitive {
        /// Candidate bitmask
        poly: u32,
        /// Extension degree m
        degree: u32,
    },

    /// Unknown output representation
    #[error("invalid output format '{0}': expected 'binary' or 'field'")]
    InvalidOutputFormat(String),

    /// No capability t yields a generator of degree N − K
    #[error("no binary BCH code has length {length} and message length {message_length}")]
    InvalidMessageLength {
        /// Code length N
        length: usize,
        /// Requested message length K
        message_length: usize,
    },

    /// Internal algebraic invariant violated
    #[error("field consistency check failed: {0}")]
    FieldConsistencyError(String),
}

/// Representation of the returned generator coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum OutputFormat {
    /// Plain 0/1 integers
    #[default]
    BinaryCoeffs,
    /// 0/1 embedded as elements of the constructed field
    FieldElements,
}

impl FromStr for OutputFormat {
    type Err = BchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "binary_coeffs" | "bin" => Ok(OutputFormat::BinaryCoeffs),
            "field" | "field_elements" | "gf" => Ok(OutputFormat::FieldElements),
            _ => Err(BchError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::BinaryCoeffs => write!(f, "binary"),
            OutputFormat::FieldElements => write!(f, "field"),
        }
    }
}

/// Parse a primitive polynomial given as decimal, `0x` hex or `0b` binary text.
///
/// Empty input means "use the default" and yields `Ok(None)`.
pub fn parse_primitive_poly(input: &str) -> Result<Option<u32>, BchError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let lowered = text.to_ascii_lowercase();
    let parsed = if let Some(hex) = lowered.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = lowered.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        lowered.parse::<u32>()
    };

    parsed
        .map(Some)
        .map_err(|_| BchError::InvalidPrimitivePolynomial(format!("'{}' is not an integer", text)))
}

/// Configuration parameters for generator computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Code length N = 2^m − 1
    pub length: usize,

    /// Message length K
    pub message_length: usize,

    /// Primitive polynomial bitmask; `None` selects the field default
    pub primitive_poly: Option<u32>,

    /// Coefficient representation of the result
    pub output_format: OutputFormat,
}

impl GeneratorConfig {
    /// Configuration for an (N, K) code with the default field and binary output
    pub fn new(length: usize, message_length: usize) -> Self {
        Self {
            length,
            message_length,
            primitive_poly: None,
            output_format: OutputFormat::BinaryCoeffs,
        }
    }

    /// Use an explicit primitive polynomial.
    pub fn with_primitive_poly(mut self, poly: u32) -> Self {
        self.primitive_poly = Some(poly);
        self
    }

    /// Select the coefficient representation.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Build the field this configuration describes.
    pub fn field(&self) -> Result<FiniteField, BchError> {
        let degree = degree_for_length(self.length)?;
        match self.primitive_poly {
            Some(poly) => FiniteField::with_primitive_poly(degree, poly),
            None => FiniteField::new(degree),
        }
    }
}

/// Generator coefficients in the requested representation, highest power first
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Coefficients {
    /// GF(2) bits
    Binary(Vec<u8>),
    /// Field elements, each 0 or 1
    Field(Vec<FieldElement>),
}

impl Coefficients {
    /// Number of coefficients
    pub fn len(&self) -> usize {
        match self {
            Coefficients::Binary(bits) => bits.len(),
            Coefficients::Field(elements) => elements.len(),
        }
    }

    /// True when there are no coefficients
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of generator computation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct GeneratorPolynomial {
    /// Coefficients, descending powers, N − K + 1 entries
    pub coefficients: Coefficients,

    /// Error-correcting capability
    pub t: u32,

    /// Code length N
    pub length: usize,

    /// Message length K
    pub message_length: usize,
}

impl GeneratorPolynomial {
    /// Numeric view of the coefficients, independent of representation
    pub fn values(&self) -> Vec<u32> {
        match &self.coefficients {
            Coefficients::Binary(bits) => bits.iter().map(|&bit| u32::from(bit)).collect(),
            Coefficients::Field(elements) => elements.iter().map(|e| e.value()).collect(),
        }
    }

    /// Degree N − K, or `None` when there are no coefficients
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Designed minimum distance 2t + 1
    pub fn design_distance(&self) -> u32 {
        2 * self.t + 1
    }

    /// Convert back into a GF(2) polynomial.
    pub fn to_gf2(&self) -> Gf2Polynomial {
        let bits: Vec<u8> = self.values().into_iter().map(|v| v as u8).collect();
        Gf2Polynomial::from_descending(&bits)
    }
}

impl fmt::Display for GeneratorPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_gf2())
    }
}

/// Compute the generator polynomial and capability t for an (N, K) binary BCH code.
///
/// Validation order: length, primitive polynomial, message length.
pub fn compute_generator_polynomial(
    config: &GeneratorConfig,
) -> Result<GeneratorPolynomial, BchError> {
    let field = config.field()?;
    let cosets = decompose(&field);

    let t = CapabilitySearch::new(&field, &cosets).capability(config.message_length)?;
    let generator = GeneratorAssembler::new(&field, &cosets).assemble(t)?;

    let redundancy = config.length - config.message_length;
    if generator.degree() != Some(redundancy) {
        return Err(BchError::FieldConsistencyError(format!(
            "generator degree {:?} differs from N - K = {}",
            generator.degree(),
            redundancy
        )));
    }

    let bits = generator.to_descending(redundancy + 1);
    let coefficients = match config.output_format {
        OutputFormat::BinaryCoeffs => Coefficients::Binary(bits),
        OutputFormat::FieldElements => Coefficients::Field(
            bits.into_iter()
                .map(|bit| FieldElement::new(u32::from(bit)))
                .collect(),
        ),
    };

    debug!(
        length = config.length,
        message_length = config.message_length,
        t,
        format = %config.output_format,
        "computed generator polynomial"
    );

    Ok(GeneratorPolynomial {
        coefficients,
        t,
        length: config.length,
        message_length: config.message_length,
    })
}
