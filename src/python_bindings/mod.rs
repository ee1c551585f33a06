//! Python bindings that expose generator computation via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::{
    compute_generator_polynomial, decompose, parse_primitive_poly, BchError, CapabilitySearch,
    GeneratorConfig, GeneratorPolynomial, OutputFormat,
};

fn to_py_err(err: BchError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Primitive polynomial as passed from Python: an int bitmask or text.
#[derive(Debug, Clone, PartialEq, Eq, FromPyObject)]
pub enum PrimitivePolyArg {
    /// Bitmask such as `0b1011` or `19`
    Int(u32),
    /// Decimal, `0x` hex or `0b` binary text; empty selects the default
    Text(String),
}

impl PrimitivePolyArg {
    fn resolve(&self) -> Result<Option<u32>, BchError> {
        match self {
            PrimitivePolyArg::Int(poly) => Ok(Some(*poly)),
            PrimitivePolyArg::Text(text) => parse_primitive_poly(text),
        }
    }
}

fn build_config(
    n: usize,
    k: usize,
    prim_poly: Option<&PrimitivePolyArg>,
    output_format: Option<&str>,
) -> PyResult<GeneratorConfig> {
    let format: OutputFormat = output_format
        .unwrap_or("binary")
        .parse()
        .map_err(to_py_err)?;
    let mut config = GeneratorConfig::new(n, k).with_output_format(format);
    let poly = match prim_poly {
        Some(arg) => arg.resolve().map_err(to_py_err)?,
        None => None,
    };
    if let Some(poly) = poly {
        config = config.with_primitive_poly(poly);
    }
    Ok(config)
}

/// Python-facing handle on a computed BCH generator.
#[pyclass]
#[derive(Debug)]
pub struct PyBchCode {
    generator: GeneratorPolynomial,
}

#[pymethods]
impl PyBchCode {
    #[new]
    #[pyo3(signature = (n, k, prim_poly=None))]
    /// Compute the generator for an (n, k) code.
    pub fn new(n: usize, k: usize, prim_poly: Option<PrimitivePolyArg>) -> PyResult<Self> {
        let config = build_config(n, k, prim_poly.as_ref(), None)?;
        let generator = compute_generator_polynomial(&config).map_err(to_py_err)?;
        Ok(Self { generator })
    }

    /// Generator coefficients, highest power first.
    pub fn generator(&self) -> Vec<u32> {
        self.generator.values()
    }

    /// Error-correcting capability.
    pub fn t(&self) -> u32 {
        self.generator.t
    }

    /// Generator rendered as a polynomial expression.
    pub fn __str__(&self) -> String {
        self.generator.to_string()
    }
}

/// Compute `(coefficients, t)` for an (n, k) binary BCH code.
///
/// Args:
///     n: Code length 2^m - 1.
///     k: Message length.
///     prim_poly: Optional primitive polynomial, an int bitmask or decimal,
///         hex or binary text.
///     output_format: "binary" (default) or "field".
#[pyfunction]
#[pyo3(signature = (n, k, prim_poly=None, output_format=None))]
pub fn bch_generator(
    n: usize,
    k: usize,
    prim_poly: Option<PrimitivePolyArg>,
    output_format: Option<String>,
) -> PyResult<(Vec<u32>, u32)> {
    let config = build_config(n, k, prim_poly.as_ref(), output_format.as_deref())?;
    let generator = compute_generator_polynomial(&config).map_err(to_py_err)?;
    Ok((generator.values(), generator.t))
}

/// List realizable `(n, k, t)` triples for a code length.
#[pyfunction]
#[pyo3(signature = (n, prim_poly=None))]
pub fn bch_codes(
    n: usize,
    prim_poly: Option<PrimitivePolyArg>,
) -> PyResult<Vec<(usize, usize, u32)>> {
    // k plays no part in building the field
    let config = build_config(n, 1, prim_poly.as_ref(), None)?;
    let field = config.field().map_err(to_py_err)?;
    let cosets = decompose(&field);
    Ok(CapabilitySearch::new(&field, &cosets)
        .valid_codes()
        .into_iter()
        .map(|c| (c.length, c.message_length, c.t))
        .collect())
}

/// Create Python module.
#[pymodule]
pub fn bchpoly(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBchCode>()?;
    m.add_function(wrap_pyfunction!(bch_generator, m)?)?;
    m.add_function(wrap_pyfunction!(bch_codes, m)?)?;
    Ok(())
}
