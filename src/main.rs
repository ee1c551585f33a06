use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bchpoly::{
    compute_generator_polynomial, decompose, degree_for_length, minimal_polynomial,
    parse_primitive_poly, CapabilitySearch, FiniteField, GeneratorConfig, OutputFormat,
};

#[derive(Parser, Debug)]
#[command(name = "bchpoly", about = "Generator polynomials for binary BCH codes")]
struct Cli {
    /// Log pipeline steps to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the generator polynomial of an (N, K) code.
    Generate {
        /// Code length N = 2^m - 1.
        length: usize,
        /// Message length K.
        message_length: usize,
        /// Primitive polynomial (decimal, 0x hex or 0b binary); defaults per m.
        #[arg(long)]
        prim_poly: Option<String>,
        /// Coefficient representation: binary or field.
        #[arg(long, default_value = "binary")]
        format: String,
    },
    /// List the cyclotomic cosets of GF(2^m) with their minimal polynomials.
    Cosets {
        /// Extension degree m (3..=16).
        degree: u32,
        /// Primitive polynomial; defaults per m.
        #[arg(long)]
        prim_poly: Option<String>,
    },
    /// List every realizable (N, K, t) for a code length.
    Table {
        /// Code length N = 2^m - 1.
        length: usize,
        /// Primitive polynomial; defaults per m.
        #[arg(long)]
        prim_poly: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            length,
            message_length,
            prim_poly,
            format,
        } => run_generate(length, message_length, prim_poly, &format)?,
        Commands::Cosets { degree, prim_poly } => run_cosets(degree, prim_poly)?,
        Commands::Table { length, prim_poly } => run_table(length, prim_poly)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_field(degree: u32, prim_poly: Option<String>) -> Result<FiniteField> {
    let poly = parse_primitive_poly(prim_poly.as_deref().unwrap_or(""))?;
    let field = match poly {
        Some(poly) => FiniteField::with_primitive_poly(degree, poly),
        None => FiniteField::new(degree),
    };
    field.with_context(|| format!("failed to build GF(2^{})", degree))
}

fn run_generate(
    length: usize,
    message_length: usize,
    prim_poly: Option<String>,
    format: &str,
) -> Result<()> {
    let output_format: OutputFormat = format.parse()?;
    let mut config = GeneratorConfig::new(length, message_length).with_output_format(output_format);
    if let Some(poly) = parse_primitive_poly(prim_poly.as_deref().unwrap_or(""))? {
        config = config.with_primitive_poly(poly);
    }

    let generator = compute_generator_polynomial(&config).with_context(|| {
        format!("failed to compute generator for ({}, {})", length, message_length)
    })?;

    let coefficients: Vec<String> = generator.values().iter().map(u32::to_string).collect();
    println!("generator\t[{}]", coefficients.join(", "));
    println!("polynomial\t{}", generator);
    println!("t\t{}", generator.t);
    println!("format\t{}", output_format);

    Ok(())
}

fn run_cosets(degree: u32, prim_poly: Option<String>) -> Result<()> {
    let field = build_field(degree, prim_poly)?;

    for coset in decompose(&field) {
        let minimal = minimal_polynomial(&field, &coset)
            .with_context(|| format!("minimal polynomial of coset {}", coset.representative()))?;
        let members: Vec<String> = coset.members().iter().map(u32::to_string).collect();
        println!(
            "C{}\t{{{}}}\t{}",
            coset.representative(),
            members.join(", "),
            minimal
        );
    }

    Ok(())
}

fn run_table(length: usize, prim_poly: Option<String>) -> Result<()> {
    let degree = degree_for_length(length)?;
    let field = build_field(degree, prim_poly)?;
    let cosets = decompose(&field);

    println!("n\tk\tt");
    for code in CapabilitySearch::new(&field, &cosets).valid_codes() {
        println!("{}\t{}\t{}", code.length, code.message_length, code.t);
    }

    Ok(())
}
