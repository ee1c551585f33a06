//! Coset and code-table rendering shared by the table tests, plus a row-wise
//! comparison against the stored tables in `tests/snapshots/`.

use std::fs;
use std::path::PathBuf;

use bchpoly::{decompose, minimal_polynomial, CapabilitySearch, FiniteField};

/// Set to rewrite the stored tables from the current output.
const UPDATE_VAR: &str = "BCHPOLY_UPDATE_TABLES";

/// One row per coset: `C<rep>\t{members}\t<minimal polynomial>`
pub fn coset_rows(field: &FiniteField) -> Vec<String> {
    decompose(field)
        .iter()
        .map(|coset| {
            let minimal = minimal_polynomial(field, coset).expect("minimal polynomial");
            let members: Vec<String> = coset.members().iter().map(u32::to_string).collect();
            format!("C{}\t{{{}}}\t{}", coset.representative(), members.join(", "), minimal)
        })
        .collect()
}

/// Header plus one `n\tk\tt` row per realizable code
pub fn code_rows(field: &FiniteField) -> Vec<String> {
    let cosets = decompose(field);
    let codes = CapabilitySearch::new(field, &cosets).valid_codes();
    std::iter::once("n\tk\tt".to_string())
        .chain(
            codes
                .iter()
                .map(|c| format!("{}\t{}\t{}", c.length, c.message_length, c.t)),
        )
        .collect()
}

fn table_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

/// Compare `rows` with the stored table `name`, reporting the first differing row.
pub fn assert_table(name: &str, rows: &[String]) {
    let path = table_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        let mut text = rows.join("\n");
        text.push('\n');
        fs::write(&path, text).expect("write table");
        return;
    }

    let stored = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("table {} missing; rerun with {}=1", path.display(), UPDATE_VAR));
    let expected: Vec<&str> = stored.lines().map(|line| line.trim_end_matches('\r')).collect();

    if let Some(index) = expected
        .iter()
        .zip(rows)
        .position(|(want, got)| *want != got.as_str())
    {
        panic!(
            "{} row {} differs\n  stored: {}\n  actual: {}",
            name,
            index + 1,
            expected[index],
            rows[index]
        );
    }
    assert_eq!(
        expected.len(),
        rows.len(),
        "{} has {} stored rows but {} computed",
        name,
        expected.len(),
        rows.len()
    );
}
