//! Coset and code tables checked row by row against stored copies

mod common;

use bchpoly::FiniteField;
use common::{assert_table, code_rows, coset_rows};

#[test]
fn gf64_cosets_table() {
    let field = FiniteField::new(6).expect("GF(64)");
    let rows = coset_rows(&field);
    assert_eq!(rows.len(), 13);
    assert_table("cosets_gf64.txt", &rows);
}

#[test]
fn n63_code_table() {
    let field = FiniteField::new(6).expect("GF(64)");
    assert_table("codes_n63.txt", &code_rows(&field));
}

#[test]
fn n127_code_table() {
    let field = FiniteField::new(7).expect("GF(128)");
    let rows = code_rows(&field);
    assert_eq!(rows[1], "127\t120\t1");
    assert_table("codes_n127.txt", &rows);
}
