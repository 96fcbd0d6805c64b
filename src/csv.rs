// src/csv.rs
use std::io::{self, Write};

use crate::data::ResultTable;

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn write_table<W: Write>(mut w: W, table: &ResultTable) -> io::Result<()> {
    for row in table.rows() {
        write_row(&mut w, row)?;
    }
    w.flush()
}
