// src/output.rs
//
// Where a finished table goes: stdout (plain or boxed), a dated CSV file, or
// the paginated viewer window.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::{
    config::options::{OutputKind, RunOptions},
    data::ResultTable,
    file,
};

pub fn emit(table: &ResultTable, opts: &RunOptions) -> io::Result<Option<PathBuf>> {
    match opts.output {
        None => {
            print_plain(io::stdout().lock(), table)?;
            Ok(None)
        }
        Some(OutputKind::Pretty) => {
            print_pretty(io::stdout().lock(), table)?;
            Ok(None)
        }
        Some(OutputKind::File) => {
            let path = file::results_path(&opts.base_dir, opts.mode, chrono::Local::now().naive_local());
            file::write_results(&path, table)?;
            logf!("Results saved to {}", path.display());
            Ok(Some(path))
        }
        Some(OutputKind::Gui) => {
            show_gui(table, opts)?;
            Ok(None)
        }
    }
}

#[cfg(feature = "gui")]
fn show_gui(table: &ResultTable, opts: &RunOptions) -> io::Result<()> {
    crate::gui::show(opts.mode.as_str(), table.clone()).map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(not(feature = "gui"))]
fn show_gui(table: &ResultTable, _opts: &RunOptions) -> io::Result<()> {
    loge!("Built without the `gui` feature; printing instead");
    print_pretty(io::stdout().lock(), table)
}

/// One line per row, cells separated by a space.
pub fn print_plain<W: Write>(mut w: W, table: &ResultTable) -> io::Result<()> {
    for row in table.rows() {
        writeln!(w, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Boxed, left-aligned columns; the header gets its own rule.
pub fn print_pretty<W: Write>(mut w: W, table: &ResultTable) -> io::Result<()> {
    let widths = column_widths(table);
    if widths.is_empty() {
        return Ok(());
    }
    let rule: String = widths
        .iter()
        .map(|n| "-".repeat(n + 2))
        .fold(s!("+"), |acc, seg| join!(acc, &seg, "+"));

    writeln!(w, "{rule}")?;
    for (i, row) in table.rows().iter().enumerate() {
        let mut line = s!("|");
        for (ci, width) in widths.iter().enumerate() {
            let cell = row.get(ci).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        writeln!(w, "{line}")?;
        if i == 0 {
            writeln!(w, "{rule}")?;
        }
    }
    if table.len() > 1 {
        writeln!(w, "{rule}")?;
    }
    Ok(())
}

fn column_widths(table: &ResultTable) -> Vec<usize> {
    let mut widths = vec![0usize; table.column_count()];
    for row in table.rows() {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }
    widths
}
