//! Human-readable table summaries for the reporting sink.
//!
//! Rendering is side-effect free; the CLI decides where the text goes
//! (normally standard output).

use std::io::{self, Write};

use crate::input::DataTable;
use crate::schema::TableProfile;

/// Render the schema summary: per-column name, inferred type, and
/// non-missing counts.
pub fn render_info(profile: &TableProfile, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{} columns", profile.column_count())?;
    writeln!(w, " #   {:<20} {:<10} non-null", "column", "type")?;
    for col in &profile.columns {
        writeln!(
            w,
            " {:<3} {:<20} {:<10} {}/{}",
            col.position,
            col.name,
            col.inferred_type.to_string(),
            col.stats.non_null_count(),
            col.stats.count,
        )?;
    }
    Ok(())
}

/// Render the first `n` rows of the table with its header, column-aligned.
pub fn render_head(table: &DataTable, n: usize, w: &mut impl Write) -> io::Result<()> {
    let rows: Vec<&Vec<String>> = table.rows.iter().take(n).collect();

    // Column widths over the header and the shown rows.
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r.get(i).map(|c| c.len()).unwrap_or(0))
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_aligned_row(&table.headers, &widths, w)?;
    for row in rows {
        write_aligned_row(row, &widths, w)?;
    }
    Ok(())
}

/// Render the entire table (used for the final cleaned contents).
pub fn render_table(table: &DataTable, w: &mut impl Write) -> io::Result<()> {
    render_head(table, table.row_count(), w)
}

fn write_aligned_row(cells: &[String], widths: &[usize], w: &mut impl Write) -> io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let width = widths.get(i).copied().unwrap_or(0);
        line.push_str(&format!("{:<width$}", cell));
    }
    writeln!(w, "{}", line.trim_end())
}
