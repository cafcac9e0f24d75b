use std::io::{self, Write};

use crate::model::GroupedReport;

const SEPARATOR_WIDTH: usize = 101;

/// Write the grouped report: for each category its label, a separator line,
/// one indented line per record, then a blank line.
pub fn render<W: Write>(grouped: &GroupedReport, out: &mut W) -> io::Result<()> {
    let separator = "*".repeat(SEPARATOR_WIDTH);
    for (category, records) in grouped {
        writeln!(out, "{category}")?;
        writeln!(out, "{separator}")?;
        for record in records {
            writeln!(out, "    NAME: {} ABILITIES: {}", record.name, record.traits)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
