//! Plain-text layout helpers.

use std::io::{self, Write};

/// Width of the label column in field tables.
const LABEL_WIDTH: usize = 10;

/// Writes one `Label: value` row of a field table.
pub fn field_row(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{label:<width$} {value}", width = LABEL_WIDTH)
}

/// Writes `lines` inside a box, with an optional title in the top border.
pub fn panel(out: &mut impl Write, title: Option<&str>, lines: &[&str]) -> io::Result<()> {
    let title_width = title.map_or(0, |t| t.chars().count() + 2);
    let inner = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title_width);

    match title {
        Some(title) => {
            let rest = inner - title_width;
            let left = rest / 2;
            writeln!(
                out,
                "╭─{} {title} {}─╮",
                "─".repeat(left),
                "─".repeat(rest - left)
            )?;
        }
        None => writeln!(out, "╭─{}─╮", "─".repeat(inner))?,
    }
    for line in lines {
        let pad = inner - line.chars().count();
        writeln!(out, "│ {line}{} │", " ".repeat(pad))?;
    }
    writeln!(out, "╰─{}─╯", "─".repeat(inner))
}
