//! Result rendering for the terminal.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Renders `value` as pretty JSON or `rows` as a two-column table.
pub fn render<T: Serialize>(
    value: &T,
    rows: &[(&str, String)],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table(rows)),
    }
}

/// Box-drawing table with a label column and a value column.
pub fn table(rows: &[(&str, String)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Field".len());
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0)
        .max("Value".len());

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(label_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule("┌", "┬", "┐"));
    lines.push(format!(
        "│ {:<lw$} │ {:<vw$} │",
        "Field",
        "Value",
        lw = label_width,
        vw = value_width
    ));
    lines.push(rule("├", "┼", "┤"));
    for (label, value) in rows {
        lines.push(format!(
            "│ {:<lw$} │ {:>vw$} │",
            label,
            value,
            lw = label_width,
            vw = value_width
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Fixed ten-decimal formatting used for prices and variances.
pub fn decimal(value: f64) -> String {
    format!("{:.10}", value)
}
