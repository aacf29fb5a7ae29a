//! Plain-text table rendering for previews and results.

use colored::Colorize;
use console::{measure_text_width, pad_str, truncate_str, Alignment};
use dynamic_extractor::{Dataset, ResultTable};

const MAX_CELL_WIDTH: usize = 60;

/// Render rows as an aligned text table with a header rule.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let cell = |s: &str| -> String {
        let single_line = s.replace(['\n', '\r'], " ");
        truncate_str(&single_line, MAX_CELL_WIDTH, "…").into_owned()
    };

    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| cell(c.as_str())).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in &rows {
        for (i, c) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(measure_text_width(c));
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_str(c, *w, Alignment::Left, None).into_owned())
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        out.push('\n');
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

pub fn print_preview(dataset: &Dataset, max_rows: usize) {
    let headers: Vec<&str> = dataset.headers().iter().map(String::as_str).collect();
    println!("{}", "Data preview".bright_cyan().bold());
    println!("{}", format_table(&headers, dataset.preview(max_rows)));
    if dataset.len() > max_rows {
        println!("{}", format!("… {} more rows", dataset.len() - max_rows).dimmed());
    }
    println!();
}

pub fn print_results(table: &ResultTable) {
    let rows: Vec<Vec<String>> = table
        .records()
        .iter()
        .map(|r| vec![r.entry.clone(), r.value()])
        .collect();

    println!("{}", "Extraction results".bright_cyan().bold());
    println!("{}", format_table(&table.headers(), &rows));
    println!();
    println!(
        "{} {} of {} rows produced a value",
        "✓".bright_green(),
        table.found_count(),
        table.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_aligns_columns() {
        let rows = vec![
            vec!["Acme Corp".to_string(), "contact@acme.com".to_string()],
            vec!["Globex".to_string(), "No email found".to_string()],
        ];
        let out = format_table(&["entry", "email"], &rows);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "entry      email");
        assert_eq!(lines[2], "Acme Corp  contact@acme.com");
        assert_eq!(lines[3], "Globex     No email found");
    }

    #[test]
    fn test_multiline_cells_are_flattened() {
        let rows = vec![vec!["Acme".to_string(), "line one\nline two".to_string()]];
        let out = format_table(&["entry", "result"], &rows);
        assert!(out.lines().last().unwrap().ends_with("line one line two"));
    }
}
