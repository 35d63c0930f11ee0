use report_core::{Cell, Document, Element, SessionBlock};

use crate::cli::Cli;

const ELLIPSIS: char = '…';
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Width for cells marked truncatable; `None` keeps them whole.
    pub truncate_at: Option<usize>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            truncate_at: Some(48),
        }
    }
}

impl TextOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            truncate_at: (!cli.wide).then_some(cli.url_width),
        }
    }
}

pub fn to_text(doc: &Document, options: &TextOptions) -> String {
    let mut out = String::new();
    out.push_str(&doc.title);
    out.push('\n');
    out.push_str(&"=".repeat(doc.title.chars().count()));
    out.push_str("\n\n");

    for element in &doc.body {
        match element {
            Element::Loading { text } => {
                out.push_str(text);
                out.push('\n');
            }
            Element::Error { text } => {
                out.push_str("Error: ");
                out.push_str(text);
                out.push('\n');
            }
            Element::Field { label, value, .. } => {
                out.push_str(&format!("{label}: {value}\n"));
            }
            Element::Session(block) => {
                out.push('\n');
                write_session(&mut out, block, options);
            }
        }
    }
    out
}

fn write_session(out: &mut String, block: &SessionBlock, options: &TextOptions) {
    out.push_str(&format!("Session {} {}\n", block.label, block.marker));

    let rows: Vec<Vec<String>> = block
        .rows
        .iter()
        .map(|row| row.cells.iter().map(|cell| cell_text(cell, options)).collect())
        .collect();

    let mut widths: Vec<usize> = block.headers.iter().map(|h| width(h)).collect();
    for row in &rows {
        for (idx, text) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(idx) {
                *w = (*w).max(width(text));
            }
        }
    }

    write_line(out, &block.headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(out, &rule, &widths);
    for row in &rows {
        write_line(out, row, &widths);
    }
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (idx, text) in cells.iter().enumerate() {
        if idx > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(text);
        let pad = widths.get(idx).copied().unwrap_or(0).saturating_sub(width(text));
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn cell_text(cell: &Cell, options: &TextOptions) -> String {
    match options.truncate_at {
        Some(max) if cell.truncate && width(&cell.text) > max => truncate(&cell.text, max),
        _ => cell.text.clone(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}

fn width(text: &str) -> usize {
    text.chars().count()
}
