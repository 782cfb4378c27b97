use crate::models::{LogicalTable, StatusTables};
use crate::renderer::StatusRenderer;
use chrono::Local;
use log::error;
use std::fmt::Write as _;
use std::io::{self, Write};

const COLUMN_GAP: &str = "  ";

/// Plain text renderer that reprints every section on each refresh.
pub struct TextRenderer {
    out: Option<Box<dyn Write>>,
}

impl TextRenderer {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out: Some(out) }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn inert() -> Self {
        Self { out: None }
    }
}

impl StatusRenderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn active(&self) -> bool {
        self.out.is_some()
    }

    fn render(&mut self, tables: &StatusTables) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        let body = render_to_string(tables);
        if body.is_empty() {
            return;
        }

        let heading = format!("vine status at {}", Local::now().format("%H:%M:%S"));
        let result = writeln!(out, "{}\n\n{}", heading, body).and_then(|_| out.flush());
        if let Err(e) = result {
            error!("Failed to write status display: {}", e);
        }
    }
}

/// Lays out the present sections; absent sections are skipped.
pub fn render_to_string(tables: &StatusTables) -> String {
    let mut sections = Vec::new();

    if let Some(application) = &tables.application {
        sections.push(layout(std::slice::from_ref(application)));
    }
    if let Some(manager) = &tables.manager {
        sections.push(layout(std::slice::from_ref(manager)));
    }
    if let Some(workers) = &tables.workers {
        sections.push(layout(workers));
    }
    if let Some(categories) = &tables.categories {
        if !categories.is_empty() {
            sections.push(layout(categories));
        }
    }

    sections.join("\n")
}

/// Aligns a group of tables on shared column widths.
fn layout(tables: &[LogicalTable]) -> String {
    let columns = tables.iter().map(|t| t.column_count()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in tables.iter().flat_map(|t| t.rows()).filter(|r| r.len() > 1) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for row in table.rows() {
            let _ = writeln!(out, "{}", format_row(row, &widths));
        }
    }
    out
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    // A lone cell is a panel title.
    if row.len() == 1 {
        return row[0].clone();
    }
    row.iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == 0 {
                format!("{:<width$}", cell, width = *width)
            } else {
                format!("{:>width$}", cell, width = *width)
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}
