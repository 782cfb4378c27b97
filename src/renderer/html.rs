use crate::models::table::exceeds;
use crate::models::{LogicalTable, StatusTables};
use crate::renderer::colours::Palette;
use crate::renderer::StatusRenderer;
use crate::utils::file;
use log::{error, info, warn};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Last drawn content of each panel. Sections missing from a refresh keep showing
/// what they showed before.
#[derive(Debug, Default)]
struct Panels {
    application: String,
    manager: String,
    workers: String,
    categories: String,
}

/// Resident HTML page, rewritten in place on every refresh.
pub struct HtmlRenderer {
    path: PathBuf,
    palette: Palette,
    panels: Option<Panels>,
}

impl HtmlRenderer {
    /// Probes the page location once. When the page cannot be written the renderer
    /// stays inert for its whole lifetime.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let palette = Palette::default();
        let panels = Panels::default();

        let panels = match file::replace(&path, &page(&palette, &panels)) {
            Ok(()) => {
                info!("Status page at {}", path.display());
                Some(panels)
            }
            Err(e) => {
                warn!("Status page {} is not writable: {}", path.display(), e);
                None
            }
        };

        Self {
            path,
            palette,
            panels,
        }
    }

    /// The page as it currently stands, `None` when inert.
    pub fn page(&self) -> Option<String> {
        self.panels.as_ref().map(|p| page(&self.palette, p))
    }
}

impl StatusRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn active(&self) -> bool {
        self.panels.is_some()
    }

    fn render(&mut self, tables: &StatusTables) {
        let Some(panels) = self.panels.as_mut() else {
            return;
        };

        if let Some(application) = &tables.application {
            panels.application = table_html(std::slice::from_ref(application));
        }
        if let Some(manager) = &tables.manager {
            panels.manager = table_html(std::slice::from_ref(manager));
        }
        if let Some(workers) = &tables.workers {
            panels.workers = table_html(workers);
        }
        if let Some(categories) = &tables.categories {
            panels.categories = table_html(categories);
        }

        let contents = page(&self.palette, panels);
        if let Err(e) = file::replace(&self.path, &contents) {
            error!("Failed to update status page {}: {}", self.path.display(), e);
        }
    }
}

fn page(palette: &Palette, panels: &Panels) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>vine status</title>
<style>{style}</style>
</head>
<body>
<div class="grid">
<div class="column">
{application}
{manager}
</div>
<div class="column">
{workers}
{categories}
</div>
</div>
</body>
</html>
"#,
        style = palette.stylesheet(),
        application = panels.application,
        manager = panels.manager,
        workers = panels.workers,
        categories = panels.categories,
    )
}

/// One `<table>` for a group of logical tables. A single-cell header spans the whole
/// row as a title, wider headers become column names.
fn table_html(tables: &[LogicalTable]) -> String {
    let span = tables.iter().map(|t| t.column_count()).max().unwrap_or(1);

    let mut out = String::from("<table>\n");
    for table in tables {
        let header = table.header();
        let cells: Vec<String> = if header.len() == 1 {
            vec![format!(r#"<th colspan="{}"> {} </th>"#, span, escape(&header[0]))]
        } else {
            header
                .iter()
                .map(|cell| format!("<th> {} </th>", escape(cell)))
                .collect()
        };
        let _ = writeln!(out, "<tr> {} </tr>", cells.join(" "));

        for row in table.body() {
            let open = if exceeds(row) {
                r#"<td class="over">"#
            } else {
                "<td>"
            };
            let cells: Vec<String> = row
                .iter()
                .map(|cell| format!("{} {} </td>", open, escape(cell)))
                .collect();
            let _ = writeln!(out, "<tr> {} </tr>", cells.join(" "));
        }
    }
    out.push_str("</table>");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::mark_exceeds;
    use std::fs;
    use tempfile::tempdir;

    fn manager_table(port: &str) -> LogicalTable {
        LogicalTable::from_pairs("manager stats", vec![("port".into(), port.into())])
    }

    #[test]
    fn test_pairs_title_spans_row() {
        let html = table_html(&[manager_table("9123")]);
        assert!(html.contains(r#"<th colspan="2"> manager stats </th>"#));
        assert!(html.contains("<tr> <td> port </td> <td> 9123 </td> </tr>"));
    }

    #[test]
    fn test_over_allocation_rows_are_highlighted() {
        let mut table = LogicalTable::new(vec!["sim".into(), "cores".into()]);
        table.push_row(vec![mark_exceeds("largest seen"), "6.0".into()]);
        table.push_row(vec!["maximum allocation".into(), "4.0".into()]);

        let html = table_html(&[table]);
        assert!(html.contains("<tr> <th> sim </th> <th> cores </th> </tr>"));
        assert!(html.contains(r#"<td class="over"> largest seen! </td> <td class="over"> 6.0 </td>"#));
        assert!(html.contains("<td> maximum allocation </td> <td> 4.0 </td>"));
    }

    #[test]
    fn test_cells_are_escaped() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_render_keeps_previous_panels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("status.html");
        let mut renderer = HtmlRenderer::open(&path);
        assert!(renderer.active());
        assert!(path.exists());

        renderer.render(&StatusTables {
            manager: Some(manager_table("9123")),
            ..Default::default()
        });
        renderer.render(&StatusTables {
            application: Some(LogicalTable::from_pairs(
                "application info",
                vec![("done".into(), "3".into())],
            )),
            ..Default::default()
        });

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("9123"));
        assert!(written.contains("application info"));
        assert_eq!(renderer.page().as_deref(), Some(written.as_str()));
        let application = written.find("application info").unwrap();
        let manager = written.find("manager stats").unwrap();
        assert!(application < manager);
    }

    #[test]
    fn test_unwritable_location_is_inert() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("status.html");
        let mut renderer = HtmlRenderer::open(&path);

        assert!(!renderer.active());
        assert!(renderer.page().is_none());
        renderer.render(&StatusTables {
            manager: Some(manager_table("1")),
            ..Default::default()
        });
        assert!(!path.exists());
    }
}
