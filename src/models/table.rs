/// Trailing character on a row's first cell flagging the row as over its allocation.
pub const OVER_ALLOCATION_MARKER: char = '!';

/// Header row plus body rows of display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalTable {
    rows: Vec<Vec<String>>,
}

impl LogicalTable {
    pub fn new(header: Vec<String>) -> Self {
        Self { rows: vec![header] }
    }

    /// A two column table whose header is the single-cell panel title.
    pub fn from_pairs(title: &str, pairs: Vec<(String, String)>) -> Self {
        let mut table = Self::new(vec![title.to_string()]);
        for (label, value) in pairs {
            table.push_row(vec![label, value]);
        }
        table
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether any row follows the header.
    pub fn has_body(&self) -> bool {
        !self.body().is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

pub fn exceeds(row: &[String]) -> bool {
    row.first()
        .is_some_and(|cell| cell.ends_with(OVER_ALLOCATION_MARKER))
}

pub fn mark_exceeds(label: &str) -> String {
    format!("{}{}", label, OVER_ALLOCATION_MARKER)
}

/// The four sections a renderer draws. Any of them may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusTables {
    pub manager: Option<LogicalTable>,
    pub workers: Option<Vec<LogicalTable>>,
    pub categories: Option<Vec<LogicalTable>>,
    pub application: Option<LogicalTable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_table() {
        let table = LogicalTable::from_pairs(
            "manager stats",
            vec![("port".to_string(), "9123".to_string())],
        );
        assert_eq!(table.header(), ["manager stats".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert!(table.has_body());
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.body()[0], vec!["port", "9123"]);
    }

    #[test]
    fn test_header_only_table() {
        let table = LogicalTable::new(vec!["analysis".to_string(), "cores".to_string()]);
        assert_eq!(table.row_count(), 1);
        assert!(!table.has_body());
        assert!(table.body().is_empty());
    }

    #[test]
    fn test_marker() {
        let marked = vec![mark_exceeds("largest seen"), "1.0".to_string()];
        assert!(exceeds(&marked));
        assert!(!exceeds(&["largest seen".to_string()]));
        assert!(!exceeds(&[]));
    }
}
