use crate::models::table::mark_exceeds;
use crate::models::{CategoryStats, LogicalTable, Resource, ResourceSet, StatusSnapshot};
use crate::utils::units::with_units;
use log::debug;
use std::time::Instant;

pub const WORKER_TITLE: &str = "application resources";

fn header(title: &str) -> Vec<String> {
    std::iter::once(title.to_string())
        .chain(Resource::ALL.iter().map(|r| r.name().to_string()))
        .collect()
}

pub fn resources_to_row(values: &ResourceSet, label: String, na: &str) -> Vec<String> {
    std::iter::once(label)
        .chain(
            Resource::ALL
                .iter()
                .map(|r| with_units(*r, values.get(*r), na)),
        )
        .collect()
}

pub fn collect_worker_tables(snapshot: &StatusSnapshot) -> Vec<LogicalTable> {
    let mut table = LogicalTable::new(header(WORKER_TITLE));
    table.push_row(resources_to_row(
        &snapshot.resources_inuse(),
        "allocated".to_string(),
        "na",
    ));
    table.push_row(resources_to_row(
        &snapshot.resources_total(),
        "total".to_string(),
        "na",
    ));
    vec![table]
}

/// One table per category, ordered by category name.
pub fn collect_category_tables(snapshot: &StatusSnapshot) -> Vec<LogicalTable> {
    let start = Instant::now();

    let mut categories: Vec<&CategoryStats> = snapshot.categories.iter().collect();
    categories.sort_by(|a, b| a.category.cmp(&b.category));

    let tables: Vec<LogicalTable> = categories.into_iter().map(category_table).collect();

    debug!(
        "collect_category_tables: {} categories in {} ms",
        tables.len(),
        start.elapsed().as_millis()
    );
    tables
}

fn category_table(category: &CategoryStats) -> LogicalTable {
    let mut table = LogicalTable::new(header(&category.category));

    if let Some(seen) = &category.max_seen {
        let over = category
            .max_allocation
            .as_ref()
            .is_some_and(|limits| seen.exceeds(limits));
        let label = if over {
            mark_exceeds("largest seen")
        } else {
            "largest seen".to_string()
        };
        table.push_row(resources_to_row(seen, label, "na"));
    }

    let allocations = [
        (&category.first_allocation, "current allocation"),
        (&category.max_allocation, "maximum allocation"),
    ];
    for (allocation, label) in allocations {
        if let Some(values) = allocation {
            table.push_row(resources_to_row(values, label.to_string(), "whole worker"));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::exceeds;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> StatusSnapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_worker_table() {
        let snapshot = snapshot(json!({
            "cores_inuse": 3, "gpus_inuse": 0, "memory_inuse": 1500, "disk_inuse": 2_500_000,
            "cores_total": 16, "gpus_total": -1, "memory_total": 64000
        }));

        let tables = collect_worker_tables(&snapshot);
        assert_eq!(tables.len(), 1);
        let rows = tables[0].rows();
        assert_eq!(
            rows[0],
            vec!["application resources", "cores", "gpus", "memory", "disk"]
        );
        assert_eq!(rows[1], vec!["allocated", "3.0", "0.0", "1.50 GB", "2.50 TB"]);
        assert_eq!(rows[2], vec!["total", "16.0", "na", "64.00 GB", "na"]);
    }

    #[test]
    fn test_categories_sorted_by_name() {
        let snapshot = snapshot(json!({"categories": [
            {"category": "zeta"},
            {"category": "alpha"},
            {"category": "default"}
        ]}));

        let names: Vec<String> = collect_category_tables(&snapshot)
            .iter()
            .map(|t| t.header()[0].clone())
            .collect();
        assert_eq!(names, vec!["alpha", "default", "zeta"]);
    }

    #[test]
    fn test_only_max_seen_gives_two_rows() {
        let snapshot = snapshot(json!({"categories": [
            {"category": "analysis", "max_seen": {"cores": 1, "memory": 200}}
        ]}));

        let tables = collect_category_tables(&snapshot);
        let table = &tables[0];
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows()[1],
            vec!["largest seen", "1.0", "na", "200.00 MB", "na"]
        );
    }

    #[test]
    fn test_missing_rows_do_not_shift_others() {
        let snapshot = snapshot(json!({"categories": [
            {"category": "analysis", "max_allocation": {"cores": 4, "gpus": -1}}
        ]}));

        let tables = collect_category_tables(&snapshot);
        let rows = tables[0].rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            vec!["maximum allocation", "4.0", "whole worker", "whole worker", "whole worker"]
        );
    }

    #[test]
    fn test_all_rows_and_marker() {
        let snapshot = snapshot(json!({"categories": [{
            "category": "sim",
            "max_seen": {"cores": 6, "memory": 900},
            "first_allocation": {"cores": 2, "memory": 500},
            "max_allocation": {"cores": 4, "memory": 1000}
        }]}));

        let tables = collect_category_tables(&snapshot);
        let rows = tables[0].rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["sim", "cores", "gpus", "memory", "disk"]);
        assert_eq!(rows[1][0], "largest seen!");
        assert!(exceeds(&rows[1]));
        assert_eq!(rows[2][0], "current allocation");
        assert_eq!(rows[3][0], "maximum allocation");
        assert!(!exceeds(&rows[2]));
    }
}
