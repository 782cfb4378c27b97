use crate::client::Manager;
use crate::collectors::manager::collect_manager_table;
use crate::collectors::{application, resources};
use crate::models::StatusTables;
use chrono::{DateTime, Utc};
use log::{debug, error};
use std::time::Instant;

/// Queries the manager and reshapes the answers into the four display tables.
///
/// The status and application queries are independent: a failure in one is logged and
/// leaves only its own tables absent. No manager at all yields no tables.
pub fn build_tables<M: Manager + ?Sized>(manager: Option<&M>, now: DateTime<Utc>) -> StatusTables {
    let Some(manager) = manager else {
        return StatusTables::default();
    };
    let start = Instant::now();

    let snapshot = match manager.status() {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            error!("Error reading manager status: {}", e);
            None
        }
    };

    let app_payload = match manager.application_info() {
        Ok(payload) => payload,
        Err(e) => {
            error!("Error reading application information status: {}", e);
            None
        }
    };

    let tables = StatusTables {
        manager: snapshot
            .as_ref()
            .map(|s| collect_manager_table(s, now)),
        workers: snapshot.as_ref().map(resources::collect_worker_tables),
        categories: snapshot.as_ref().map(resources::collect_category_tables),
        application: app_payload
            .as_ref()
            .and_then(application::collect_application_table),
    };

    debug!("build_tables took: {} ms", start.elapsed().as_millis());
    tables
}
