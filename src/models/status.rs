use crate::models::resources::{Quantity, ResourceSet};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CategoryStats {
    pub category: String,
    pub max_seen: Option<ResourceSet>,
    pub first_allocation: Option<ResourceSet>,
    pub max_allocation: Option<ResourceSet>,
}

/// Point-in-time manager statistics.
///
/// Time counters are in microseconds and byte counters in bytes, as reported by the
/// manager. Fields the manager leaves out fall back to zero, `None` or
/// `Quantity::Missing`. The plain counters accept any JSON value so one odd counter
/// cannot reject the whole snapshot.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    pub port: Quantity,
    pub tasks_done: Quantity,
    pub tasks_waiting: Quantity,
    pub tasks_running: Quantity,
    pub tasks_exhausted_attempts: Quantity,
    pub workers_connected: Quantity,
    pub workers_busy: Quantity,

    pub bytes_sent: f64,
    pub bytes_received: f64,

    pub time_send: f64,
    pub time_receive: Option<f64>,
    pub time_workers_execute_good: f64,
    pub time_workers_execute: f64,
    pub time_when_started: Option<f64>,

    pub cores_inuse: Quantity,
    pub gpus_inuse: Quantity,
    pub memory_inuse: Quantity,
    pub disk_inuse: Quantity,

    pub cores_total: Quantity,
    pub gpus_total: Quantity,
    pub memory_total: Quantity,
    pub disk_total: Quantity,

    pub categories: Vec<CategoryStats>,
}

impl StatusSnapshot {
    pub fn resources_inuse(&self) -> ResourceSet {
        ResourceSet {
            cores: self.cores_inuse.clone(),
            gpus: self.gpus_inuse.clone(),
            memory: self.memory_inuse.clone(),
            disk: self.disk_inuse.clone(),
        }
    }

    pub fn resources_total(&self) -> ResourceSet {
        ResourceSet {
            cores: self.cores_total.clone(),
            gpus: self.gpus_total.clone(),
            memory: self.memory_total.clone(),
            disk: self.disk_total.clone(),
        }
    }

    /// (label, value) pairs of the plain counters, in display order.
    pub fn counters(&self) -> Vec<(&'static str, &Quantity)> {
        vec![
            ("port", &self.port),
            ("tasks_done", &self.tasks_done),
            ("tasks_waiting", &self.tasks_waiting),
            ("tasks_running", &self.tasks_running),
            ("tasks_exhausted_attempts", &self.tasks_exhausted_attempts),
            ("workers_connected", &self.workers_connected),
            ("workers_busy", &self.workers_busy),
        ]
    }
}
