pub mod application;
pub mod resources;
pub mod status;
pub mod table;

pub use application::{ApplicationMetrics, MetricsShapeError};
pub use resources::{Quantity, Resource, ResourceSet};
pub use status::{CategoryStats, StatusSnapshot};
pub use table::{LogicalTable, StatusTables};
