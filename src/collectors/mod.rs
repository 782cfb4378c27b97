pub mod application;
pub mod collector;
pub mod manager;
pub mod resources;

pub use collector::build_tables;
