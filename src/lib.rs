pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scrapers;

pub use config::ScoutConfig;
pub use models::{Field, PropertyRecord};
pub use pipeline::{run, RunSummary};
