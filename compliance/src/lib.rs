pub mod checks;
pub mod cli;
pub mod config;
pub mod config_manager;
pub mod error;
pub mod report;

pub use checks::{CheckOutcome, ComplianceRunner};
pub use config::{ComplianceConfig, Expectation, Expectations};
pub use error::ComplianceError;
pub use report::ComplianceReport;
