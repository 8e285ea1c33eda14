use std::path::PathBuf;

use crate::models::property::Property;

/// Solidity source produced from a set of properties
#[derive(Debug, Clone, Default)]
pub struct RenderedProperties {
    /// All rendered property functions, newline separated, in input order
    pub source: String,
    /// Records to hand to a unit test generator
    pub unit_tests: Vec<Property>,
}

/// A contract file produced by a template renderer
#[derive(Debug, Clone)]
pub struct RenderedContract {
    pub file_name: String,
    pub contract_name: String,
    pub source: String,
}

/// Everything written by one emitter run
#[derive(Debug, Clone)]
pub struct EmittedArtifacts {
    pub property_file: PathBuf,
    pub contract_name: String,
    pub init_file: PathBuf,
    pub samples_file: PathBuf,
    pub config_file: PathBuf,
    pub unit_test_info: Option<String>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
