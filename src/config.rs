use std::path::PathBuf;

use alloy_primitives::U256;
use serde_yaml::Mapping;

use crate::models::common::{ PlatformKind, PropertyFamily };

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// JSON trace to analyze
    pub trace_path: PathBuf,
    /// Maximum attacker balance, defaults to zero
    pub ceiling: Option<U256>,
    pub family: PropertyFamily,
    pub platform: PlatformKind,
    /// Build target the platform output directory is resolved against
    pub target: PathBuf,
    /// Directory receiving the fuzzer configuration
    pub config_dir: PathBuf,
    /// Caller-supplied fuzzer arguments merged into the generated config
    pub fuzzer_args: Mapping,
}

impl GenerateOptions {
    pub fn new(trace_path: PathBuf) -> Self {
        Self {
            trace_path,
            ceiling: None,
            family: PropertyFamily::Auto,
            platform: PlatformKind::Other,
            target: PathBuf::from("."),
            config_dir: PathBuf::from("."),
            fuzzer_args: Mapping::new(),
        }
    }
}
