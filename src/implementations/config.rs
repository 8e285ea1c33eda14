use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::implementations::checksum::ChecksumScheme;
use crate::models::address::Address;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value {value:?} in environment variable {var}")]
    InvalidEnvValue { var: String, value: String },
}

/// How a derived fuzzer setting that collides with a caller-supplied one is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Abort the run
    #[default]
    Error,
    /// Log a warning and keep the caller's value
    Warn,
}

impl ConflictPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "error" => Some(ConflictPolicy::Error),
            "warn" | "warning" => Some(ConflictPolicy::Warn),
            _ => None,
        }
    }
}

/// Synthetic accounts the fuzzer impersonates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SyntheticAddresses {
    pub owner: Address,
    pub user: Address,
    pub attacker: Address,
}

impl Default for SyntheticAddresses {
    fn default() -> Self {
        // Echidna's default sender accounts
        Self {
            owner: Address::from_bytes(padded_account(0x01)),
            user: Address::from_bytes(padded_account(0x02)),
            attacker: Address::from_bytes(padded_account(0x03)),
        }
    }
}

fn padded_account(high: u8) -> [u8; 20] {
    let mut bytes = [0u8; 20];
    bytes[17] = high;
    bytes
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FuzzerSettings {
    /// File name of the generated fuzzer configuration
    pub config_file: String,

    /// Prefix identifying property functions
    pub prefix: String,

    /// Policy for derived values colliding with caller arguments
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

impl Default for FuzzerSettings {
    fn default() -> Self {
        Self {
            config_file: "echidna_config.yaml".to_string(),
            prefix: "crytic_".to_string(),
            conflict_policy: ConflictPolicy::Error,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FuzzpropConfig {
    /// Owner, user and attacker accounts
    #[serde(default)]
    pub addresses: SyntheticAddresses,

    /// Fuzzer configuration output
    #[serde(default)]
    pub fuzzer: FuzzerSettings,

    /// Scheme used for the checksummed account forms in the fuzzer config
    #[serde(default)]
    pub checksum_scheme: ChecksumScheme,
}

impl FuzzpropConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: FuzzpropConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Override values from `FUZZPROP_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        use log::debug;

        let accounts = [
            ("FUZZPROP_OWNER", &mut self.addresses.owner),
            ("FUZZPROP_USER", &mut self.addresses.user),
            ("FUZZPROP_ATTACKER", &mut self.addresses.attacker),
        ];
        for (var, slot) in accounts {
            if let Ok(value) = std::env::var(var) {
                *slot = Address::parse(&value).map_err(|_| ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    value: value.clone(),
                })?;
                debug!("{} set from environment", var);
            }
        }

        if let Ok(value) = std::env::var("FUZZPROP_CHECKSUM_SCHEME") {
            self.checksum_scheme = ChecksumScheme::parse(&value).ok_or_else(|| {
                ConfigError::InvalidEnvValue {
                    var: "FUZZPROP_CHECKSUM_SCHEME".to_string(),
                    value: value.clone(),
                }
            })?;
            debug!("Checksum scheme set from environment: {:?}", self.checksum_scheme);
        }

        Ok(())
    }
}
