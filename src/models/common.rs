use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

/// Build platform of the target project, decides where generated contracts go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Truffle,
    Builder,
    Solc,
    Other,
}

impl PlatformKind {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "truffle" => PlatformKind::Truffle,
            "builder" | "buidler" | "hardhat" => PlatformKind::Builder,
            "solc" => PlatformKind::Solc,
            _ => PlatformKind::Other,
        }
    }

    /// Output directory for generated Solidity files
    pub fn output_dir(&self, target: &Path) -> PathBuf {
        match self {
            PlatformKind::Truffle | PlatformKind::Builder => target.join("contracts").join("crytic"),
            PlatformKind::Solc => target.parent().map(Path::to_path_buf).unwrap_or_default(),
            PlatformKind::Other => PathBuf::new(),
        }
    }
}

/// Family of generated properties, drives naming and setup advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyFamily {
    Auto,
    Transferable,
    Pausable,
    NotMintable,
    NotBurnable,
    NotMintableNotBurnable,
}

impl PropertyFamily {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyFamily::Auto => "AUTO",
            PropertyFamily::Transferable => "Transferable",
            PropertyFamily::Pausable => "Pausable",
            PropertyFamily::NotMintable => "NotMintable",
            PropertyFamily::NotBurnable => "NotBurnable",
            PropertyFamily::NotMintableNotBurnable => "NotMintableNotBurnable",
        }
    }

    /// Comment block telling the user how the test contract must be set up
    pub fn initialization_recommendation(&self) -> String {
        let mut content = String::new();
        content.push_str("\t\t// Add below a minimal configuration:\n");
        content.push_str("\t\t// - crytic_owner must have some tokens \n");
        content.push_str("\t\t// - crytic_user must have some tokens \n");
        content.push_str("\t\t// - crytic_attacker must have some tokens \n");
        if matches!(self, PropertyFamily::Pausable) {
            content.push_str("\t\t// - The contract must be paused \n");
        }
        if matches!(self, PropertyFamily::NotMintable | PropertyFamily::NotMintableNotBurnable) {
            content.push_str("\t\t// - The contract must not be mintable \n");
        }
        if matches!(self, PropertyFamily::NotBurnable | PropertyFamily::NotMintableNotBurnable) {
            content.push_str("\t\t// - The contract must not be burnable \n");
        }
        content.push('\n');
        content.push('\n');
        content
    }
}
