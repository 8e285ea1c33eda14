use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{ Deserialize, Serialize };

use crate::errors::{ PropError, PropResult };
use crate::traits::contract_model::{ ContractModel, Visibility };

/// Functions the generated harness calls directly
pub const REQUIRED_PUBLIC: [&str; 3] = [
    "transfer(address,uint256)",
    "transferFrom(address,address,uint256)",
    "approve(address,uint256)",
];

/// Check that properties can be generated for `model`, reporting every
/// problem found rather than the first one.
pub fn check_compatibility(model: &dyn ContractModel) -> PropResult<()> {
    if !model.is_erc20() {
        return Err(
            PropError::Incompatible(
                vec![
                    format!(
                        "{} is not ERC20 compliant. Consider checking the contract with slither-check-erc",
                        model.name()
                    )
                ]
            )
        );
    }

    let errors: Vec<String> = REQUIRED_PUBLIC.iter()
        .filter_map(|signature| {
            match model.function_visibility(signature) {
                Some(Visibility::Public) => None,
                Some(_) =>
                    Some(
                        format!(
                            "fuzzprop requires {} to be public. Please change the visibility",
                            model.canonical_name(signature)
                        )
                    ),
                None => Some(format!("{} is missing", model.canonical_name(signature))),
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PropError::Incompatible(errors))
    }
}

/// Contract model described in a YAML file, for use without a source parser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticContractModel {
    pub name: String,
    #[serde(default)]
    pub erc20: bool,
    /// Canonical signature to visibility
    #[serde(default)]
    pub functions: HashMap<String, Visibility>,
}

impl StaticContractModel {
    pub fn from_file(path: &Path) -> PropResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

impl ContractModel for StaticContractModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_erc20(&self) -> bool {
        self.erc20
    }

    fn function_visibility(&self, signature: &str) -> Option<Visibility> {
        self.functions.get(signature).copied()
    }
}
