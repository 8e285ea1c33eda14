use serde::{ Deserialize, Serialize };

/// Function visibility as reported by the source model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    External,
    Internal,
    Private,
}

/// Queries the property generator needs from a parsed contract
pub trait ContractModel {
    /// Contract name
    fn name(&self) -> &str;

    /// Whether the contract implements the ERC20 interface
    fn is_erc20(&self) -> bool;

    /// Visibility of the function with the given canonical signature,
    /// `None` when the contract does not define it
    fn function_visibility(&self, signature: &str) -> Option<Visibility>;

    /// Fully qualified name used in diagnostics
    fn canonical_name(&self, signature: &str) -> String {
        format!("{}.{}", self.name(), signature)
    }
}
