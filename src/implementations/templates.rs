use crate::errors::PropResult;
use crate::models::artifact::RenderedContract;
use crate::models::common::PropertyFamily;
use crate::traits::contract_renderer::ContractRenderer;

/// Standalone property contract with the `HasBalance` interface inlined
#[derive(Debug, Clone)]
pub struct CryticTemplate {
    pub pragma: String,
}

impl Default for CryticTemplate {
    fn default() -> Self {
        Self { pragma: "pragma solidity ^0.5.0;".to_string() }
    }
}

impl ContractRenderer for CryticTemplate {
    fn render_properties(&self, family: PropertyFamily, body: &str) -> PropResult<RenderedContract> {
        let contract_name = format!("Properties{}", family.type_name());

        let mut source = String::new();
        source.push_str(&self.pragma);
        source.push_str("\n\n");
        source.push_str("interface HasBalance {\n");
        source.push_str("\tfunction balanceOf(address) external view returns (uint256);\n");
        source.push_str("}\n\n");
        source.push_str(&format!("contract {} {{\n\n", contract_name));
        source.push_str("\tconstructor() public {\n");
        source.push_str(&family.initialization_recommendation());
        source.push_str("\t}\n\n");
        source.push_str(body);
        source.push_str("}\n");

        Ok(RenderedContract {
            file_name: format!("{}.sol", contract_name),
            contract_name,
            source,
        })
    }
}
