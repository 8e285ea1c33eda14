use crate::errors::PropResult;
use crate::models::artifact::RenderedContract;
use crate::models::common::PropertyFamily;

/// Composes the Solidity file that hosts rendered property functions
pub trait ContractRenderer {
    fn render_properties(&self, family: PropertyFamily, body: &str) -> PropResult<RenderedContract>;
}
