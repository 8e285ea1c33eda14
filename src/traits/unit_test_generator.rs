use std::path::Path;

use crate::errors::PropResult;
use crate::implementations::config::SyntheticAddresses;
use crate::models::common::PropertyFamily;
use crate::models::property::Property;

/// Generates conventional unit tests for properties flagged `is_unit_test`
pub trait UnitTestGenerator {
    /// Write the tests and return a message telling the user how to run them
    fn generate(
        &self,
        family: PropertyFamily,
        unit_tests: &[Property],
        addresses: &SyntheticAddresses,
        output_dir: &Path
    ) -> PropResult<String>;
}
