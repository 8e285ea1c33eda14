pub mod contract_model;
pub mod contract_renderer;
pub mod unit_test_generator;

// Re-export traits
pub use contract_model::{ ContractModel, Visibility };
pub use contract_renderer::ContractRenderer;
pub use unit_test_generator::UnitTestGenerator;
