pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::GenerateOptions;
pub use errors::{ ErrorSeverity, PropError, PropResult };
pub use implementations::{
    artifact_emitter::{ ArtifactEmitter, EmitRequest },
    checksum::{ checksum_encode, ChecksumScheme },
    compatibility::{ check_compatibility, StaticContractModel },
    config::{ ConfigError, ConflictPolicy, FuzzerSettings, FuzzpropConfig, SyntheticAddresses },
    pipeline::{ GenerationReport, PropertyPipeline },
    property_renderer::{ PropertyRenderer, RenderShape, RenderTable },
    property_synthesizer::{ synthesize, validate_properties },
    selector::{ encode_call, function_selector, SelectorMatcher },
    templates::CryticTemplate,
    trace_analyzer::{ analyze, load_trace, TraceAnalysis, TraceAnalyzer },
};
pub use models::{
    address::{ parse_ceiling, Address },
    artifact::{ EmittedArtifacts, RenderedContract, RenderedProperties },
    common::{ PlatformKind, PropertyFamily },
    event::Event,
    property::{ Property, PropertyCaller, PropertyKind, PropertyOutcome },
};
pub use traits::{ ContractModel, ContractRenderer, UnitTestGenerator, Visibility };
