pub mod address;
pub mod common;
pub mod event;
pub mod property;
pub mod artifact;

// Re-export common model types
pub use address::{ parse_ceiling, Address };
pub use common::{ PlatformKind, PropertyFamily };
pub use event::{ Event, KeyOrder };
pub use property::{ Property, PropertyCaller, PropertyKind, PropertyOutcome };
pub use artifact::{ EmittedArtifacts, RenderedContract, RenderedProperties };
