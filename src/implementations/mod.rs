pub mod checksum;
pub mod selector;
pub mod trace_analyzer;
pub mod property_synthesizer;
pub mod property_renderer;
pub mod artifact_emitter;
pub mod compatibility;
pub mod templates;
pub mod config;
pub mod pipeline;
