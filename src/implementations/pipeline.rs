use log::info;

use crate::config::GenerateOptions;
use crate::errors::PropResult;
use crate::implementations::artifact_emitter::{ ArtifactEmitter, EmitRequest };
use crate::implementations::compatibility::check_compatibility;
use crate::implementations::config::FuzzpropConfig;
use crate::implementations::property_renderer::PropertyRenderer;
use crate::implementations::property_synthesizer::synthesize;
use crate::implementations::trace_analyzer::{ load_trace, TraceAnalysis, TraceAnalyzer };
use crate::models::artifact::{ EmittedArtifacts, RenderedProperties };
use crate::models::property::Property;
use crate::traits::contract_model::ContractModel;
use crate::traits::contract_renderer::ContractRenderer;
use crate::traits::unit_test_generator::UnitTestGenerator;

/// Outcome of a full generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub analysis: TraceAnalysis,
    pub properties: Vec<Property>,
    pub rendered: RenderedProperties,
    pub artifacts: EmittedArtifacts,
}

/// Trace to artifacts: analyze, synthesize, render, emit
pub struct PropertyPipeline<'a> {
    config: &'a FuzzpropConfig,
    renderer: &'a dyn ContractRenderer,
    model: Option<&'a dyn ContractModel>,
    unit_test_generator: Option<&'a dyn UnitTestGenerator>,
    analyzer: TraceAnalyzer,
    property_renderer: PropertyRenderer,
}

impl<'a> PropertyPipeline<'a> {
    pub fn new(config: &'a FuzzpropConfig, renderer: &'a dyn ContractRenderer) -> Self {
        Self {
            config,
            renderer,
            model: None,
            unit_test_generator: None,
            analyzer: TraceAnalyzer::default(),
            property_renderer: PropertyRenderer::default(),
        }
    }

    /// Check the target contract before generating anything
    pub fn with_contract_model(mut self, model: &'a dyn ContractModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_unit_test_generator(mut self, generator: &'a dyn UnitTestGenerator) -> Self {
        self.unit_test_generator = Some(generator);
        self
    }

    pub fn run(&self, options: &GenerateOptions) -> PropResult<GenerationReport> {
        if let Some(model) = self.model {
            check_compatibility(model)?;
        }

        let attacker = self.config.addresses.attacker;
        let events = load_trace(&options.trace_path)?;
        let analysis = self.analyzer.analyze(&events, &attacker, options.ceiling)?;

        let properties = synthesize(&attacker, &analysis.tokens);
        info!("Synthesized {} properties", properties.len());
        let rendered = self.property_renderer.render_all(&properties)?;

        let output_dir = options.platform.output_dir(&options.target);
        let mut emitter = ArtifactEmitter::new(
            self.renderer,
            self.config.fuzzer.clone(),
            self.config.checksum_scheme
        );
        if let Some(generator) = self.unit_test_generator {
            emitter = emitter.with_unit_test_generator(generator);
        }
        let artifacts = emitter.emit(
            &(EmitRequest {
                trace_path: &options.trace_path,
                family: options.family,
                output_dir: &output_dir,
                config_dir: &options.config_dir,
                rendered: &rendered,
                analysis: &analysis,
                addresses: &self.config.addresses,
                fuzzer_args: &options.fuzzer_args,
            })
        )?;

        Ok(GenerationReport { analysis, properties, rendered, artifacts })
    }
}
