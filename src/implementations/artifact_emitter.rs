use std::fs;
use std::path::{ Path, PathBuf };

use indexmap::IndexSet;
use log::{ debug, info, warn };
use serde_yaml::{ Mapping, Value };

use crate::errors::{ ErrorSeverity, PropError, PropResult };
use crate::implementations::checksum::ChecksumScheme;
use crate::implementations::config::{ ConflictPolicy, FuzzerSettings, SyntheticAddresses };
use crate::implementations::trace_analyzer::TraceAnalysis;
use crate::models::address::Address;
use crate::models::artifact::{ EmittedArtifacts, RenderedProperties };
use crate::models::common::PropertyFamily;
use crate::models::event::Event;
use crate::traits::contract_renderer::ContractRenderer;
use crate::traits::unit_test_generator::UnitTestGenerator;

/// Inputs of one emitter run
pub struct EmitRequest<'a> {
    pub trace_path: &'a Path,
    pub family: PropertyFamily,
    /// Platform output directory for Solidity files
    pub output_dir: &'a Path,
    /// Directory receiving the fuzzer configuration
    pub config_dir: &'a Path,
    pub rendered: &'a RenderedProperties,
    pub analysis: &'a TraceAnalysis,
    pub addresses: &'a SyntheticAddresses,
    pub fuzzer_args: &'a Mapping,
}

/// Writes the property contract, trace halves and fuzzer configuration
pub struct ArtifactEmitter<'a> {
    renderer: &'a dyn ContractRenderer,
    unit_test_generator: Option<&'a dyn UnitTestGenerator>,
    settings: FuzzerSettings,
    checksum: ChecksumScheme,
}

impl<'a> ArtifactEmitter<'a> {
    pub fn new(
        renderer: &'a dyn ContractRenderer,
        settings: FuzzerSettings,
        checksum: ChecksumScheme
    ) -> Self {
        Self {
            renderer,
            unit_test_generator: None,
            settings,
            checksum,
        }
    }

    pub fn with_unit_test_generator(mut self, generator: &'a dyn UnitTestGenerator) -> Self {
        self.unit_test_generator = Some(generator);
        self
    }

    pub fn emit(&self, request: &EmitRequest<'_>) -> PropResult<EmittedArtifacts> {
        let init_file = sibling_path(request.trace_path, "init");
        let samples_file = sibling_path(request.trace_path, "samples");

        // Resolve conflicts before anything touches the disk
        let accounts = fuzzer_accounts(&request.analysis.accounts, &request.addresses.attacker);
        let config = build_fuzzer_config(
            &self.settings,
            &accounts,
            self.checksum,
            &init_file,
            &samples_file,
            request.fuzzer_args
        )?;

        ensure_dir(request.output_dir)?;
        let contract = self.renderer.render_properties(request.family, &request.rendered.source)?;
        let property_file = request.output_dir.join(&contract.file_name);
        fs::write(&property_file, &contract.source)?;
        info!("Properties written to {}", property_file.display());

        info!("Saving JSON with init transactions");
        write_trace(&init_file, &request.analysis.init_trace)?;
        info!("Saving JSON with sample transactions");
        write_trace(&samples_file, &request.analysis.sample_trace)?;

        ensure_dir(request.config_dir)?;
        let config_file = request.config_dir.join(&self.settings.config_file);
        fs::write(&config_file, serde_yaml::to_string(&config)?)?;
        info!("Fuzzer configuration written to {}", config_file.display());

        let unit_test_info = match self.unit_test_generator {
            Some(generator) if !request.rendered.unit_tests.is_empty() =>
                Some(
                    generator.generate(
                        request.family,
                        &request.rendered.unit_tests,
                        request.addresses,
                        request.output_dir
                    )?
                ),
            _ => None,
        };

        Ok(EmittedArtifacts {
            property_file,
            contract_name: contract.contract_name,
            init_file,
            samples_file,
            config_file,
            unit_test_info,
            generated_at: chrono::Utc::now(),
        })
    }
}

fn ensure_dir(dir: &Path) -> PropResult<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// `<trace>.<suffix>` next to the trace file
pub fn sibling_path(trace_path: &Path, suffix: &str) -> PathBuf {
    let mut name = trace_path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Serialize a slice of the trace as a JSON array, each object keeping the
/// key order it was read with
pub fn write_trace(path: &Path, events: &[Event]) -> PropResult<()> {
    let objects = events.iter().map(Event::to_json).collect::<serde_json::Result<Vec<_>>>()?;
    let json = serde_json::to_string(&objects)?;
    fs::write(path, json)?;
    debug!("Wrote {} events to {}", events.len(), path.display());
    Ok(())
}

/// Discovered accounts followed by the attacker, without duplicates
pub fn fuzzer_accounts(accounts: &IndexSet<Address>, attacker: &Address) -> Vec<Address> {
    let mut all = accounts.clone();
    all.insert(*attacker);
    all.into_iter().collect()
}

/// Derived fuzzer settings merged with the caller's arguments
pub fn build_fuzzer_config(
    settings: &FuzzerSettings,
    accounts: &[Address],
    checksum: ChecksumScheme,
    init_file: &Path,
    samples_file: &Path,
    fuzzer_args: &Mapping
) -> PropResult<Mapping> {
    let mut derived = Mapping::new();
    derived.insert(text("prefix"), text(&settings.prefix));
    derived.insert(
        text("sender"),
        Value::Sequence(accounts.iter().map(|account| text(&account.to_string())).collect())
    );

    let mut corresponding = Mapping::new();
    for account in accounts {
        corresponding.insert(text(&account.to_string()), text(&account.to_checksum(checksum)));
    }
    derived.insert(text("corresponding"), Value::Mapping(corresponding));
    derived.insert(text("initialize"), text(&init_file.display().to_string()));
    derived.insert(text("samples"), text(&samples_file.display().to_string()));

    merge_fuzzer_args(derived, fuzzer_args, settings.conflict_policy)
}

/// Add caller arguments to the derived ones. A caller value that differs
/// from a derived one is a conflict handled according to `policy`.
pub fn merge_fuzzer_args(
    derived: Mapping,
    explicit: &Mapping,
    policy: ConflictPolicy
) -> PropResult<Mapping> {
    let mut merged = derived;
    for (key, value) in explicit {
        if let Some(existing) = merged.get(key) {
            if existing != value {
                let conflict = PropError::ConfigConflict {
                    key: yaml_text(key),
                    explicit: yaml_text(value),
                    derived: yaml_text(existing),
                };
                let downgrade =
                    policy == ConflictPolicy::Warn &&
                    conflict.severity() == ErrorSeverity::Warning;
                if !downgrade {
                    return Err(conflict);
                }
                warn!("{}; keeping the caller value", conflict);
            }
        }
        merged.insert(key.clone(), value.clone());
    }
    Ok(merged)
}

/// Parse `key=value` fuzzer arguments, values read as YAML scalars
pub fn parse_fuzzer_args(args: &[String]) -> PropResult<Mapping> {
    let mut mapping = Mapping::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| PropError::InvalidFuzzerArgument(arg.clone()))?;
        let value: Value = serde_yaml::from_str(value.trim())?;
        mapping.insert(text(key.trim()), value);
    }
    Ok(mapping)
}

/// Read fuzzer arguments from a YAML mapping file
pub fn load_fuzzer_args(path: &Path) -> PropResult<Mapping> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

fn yaml_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other =>
            serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
