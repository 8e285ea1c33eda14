#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    use alloy_primitives::U256;
    use serde_yaml::{ Mapping, Value };

    use crate::errors::{ PropError, PropResult };
    use crate::implementations::artifact_emitter::{
        build_fuzzer_config,
        fuzzer_accounts,
        merge_fuzzer_args,
        parse_fuzzer_args,
        sibling_path,
        ArtifactEmitter,
        EmitRequest,
    };
    use crate::implementations::checksum::ChecksumScheme;
    use crate::implementations::config::{ ConflictPolicy, FuzzerSettings, SyntheticAddresses };
    use crate::implementations::property_renderer::PropertyRenderer;
    use crate::implementations::property_synthesizer::synthesize;
    use crate::implementations::templates::CryticTemplate;
    use crate::implementations::trace_analyzer::{ analyze, TraceAnalysis };
    use crate::models::address::Address;
    use crate::models::common::{ PlatformKind, PropertyFamily };
    use crate::models::event::Event;
    use crate::models::property::{ Property, PropertyCaller, PropertyKind, PropertyOutcome };
    use crate::tests::{ call, init_logging, ATTACKER, BALANCE_OF, CREATOR, TOKEN };
    use crate::traits::unit_test_generator::UnitTestGenerator;

    fn key(name: &str) -> Value {
        Value::String(name.to_string())
    }

    fn addresses() -> SyntheticAddresses {
        SyntheticAddresses {
            attacker: Address::parse(ATTACKER).unwrap(),
            ..SyntheticAddresses::default()
        }
    }

    fn sample_analysis() -> TraceAnalysis {
        let events = vec![Event::contract_created(CREATOR), call(ATTACKER, TOKEN, BALANCE_OF)];
        analyze(&events, &Address::parse(ATTACKER).unwrap(), Some(U256::ZERO)).unwrap()
    }

    #[derive(Default)]
    struct RecordingGenerator {
        seen: RefCell<Vec<String>>,
    }

    impl UnitTestGenerator for RecordingGenerator {
        fn generate(
            &self,
            family: PropertyFamily,
            unit_tests: &[Property],
            _addresses: &SyntheticAddresses,
            _output_dir: &Path
        ) -> PropResult<String> {
            self.seen.borrow_mut().extend(unit_tests.iter().map(|p| p.name.clone()));
            Ok(format!("{} unit tests for {}", unit_tests.len(), family.type_name()))
        }
    }

    #[test]
    fn test_sibling_paths() {
        let trace = Path::new("traces/run.json");
        assert_eq!(sibling_path(trace, "init"), Path::new("traces/run.json.init"));
        assert_eq!(sibling_path(trace, "samples"), Path::new("traces/run.json.samples"));
    }

    #[test]
    fn test_platform_output_directories() {
        let target = Path::new("/project/Token.sol");
        assert_eq!(PlatformKind::Solc.output_dir(target), Path::new("/project"));
        assert_eq!(
            PlatformKind::Truffle.output_dir(Path::new("/project")),
            Path::new("/project/contracts/crytic")
        );
        assert_eq!(PlatformKind::parse("hardhat"), PlatformKind::Builder);
        assert_eq!(PlatformKind::Other.output_dir(target), Path::new(""));
    }

    #[test]
    fn test_attacker_is_added_once() {
        let analysis = sample_analysis();
        let attacker = Address::parse(ATTACKER).unwrap();
        let accounts = fuzzer_accounts(&analysis.accounts, &attacker);
        assert_eq!(accounts, vec![Address::parse(CREATOR).unwrap(), attacker]);

        let outsider = Address::parse("0x30000").unwrap();
        let accounts = fuzzer_accounts(&analysis.accounts, &outsider);
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[2], outsider);
    }

    #[test]
    fn test_fuzzer_config_keys() {
        let accounts = vec![Address::parse(CREATOR).unwrap()];
        let config = build_fuzzer_config(
            &FuzzerSettings::default(),
            &accounts,
            ChecksumScheme::Eip55,
            Path::new("t.json.init"),
            Path::new("t.json.samples"),
            &Mapping::new()
        ).unwrap();

        assert_eq!(config.get("prefix"), Some(&key("crytic_")));
        assert_eq!(config.get("initialize"), Some(&key("t.json.init")));
        assert_eq!(config.get("samples"), Some(&key("t.json.samples")));
        assert_eq!(config.get("sender"), Some(&Value::Sequence(vec![key(CREATOR)])));
        let corresponding = config.get("corresponding").and_then(Value::as_mapping).unwrap();
        assert_eq!(
            corresponding.get(CREATOR),
            Some(&key(&accounts[0].to_checksum(ChecksumScheme::Eip55)))
        );
    }

    #[test]
    fn test_extra_arguments_are_merged() {
        let mut derived = Mapping::new();
        derived.insert(key("prefix"), key("crytic_"));
        let explicit = parse_fuzzer_args(
            &["seqLen=50".to_string(), "prefix=crytic_".to_string()]
        ).unwrap();

        let merged = merge_fuzzer_args(derived, &explicit, ConflictPolicy::Error).unwrap();
        assert_eq!(merged.get("seqLen").and_then(Value::as_u64), Some(50));
        assert_eq!(merged.get("prefix"), Some(&key("crytic_")));
    }

    #[test]
    fn test_conflicting_argument_is_an_error() {
        let mut derived = Mapping::new();
        derived.insert(key("initialize"), key("trace.json.init"));
        let mut explicit = Mapping::new();
        explicit.insert(key("initialize"), key("other.json"));

        match merge_fuzzer_args(derived, &explicit, ConflictPolicy::Error) {
            Err(PropError::ConfigConflict { key, explicit, derived }) => {
                assert_eq!(key, "initialize");
                assert_eq!(explicit, "other.json");
                assert_eq!(derived, "trace.json.init");
            }
            other => panic!("expected ConfigConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_warn_policy_keeps_caller_value() {
        init_logging();
        let mut derived = Mapping::new();
        derived.insert(key("initialize"), key("trace.json.init"));
        let mut explicit = Mapping::new();
        explicit.insert(key("initialize"), key("other.json"));

        let merged = merge_fuzzer_args(derived, &explicit, ConflictPolicy::Warn).unwrap();
        assert_eq!(merged.get("initialize"), Some(&key("other.json")));
    }

    #[test]
    fn test_malformed_argument_is_rejected() {
        assert!(matches!(
            parse_fuzzer_args(&["seqLen".to_string()]),
            Err(PropError::InvalidFuzzerArgument(_))
        ));
        assert!(parse_fuzzer_args(&["=5".to_string()]).is_err());
    }

    #[test]
    fn test_emit_writes_every_artifact() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let trace_path = dir.path().join("trace.json");
        let output_dir = dir.path().join("contracts").join("crytic");

        let analysis = sample_analysis();
        let attacker = Address::parse(ATTACKER).unwrap();
        let properties = synthesize(&attacker, &analysis.tokens);
        let rendered = PropertyRenderer::default().render_all(&properties).unwrap();
        let addresses = addresses();
        let fuzzer_args = parse_fuzzer_args(&["testLimit=1000".to_string()]).unwrap();

        let template = CryticTemplate::default();
        let emitter = ArtifactEmitter::new(&template, FuzzerSettings::default(), ChecksumScheme::Sha3Legacy);
        let artifacts = emitter
            .emit(
                &(EmitRequest {
                    trace_path: &trace_path,
                    family: PropertyFamily::Auto,
                    output_dir: &output_dir,
                    config_dir: dir.path(),
                    rendered: &rendered,
                    analysis: &analysis,
                    addresses: &addresses,
                    fuzzer_args: &fuzzer_args,
                })
            )
            .unwrap();

        assert_eq!(artifacts.contract_name, "PropertiesAUTO");
        assert_eq!(artifacts.property_file, output_dir.join("PropertiesAUTO.sol"));
        let source = fs::read_to_string(&artifacts.property_file).unwrap();
        assert!(source.contains("contract PropertiesAUTO {"));
        assert!(source.contains(&rendered.source));
        assert!(source.contains("crytic_attacker must have some tokens"));

        let init: Vec<Event> = serde_json::from_str(&fs::read_to_string(&artifacts.init_file).unwrap()).unwrap();
        let samples: Vec<Event> = serde_json::from_str(&fs::read_to_string(&artifacts.samples_file).unwrap()).unwrap();
        assert_eq!(init, analysis.init_trace);
        assert_eq!(samples, analysis.sample_trace);

        let config: Mapping = serde_yaml::from_str(&fs::read_to_string(&artifacts.config_file).unwrap()).unwrap();
        let senders = config.get("sender").and_then(Value::as_sequence).unwrap();
        assert_eq!(senders.len(), 2);
        assert_eq!(senders[1], key(ATTACKER));
        assert_eq!(config.get("testLimit").and_then(Value::as_u64), Some(1000));
        assert_eq!(
            config.get("initialize"),
            Some(&key(&artifacts.init_file.display().to_string()))
        );
        assert!(artifacts.unit_test_info.is_none());
    }

    #[test]
    fn test_conflict_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let trace_path = dir.path().join("trace.json");
        let analysis = sample_analysis();
        let rendered = PropertyRenderer::default().render_all(&[]).unwrap();
        let addresses = addresses();
        let fuzzer_args = parse_fuzzer_args(&["prefix=echidna_".to_string()]).unwrap();

        let template = CryticTemplate::default();
        let emitter = ArtifactEmitter::new(&template, FuzzerSettings::default(), ChecksumScheme::default());
        let result = emitter.emit(
            &(EmitRequest {
                trace_path: &trace_path,
                family: PropertyFamily::Auto,
                output_dir: dir.path(),
                config_dir: dir.path(),
                rendered: &rendered,
                analysis: &analysis,
                addresses: &addresses,
                fuzzer_args: &fuzzer_args,
            })
        );

        assert!(matches!(result, Err(PropError::ConfigConflict { .. })));
        assert!(!dir.path().join("trace.json.init").exists());
        assert!(!dir.path().join("echidna_config.yaml").exists());
    }

    #[test]
    fn test_unit_tests_are_handed_to_generator() {
        let dir = tempfile::tempdir().unwrap();
        let trace_path = dir.path().join("trace.json");
        let analysis = sample_analysis();
        let unit = Property {
            name: "crytic_revert_transfer_to_zero".to_string(),
            description: "Transfers to the zero address revert".to_string(),
            content: "HasBalance(address(1)).balanceOf(address(0))".to_string(),
            kind: PropertyKind::MediumSeverity,
            expected: PropertyOutcome::Throw,
            is_unit_test: true,
            is_fuzz_property: true,
            caller: PropertyCaller::User,
        };
        let rendered = PropertyRenderer::default().render_all(&[unit]).unwrap();
        let addresses = addresses();
        let fuzzer_args = Mapping::new();

        let template = CryticTemplate::default();
        let generator = RecordingGenerator::default();
        let emitter = ArtifactEmitter::new(&template, FuzzerSettings::default(), ChecksumScheme::default())
            .with_unit_test_generator(&generator);
        let artifacts = emitter
            .emit(
                &(EmitRequest {
                    trace_path: &trace_path,
                    family: PropertyFamily::Transferable,
                    output_dir: dir.path(),
                    config_dir: dir.path(),
                    rendered: &rendered,
                    analysis: &analysis,
                    addresses: &addresses,
                    fuzzer_args: &fuzzer_args,
                })
            )
            .unwrap();

        assert_eq!(artifacts.unit_test_info.as_deref(), Some("1 unit tests for Transferable"));
        assert_eq!(generator.seen.borrow().as_slice(), ["crytic_revert_transfer_to_zero".to_string()]);
    }

    #[test]
    fn test_initialization_recommendation_per_family() {
        let auto = PropertyFamily::Auto.initialization_recommendation();
        assert!(!auto.contains("paused"));
        assert!(PropertyFamily::Pausable.initialization_recommendation().contains("must be paused"));
        let both = PropertyFamily::NotMintableNotBurnable.initialization_recommendation();
        assert!(both.contains("must not be mintable"));
        assert!(both.contains("must not be burnable"));
    }
}
