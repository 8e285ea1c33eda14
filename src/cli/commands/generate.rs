use anyhow::{ anyhow, Context, Result };
use std::path::{ Path, PathBuf };

use fuzzprop::implementations::artifact_emitter::{ load_fuzzer_args, parse_fuzzer_args };
use fuzzprop::{
    parse_ceiling,
    ConflictPolicy,
    CryticTemplate,
    FuzzpropConfig,
    GenerateOptions,
    PlatformKind,
    PropertyPipeline,
    StaticContractModel,
};

use crate::cli::ui;

/// Caller-facing arguments of the generate command
pub struct GenerateArgs<'a> {
    pub trace: &'a Path,
    pub max_balance: Option<&'a str>,
    pub platform: &'a str,
    pub target: &'a Path,
    pub config_dir: &'a Path,
    pub fuzzer_args: &'a [String],
    pub fuzzer_args_file: Option<&'a Path>,
    pub on_conflict: Option<&'a str>,
    pub contract_model: Option<&'a Path>,
}

/// Trace to properties, split traces and Echidna configuration
pub fn execute(config: &FuzzpropConfig, args: &GenerateArgs<'_>) -> Result<()> {
    ui::print_header("Generating Fuzzing Properties");

    let mut config = config.clone();
    if let Some(policy) = args.on_conflict {
        config.fuzzer.conflict_policy = ConflictPolicy::parse(policy).ok_or_else(||
            anyhow!("Unknown conflict policy: {}", policy)
        )?;
    }

    let mut options = GenerateOptions::new(PathBuf::from(args.trace));
    options.ceiling = args.max_balance.map(parse_ceiling).transpose()?;
    options.platform = PlatformKind::parse(args.platform);
    options.target = args.target.to_path_buf();
    options.config_dir = args.config_dir.to_path_buf();

    if let Some(path) = args.fuzzer_args_file {
        options.fuzzer_args = load_fuzzer_args(path).with_context(||
            format!("Failed to load fuzzer arguments from {}", path.display())
        )?;
    }
    // Command line arguments take precedence over the file
    for (key, value) in parse_fuzzer_args(args.fuzzer_args)? {
        options.fuzzer_args.insert(key, value);
    }

    let model = args.contract_model
        .map(|path| {
            StaticContractModel::from_file(path).with_context(||
                format!("Failed to load contract model from {}", path.display())
            )
        })
        .transpose()?;

    let template = CryticTemplate::default();
    let mut pipeline = PropertyPipeline::new(&config, &template);
    if let Some(model) = model.as_ref() {
        pipeline = pipeline.with_contract_model(model);
    }

    let spinner = ui::spinner_with_message("Analyzing trace and synthesizing properties...");
    let report = match pipeline.run(&options) {
        Ok(report) => {
            spinner.finish_with_message("Artifacts generated");
            report
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    ui::print_result("Accounts", &report.analysis.accounts.len().to_string());
    ui::print_accounts(report.analysis.accounts.iter(), config.checksum_scheme);
    ui::print_result("Token-like contracts", &report.analysis.tokens.len().to_string());
    ui::print_accounts(report.analysis.tokens.keys(), config.checksum_scheme);
    ui::print_properties(&report.properties);

    if !report.rendered.source.is_empty() {
        ui::display_source(&report.rendered.source);
    }

    let artifacts = &report.artifacts;
    ui::print_result("Properties", &artifacts.property_file.display().to_string());
    ui::print_result(
        "Init transactions",
        &format!("{} ({} events)", artifacts.init_file.display(), report.analysis.init_trace.len())
    );
    ui::print_result(
        "Sample transactions",
        &format!("{} ({} events)", artifacts.samples_file.display(), report.analysis.sample_trace.len())
    );
    ui::print_result("Fuzzer config", &artifacts.config_file.display().to_string());
    if let Some(info) = &artifacts.unit_test_info {
        ui::print_text(info);
    }

    ui::print_success(
        &format!("Artifacts generated at {}", artifacts.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))
    );
    ui::print_info("To run Echidna:");
    println!(
        "\t echidna-test {} --contract {} --config {}",
        artifacts.property_file.display(),
        artifacts.contract_name,
        artifacts.config_file.display()
    );

    Ok(())
}
