use anyhow::{ Context, Result };
use clap::Parser;
use log::{ debug, error, info };

use fuzzprop::FuzzpropConfig;

mod cli;
use cli::commands::generate::GenerateArgs;
use cli::{ Commands, FuzzpropCli };

fn main() {
    // Parse the command line arguments
    let cli = FuzzpropCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &FuzzpropCli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Generate {
            trace,
            max_balance,
            platform,
            target,
            config_dir,
            fuzzer_args,
            fuzzer_args_file,
            on_conflict,
            contract_model,
        } => {
            cli::commands::generate::execute(
                &config,
                &(GenerateArgs {
                    trace,
                    max_balance: max_balance.as_deref(),
                    platform,
                    target,
                    config_dir,
                    fuzzer_args,
                    fuzzer_args_file: fuzzer_args_file.as_deref(),
                    on_conflict: on_conflict.as_deref(),
                    contract_model: contract_model.as_deref(),
                })
            )
        }

        Commands::Inspect { trace, max_balance } => {
            cli::commands::inspect::execute(&config, trace, max_balance.as_deref())
        }

        Commands::Checksum { address, scheme } => {
            cli::commands::checksum::execute(&config, address, scheme.as_deref())
        }
    }
}

fn load_config(cli: &FuzzpropCli) -> Result<FuzzpropConfig> {
    // A missing .env file is fine
    if dotenv::dotenv().is_ok() {
        debug!("Loaded environment variables from .env file");
    }

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            FuzzpropConfig::from_file(path).with_context(||
                format!("Failed to load configuration from {}", path.display())
            )?
        }
        None => FuzzpropConfig::default(),
    };
    config.apply_env_overrides()?;
    debug!("Attacker account: {}", config.addresses.attacker);

    Ok(config)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
