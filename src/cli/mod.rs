use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "fuzzprop",
    about = "Generates Echidna properties for token contracts from a transaction trace",
    version,
    author,
    long_about = None
)]
pub struct FuzzpropCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file (addresses, fuzzer settings)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate properties, split traces and fuzzer configuration
    Generate {
        /// JSON trace of ContractCreated/FunctionCall events
        #[arg(short, long)]
        trace: PathBuf,

        /// Maximum balance the attacker may hold (decimal or 0x hex)
        #[arg(short = 'm', long)]
        max_balance: Option<String>,

        /// Build platform of the target (truffle, builder, solc)
        #[arg(short, long, default_value = "solc")]
        platform: String,

        /// Build target the output directory is derived from
        #[arg(long, default_value = ".")]
        target: PathBuf,

        /// Directory for the fuzzer configuration
        #[arg(long, default_value = ".")]
        config_dir: PathBuf,

        /// Extra fuzzer argument as key=value, may be repeated
        #[arg(short = 'a', long = "fuzzer-arg")]
        fuzzer_args: Vec<String>,

        /// YAML mapping of extra fuzzer arguments
        #[arg(long)]
        fuzzer_args_file: Option<PathBuf>,

        /// How to handle derived values that conflict with extra arguments (error, warn)
        #[arg(long)]
        on_conflict: Option<String>,

        /// YAML contract description checked for compatibility first
        #[arg(long)]
        contract_model: Option<PathBuf>,
    },

    /// Analyze a trace without writing anything
    Inspect {
        /// JSON trace of ContractCreated/FunctionCall events
        #[arg(short, long)]
        trace: PathBuf,

        /// Maximum balance the attacker may hold (decimal or 0x hex)
        #[arg(short = 'm', long)]
        max_balance: Option<String>,
    },

    /// Print the checksummed form of an address
    Checksum {
        address: String,

        /// Checksum scheme (legacy, eip55)
        #[arg(short, long)]
        scheme: Option<String>,
    },
}
