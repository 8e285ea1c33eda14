use anyhow::Result;
use std::path::Path;

use fuzzprop::{ load_trace, parse_ceiling, synthesize, FuzzpropConfig, TraceAnalyzer };

use crate::cli::ui;

/// Report accounts, token-like contracts and the split point of a trace
pub fn execute(config: &FuzzpropConfig, trace: &Path, max_balance: Option<&str>) -> Result<()> {
    ui::print_header("Inspecting Trace");

    let ceiling = max_balance.map(parse_ceiling).transpose()?;
    let events = load_trace(trace)?;
    let attacker = config.addresses.attacker;
    let analysis = TraceAnalyzer::default().analyze(&events, &attacker, ceiling)?;

    ui::print_result("Events", &events.len().to_string());
    ui::print_result("Accounts", &analysis.accounts.len().to_string());
    ui::print_accounts(analysis.accounts.iter(), config.checksum_scheme);
    ui::print_result("Token-like contracts", &analysis.tokens.len().to_string());
    for (token, ceiling) in &analysis.tokens {
        println!("  - {} (ceiling {})", token.to_checksum(config.checksum_scheme), ceiling);
    }
    ui::print_result(
        "Split",
        &format!("{} init / {} samples", analysis.init_trace.len(), analysis.sample_trace.len())
    );

    ui::print_header("Properties");
    ui::print_properties(&synthesize(&attacker, &analysis.tokens));

    Ok(())
}
