use colored::*;
use console::Term;
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use fuzzprop::{ Address, ChecksumScheme, Property };

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        if line.starts_with('#') || line.starts_with('-') {
            println!("{}", line);
        } else {
            for wrapped_line in wrap(line, width.saturating_sub(10).max(20)) {
                println!("{}", wrapped_line);
            }
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Accounts with their checksummed display form
pub fn print_accounts<'a>(accounts: impl IntoIterator<Item = &'a Address>, scheme: ChecksumScheme) {
    for account in accounts {
        println!("  {} {}", "-".dimmed(), account.to_checksum(scheme));
    }
}

/// Property names and descriptions
pub fn print_properties(properties: &[Property]) {
    if properties.is_empty() {
        print_warning("No token-like contract found, no property generated");
        return;
    }
    for property in properties {
        println!("  {} {}", property.name.cyan(), format!("({})", property.description).dimmed());
    }
}

/// Display rendered Solidity
pub fn display_source(code: &str) {
    print_header("Generated Properties");
    println!("{}", "```solidity".dimmed());
    println!("{}", code);
    println!("{}", "```".dimmed());
}

pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
