use anyhow::{ anyhow, Result };

use fuzzprop::{ checksum_encode, ChecksumScheme, FuzzpropConfig };

use crate::cli::ui;

pub fn execute(config: &FuzzpropConfig, address: &str, scheme: Option<&str>) -> Result<()> {
    let scheme = match scheme {
        Some(name) => ChecksumScheme::parse(name).ok_or_else(|| anyhow!("Unknown checksum scheme: {}", name))?,
        None => config.checksum_scheme,
    };
    if scheme == ChecksumScheme::Sha3Legacy {
        ui::print_warning("legacy checksums are not accepted by EIP-55 verifiers");
    }
    ui::print_result("Checksum", &checksum_encode(address, scheme)?);
    Ok(())
}
