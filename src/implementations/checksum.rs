use serde::{ Deserialize, Serialize };
use sha3::{ Digest, Sha3_512 };

use crate::errors::{ PropError, PropResult };
use crate::models::address::Address;

/// Digest used to decide the case of each hex letter.
///
/// `Sha3Legacy` hashes with SHA3-512 and reads the digest nibble at the same
/// index as the address character. Existing Echidna configs produced by this
/// toolchain use it, but standard EIP-55 verifiers reject the result.
/// `Eip55` is the interoperable Keccak-256 scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChecksumScheme {
    #[default]
    Sha3Legacy,
    Eip55,
}

impl ChecksumScheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "legacy" | "sha3" | "sha3-legacy" => Some(ChecksumScheme::Sha3Legacy),
            "eip55" | "eip-55" | "keccak" => Some(ChecksumScheme::Eip55),
            _ => None,
        }
    }
}

/// Mixed-case encode a 20-byte hex address given with or without `0x`, in
/// any case.
///
/// Any character outside `[0-9a-f]` after lowercasing is rejected with its
/// position, and anything but exactly 40 hex digits is rejected.
pub fn checksum_encode(hex_addr: &str, scheme: ChecksumScheme) -> PropResult<String> {
    let lower = hex_addr.to_lowercase();
    let stripped = lower.strip_prefix("0x").unwrap_or(&lower);

    for (position, character) in stripped.chars().enumerate() {
        if !matches!(character, '0'..='9' | 'a'..='f') {
            return Err(PropError::InvalidAddress {
                value: hex_addr.to_string(),
                position,
                character,
            });
        }
    }
    if stripped.len() != Address::HEX_WIDTH {
        return Err(PropError::MalformedAddress {
            value: hex_addr.to_string(),
            reason: format!("{} hex digits, expected {}", stripped.len(), Address::HEX_WIDTH),
        });
    }

    Ok(Address::parse(stripped)?.to_checksum(scheme))
}

/// SHA3-512 casing: a letter is uppercased when the digest nibble at its
/// index is above 7. `lower` must be validated lowercase hex.
pub(crate) fn apply_legacy_checksum(lower: &str) -> String {
    let digest = hex::encode(Sha3_512::digest(lower.as_bytes()));
    let mut encoded = String::with_capacity(lower.len() + 2);
    encoded.push_str("0x");

    for (character, nibble) in lower.chars().zip(digest.chars()) {
        let upper = character.is_ascii_alphabetic() && nibble.to_digit(16).unwrap_or(0) > 7;
        if upper {
            encoded.push(character.to_ascii_uppercase());
        } else {
            encoded.push(character);
        }
    }

    encoded
}
