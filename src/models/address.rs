use std::fmt;
use std::str::FromStr;

use alloy_primitives::{ Address as RawAddress, U256 };
use serde::{ Deserialize, Deserializer, Serialize, Serializer };

use crate::errors::{ PropError, PropResult };
use crate::implementations::checksum::{ apply_legacy_checksum, ChecksumScheme };

/// A 20-byte account or contract identifier.
///
/// Equality, ordering and hashing use the raw bytes, so `0xAB..` and `0xab..`
/// are the same address. `Display` yields the canonical lowercase form; the
/// checksum form is only produced on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(RawAddress);

impl Address {
    pub const HEX_WIDTH: usize = 40;

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(RawAddress::from(bytes))
    }

    /// Parse a hex address with or without `0x`, in any case.
    /// Short forms such as `0x10000` are left-padded with zeros.
    pub fn parse(value: &str) -> PropResult<Self> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed)
            .to_lowercase();

        if let Some((position, character)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(PropError::InvalidAddress {
                value: value.to_string(),
                position,
                character,
            });
        }
        if digits.is_empty() {
            return Err(PropError::MalformedAddress {
                value: value.to_string(),
                reason: "no hex digits".to_string(),
            });
        }
        if digits.len() > Self::HEX_WIDTH {
            return Err(PropError::MalformedAddress {
                value: value.to_string(),
                reason: format!("{} hex digits, at most {} allowed", digits.len(), Self::HEX_WIDTH),
            });
        }

        let even = if digits.len() % 2 == 1 { format!("0{}", digits) } else { digits };
        let bytes = hex::decode(&even).map_err(|e| PropError::MalformedAddress {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(RawAddress::left_padding_from(&bytes)))
    }

    /// Lowercase hex without the `0x` prefix
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }

    /// The address as an unsigned decimal integer, the form Solidity's
    /// `address(uint)` conversion takes.
    pub fn to_decimal(&self) -> String {
        U256::from_be_slice(self.0.as_slice()).to_string()
    }

    /// Mixed-case display form
    pub fn to_checksum(&self, scheme: ChecksumScheme) -> String {
        match scheme {
            ChecksumScheme::Sha3Legacy => apply_legacy_checksum(&self.to_hex()),
            ChecksumScheme::Eip55 => self.0.to_checksum(None),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = PropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Address::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse a balance ceiling given in decimal or `0x` hex
pub fn parse_ceiling(value: &str) -> PropResult<U256> {
    value
        .trim()
        .parse::<U256>()
        .map_err(|_| PropError::InvalidCeiling(value.to_string()))
}
