use alloy_primitives::{ keccak256, U256 };
use serde_json::Map;

use crate::models::address::Address;
use crate::models::event::{ Event, KeyOrder };

/// Minimal token interface recognised in traces
pub const TOKEN_SIGNATURES: [&str; 3] = [
    "transfer(address,uint256)",
    "balanceOf(address)",
    "approve(address,uint256)",
];

/// First four bytes of the Keccak-256 hash of a canonical signature
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Leading selector of a `0x` hex call blob, `None` when too short or not hex
pub fn call_selector(data: &str) -> Option<[u8; 4]> {
    let digits = data.strip_prefix("0x").or_else(|| data.strip_prefix("0X")).unwrap_or(data);
    let head = digits.get(..8)?;
    let mut selector = [0u8; 4];
    hex::decode_to_slice(head, &mut selector).ok()?;
    Some(selector)
}

/// Set membership test over known function selectors
#[derive(Debug, Clone)]
pub struct SelectorMatcher {
    selectors: Vec<([u8; 4], String)>,
}

impl SelectorMatcher {
    pub fn new<I, S>(signatures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selectors = signatures
            .into_iter()
            .map(|signature| {
                let signature = signature.into();
                (function_selector(&signature), signature)
            })
            .collect();
        Self { selectors }
    }

    pub fn token_interface() -> Self {
        Self::new(TOKEN_SIGNATURES)
    }

    pub fn matches(&self, data: &str) -> bool {
        self.matched_signature(data).is_some()
    }

    /// Signature whose selector starts `data`
    pub fn matched_signature(&self, data: &str) -> Option<&str> {
        let selector = call_selector(data)?;
        self.selectors
            .iter()
            .find(|(known, _)| *known == selector)
            .map(|(_, signature)| signature.as_str())
    }
}

impl Default for SelectorMatcher {
    fn default() -> Self {
        Self::token_interface()
    }
}

/// Build a `FunctionCall` event invoking an `(address,uint256)` function such
/// as `transfer` on `contract`.
pub fn encode_call(
    signature: &str,
    from: &Address,
    recipient: &Address,
    contract: &Address,
    amount: U256
) -> Event {
    let data = format!(
        "0x{}{:0>64}{}",
        hex::encode(function_selector(signature)),
        recipient.to_hex(),
        hex::encode(amount.to_be_bytes::<32>())
    );

    Event::FunctionCall {
        from: from.to_string(),
        to: contract.to_string(),
        data,
        value: "0x0".to_string(),
        gas_used: "0x1".to_string(),
        gas_price: "0x1".to_string(),
        extra: Map::new(),
        order: KeyOrder::default(),
    }
}
