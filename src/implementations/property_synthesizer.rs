use std::collections::HashSet;

use alloy_primitives::U256;
use indexmap::IndexMap;
use log::debug;

use crate::errors::{ PropError, PropResult };
use crate::models::address::Address;
use crate::models::property::{ Property, PropertyCaller, PropertyKind, PropertyOutcome };

pub const TOKEN_MAX_PREFIX: &str = "crytic_attacker_cannot_get_tokens_more_than_";

/// Property name for a token/ceiling pair, unique per token
pub fn token_max_name(token: &Address, ceiling: U256) -> String {
    format!("{}{}_from_{}", TOKEN_MAX_PREFIX, ceiling, token.to_hex())
}

/// One "attacker balance never exceeds the ceiling" property per token,
/// in the map's insertion order.
pub fn synthesize(attacker: &Address, tokens: &IndexMap<Address, U256>) -> Vec<Property> {
    tokens
        .iter()
        .map(|(token, ceiling)| {
            let property = Property {
                name: token_max_name(token, *ceiling),
                description: "The attacker address should not receive tokens.".to_string(),
                content: format!(
                    "HasBalance(address({})).balanceOf(address({})) <= {}",
                    token.to_decimal(),
                    attacker.to_decimal(),
                    ceiling
                ),
                kind: PropertyKind::CodeQuality,
                expected: PropertyOutcome::Success,
                is_unit_test: false,
                is_fuzz_property: true,
                caller: PropertyCaller::Any,
            };
            debug!("Synthesized {}", property.name);
            property
        })
        .collect()
}

/// Reject duplicate names, multi-line content and records surfaced nowhere
pub fn validate_properties(properties: &[Property]) -> PropResult<()> {
    let mut seen = HashSet::new();
    for property in properties {
        if !seen.insert(property.name.as_str()) {
            return Err(PropError::InvalidProperty {
                name: property.name.clone(),
                reason: "duplicate name".to_string(),
            });
        }
        if property.content.contains('\n') || property.content.contains('\r') {
            return Err(PropError::InvalidProperty {
                name: property.name.clone(),
                reason: "content spans multiple lines".to_string(),
            });
        }
        if !property.is_unit_test && !property.is_fuzz_property {
            return Err(PropError::InvalidProperty {
                name: property.name.clone(),
                reason: "neither a unit test nor a fuzz property".to_string(),
            });
        }
    }
    Ok(())
}
