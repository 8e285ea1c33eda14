use std::fmt;

use serde::{ Deserialize, Serialize };

/// An invariant to be checked by the fuzzer or surfaced as a unit test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub description: String,
    /// Single-line assertion body referencing concrete addresses
    pub content: String,
    pub kind: PropertyKind,
    pub expected: PropertyOutcome,
    pub is_unit_test: bool,
    pub is_fuzz_property: bool,
    pub caller: PropertyCaller,
}

/// Classification of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    CodeQuality,
    LowSeverity,
    MediumSeverity,
    HighSeverity,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::CodeQuality,
        PropertyKind::LowSeverity,
        PropertyKind::MediumSeverity,
        PropertyKind::HighSeverity,
    ];
}

/// What a passing fuzzing run observes when evaluating the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyOutcome {
    /// The assertion holds for every explored input
    Success,
    /// The assertion is false for every explored input
    Fail,
    /// Evaluating the assertion reverts
    Throw,
}

impl PropertyOutcome {
    pub const ALL: [PropertyOutcome; 3] = [
        PropertyOutcome::Success,
        PropertyOutcome::Fail,
        PropertyOutcome::Throw,
    ];
}

/// Which synthetic account may legitimately invoke the check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCaller {
    Any,
    Owner,
    User,
    Attacker,
}

impl fmt::Display for PropertyCaller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyCaller::Any => write!(f, "any"),
            PropertyCaller::Owner => write!(f, "owner"),
            PropertyCaller::User => write!(f, "user"),
            PropertyCaller::Attacker => write!(f, "attacker"),
        }
    }
}
