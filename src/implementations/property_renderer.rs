use std::collections::HashMap;

use crate::errors::{ PropError, PropResult };
use crate::implementations::property_synthesizer::validate_properties;
use crate::models::artifact::RenderedProperties;
use crate::models::property::{ Property, PropertyKind, PropertyOutcome };

const KIND_LABELS: [(PropertyKind, &str); 4] = [
    (PropertyKind::CodeQuality, "code quality"),
    (PropertyKind::LowSeverity, "low severity"),
    (PropertyKind::MediumSeverity, "medium severity"),
    (PropertyKind::HighSeverity, "high severity"),
];

// (outcome, body prefix, body suffix)
const OUTCOME_BODIES: [(PropertyOutcome, &str, &str); 3] = [
    (PropertyOutcome::Success, "return ", ";"),
    (PropertyOutcome::Fail, "return !(", ");"),
    (PropertyOutcome::Throw, "", ";\n\t\treturn false;"),
];

/// How one property function is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderShape {
    pub label: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// Shapes keyed by `(kind, expected outcome)`
#[derive(Debug, Clone)]
pub struct RenderTable {
    shapes: HashMap<(PropertyKind, PropertyOutcome), RenderShape>,
}

impl RenderTable {
    pub fn standard() -> Self {
        let mut shapes = HashMap::new();
        for (kind, label) in KIND_LABELS {
            for (outcome, prefix, suffix) in OUTCOME_BODIES {
                shapes.insert((kind, outcome), RenderShape { label, prefix, suffix });
            }
        }
        Self { shapes }
    }

    pub fn shape(&self, kind: PropertyKind, outcome: PropertyOutcome) -> Option<&RenderShape> {
        self.shapes.get(&(kind, outcome))
    }
}

impl Default for RenderTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Turns property records into Solidity functions
#[derive(Debug, Clone, Default)]
pub struct PropertyRenderer {
    table: RenderTable,
}

impl PropertyRenderer {
    pub fn new(table: RenderTable) -> Self {
        Self { table }
    }

    pub fn render(&self, property: &Property) -> PropResult<String> {
        let shape = self.table
            .shape(property.kind, property.expected)
            .ok_or_else(|| PropError::InvalidProperty {
                name: property.name.clone(),
                reason: format!(
                    "no rendering rule for {:?}/{:?}",
                    property.kind,
                    property.expected
                ),
            })?;

        Ok(
            format!(
                "\t// {} [{}, caller: {}]\n\tfunction {}() public returns(bool){{\n\t\t{}{}{}\n\t}}\n",
                property.description,
                shape.label,
                property.caller,
                property.name,
                shape.prefix,
                property.content,
                shape.suffix
            )
        )
    }

    /// Render every property in order and split out the unit tests
    pub fn render_all(&self, properties: &[Property]) -> PropResult<RenderedProperties> {
        validate_properties(properties)?;

        let source = properties
            .iter()
            .map(|property| self.render(property))
            .collect::<PropResult<Vec<_>>>()?
            .join("\n");
        let unit_tests = properties
            .iter()
            .filter(|property| property.is_unit_test)
            .cloned()
            .collect();

        Ok(RenderedProperties { source, unit_tests })
    }
}
