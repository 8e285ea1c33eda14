use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };

use crate::errors::PropResult;
use crate::models::address::Address;

/// Key order of the JSON object an event was read from.
/// Empty for events built in code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOrder(Vec<String>);

/// One entry of a recorded transaction trace.
///
/// Field values are kept as the raw strings found in the trace and any
/// additional keys are carried in `extra`. Events read with
/// [`Event::from_json`] and written with [`Event::to_json`] reproduce the
/// input objects, key order included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    ContractCreated {
        from: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
        #[serde(skip)]
        order: KeyOrder,
    },
    FunctionCall {
        from: String,
        to: String,
        data: String,
        value: String,
        gas_used: String,
        gas_price: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
        #[serde(skip)]
        order: KeyOrder,
    },
}

impl Event {
    pub fn contract_created(from: impl Into<String>) -> Self {
        Event::ContractCreated { from: from.into(), extra: Map::new(), order: KeyOrder::default() }
    }

    /// Parse one trace object, remembering its key order
    pub fn from_json(value: Value) -> serde_json::Result<Self> {
        let keys: Vec<String> = value
            .as_object()
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default();
        let mut event: Event = serde_json::from_value(value)?;
        match &mut event {
            Event::ContractCreated { order, .. } | Event::FunctionCall { order, .. } => {
                *order = KeyOrder(keys);
            }
        }
        Ok(event)
    }

    /// Serialize back to an object, keys in the order they were read.
    /// Keys the event did not come with follow in field order.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut value {
            let mut ordered = Map::new();
            for key in &self.key_order().0 {
                if let Some(field) = fields.remove(key) {
                    ordered.insert(key.clone(), field);
                }
            }
            ordered.append(fields);
            *fields = ordered;
        }
        Ok(value)
    }

    pub fn key_order(&self) -> &KeyOrder {
        match self {
            Event::ContractCreated { order, .. } | Event::FunctionCall { order, .. } => order,
        }
    }

    /// Raw `from` field
    pub fn from_field(&self) -> &str {
        match self {
            Event::ContractCreated { from, .. } | Event::FunctionCall { from, .. } => from,
        }
    }

    pub fn sender(&self) -> PropResult<Address> {
        Address::parse(self.from_field())
    }
}
