use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single attribute value: null, boolean, number, string, sequence or
/// nested mapping, exactly the kinds a JSON document can hold.
pub type AttributeValue = serde_json::Value;

/// Open attribute bag of an entity. No schema is enforced on keys or values.
///
/// BTreeMap keeps iteration order stable across runs.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A named record with an open attribute bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,
}

impl Entity {
    /// Create an entity with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute insertion. Later keys overwrite earlier ones.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up a single attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// A free-text condition/action/message triple.
///
/// Rules are loaded and kept in file order, but never evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub condition: String,
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl Rule {
    /// Create a rule with an empty message.
    pub fn new(condition: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            action: action.into(),
            message: String::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// An optional field present as `null` reads the same as an absent one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
