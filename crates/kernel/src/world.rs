use crate::LoadError;
use constitution_common::{AttributeValue, Entity, Rule};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// On-disk shape of a world document. Both top-level arrays are optional.
#[derive(Debug, Default, Deserialize)]
struct WorldDocument {
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(default)]
    rules: Vec<Rule>,
}

impl WorldDocument {
    /// Convert a parsed JSON tree into a document.
    ///
    /// The root and every entity or rule record must be a JSON object. A
    /// derived struct would also accept arrays and read fields by position.
    fn from_value(root: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(sections) = &root else {
            return Err(not_an_object("world document", &root));
        };
        for (section, record) in [("entities", "entity"), ("rules", "rule")] {
            if let Some(Value::Array(items)) = sections.get(section) {
                if let Some(item) = items.iter().find(|item| !item.is_object()) {
                    return Err(not_an_object(record, item));
                }
            }
        }
        serde_json::from_value(root)
    }
}

fn not_an_object(what: &str, found: &Value) -> serde_json::Error {
    let kind = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    serde::de::Error::custom(format_args!("{what} must be a JSON object, found {kind}"))
}

/// The in-memory aggregate of all entities and rules from one document.
///
/// Populated once by a load and read-only afterwards. Entities are keyed by
/// name in a BTreeMap so listing order is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldModel {
    entities: BTreeMap<String, Entity>,
    rules: Vec<Rule>,
}

impl WorldModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a model from a JSON file, degrading to an empty model on failure.
    ///
    /// Any failure (missing file, malformed JSON, missing required field) is
    /// logged at `warn` and yields an empty model. Use [`Self::try_from_json`]
    /// to tell an empty document apart from a failed load.
    pub fn from_json(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::try_from_json(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to load world model");
            Self::new()
        })
    }

    /// Load a model from a JSON file, returning the failure reason on error.
    pub fn try_from_json(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::try_from_reader(BufReader::new(file)).map_err(|e| e.with_path(path))?;
        tracing::debug!(
            path = %path.display(),
            entities = model.entity_count(),
            rules = model.rule_count(),
            "world model loaded"
        );
        Ok(model)
    }

    /// Parse a model from any reader yielding a JSON document.
    ///
    /// Repeated keys inside one JSON object keep the last value.
    pub fn try_from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let root: Value = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                LoadError::Read(e.into())
            } else {
                LoadError::Parse(e)
            }
        })?;
        Ok(Self::from_document(WorldDocument::from_value(root)?))
    }

    /// Parse a model from an in-memory JSON document.
    pub fn try_from_str(json: &str) -> Result<Self, LoadError> {
        let root: Value = serde_json::from_str(json)?;
        Ok(Self::from_document(WorldDocument::from_value(root)?))
    }

    // The document is fully parsed before anything is inserted, so a bad
    // record anywhere in the file never leaves a half-built model.
    fn from_document(document: WorldDocument) -> Self {
        let mut model = Self::new();
        for entity in document.entities {
            model.entities.insert(entity.name.clone(), entity);
        }
        model.rules = document.rules;
        model
    }

    /// Check a candidate attribute value for an entity.
    ///
    /// Returns false only when the entity is unknown. For a known entity the
    /// answer is always true: neither the attribute, the value, nor the loaded
    /// rules are consulted.
    pub fn validate_entity(
        &self,
        entity_name: &str,
        attribute: &str,
        value: &AttributeValue,
    ) -> bool {
        let known = self.entities.contains_key(entity_name);
        tracing::trace!(entity = entity_name, attribute, %value, known, "validate entity");
        known
    }

    /// Read-only access to all entities, keyed by name.
    pub fn entities(&self) -> &BTreeMap<String, Entity> {
        &self.entities
    }

    /// Rules in file order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn contains_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// True when the model holds no entities and no rules.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.rules.is_empty()
    }
}
