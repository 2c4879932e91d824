use constitution_common::AttributeValue;
use constitution_kernel::WorldModel;

/// World model inspector for developer tooling.
///
/// Provides read-only queries against a loaded model for debugging and the
/// command-line front end.
pub struct ModelInspector;

impl ModelInspector {
    /// Produce a summary of the model.
    pub fn summary(model: &WorldModel) -> ModelSummary {
        ModelSummary {
            entity_count: model.entity_count(),
            rule_count: model.rule_count(),
            attribute_count: model
                .entities()
                .values()
                .map(|e| e.attributes.len())
                .sum(),
        }
    }

    /// Describe a single entity, with attribute values rendered as compact JSON.
    pub fn inspect_entity(model: &WorldModel, name: &str) -> Option<EntityInfo> {
        model.entity(name).map(|entity| EntityInfo {
            name: entity.name.clone(),
            attributes: entity
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), render_value(v)))
                .collect(),
        })
    }

    /// List all entity names in name order.
    pub fn list_entities(model: &WorldModel) -> Vec<String> {
        model.entities().keys().cloned().collect()
    }

    /// List all rules in file order.
    pub fn list_rules(model: &WorldModel) -> Vec<RuleInfo> {
        model
            .rules()
            .iter()
            .enumerate()
            .map(|(index, rule)| RuleInfo {
                index,
                condition: rule.condition.clone(),
                action: rule.action.clone(),
                message: rule.message.clone(),
            })
            .collect()
    }
}

fn render_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Summary of a loaded model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub entity_count: usize,
    pub rule_count: usize,
    /// Total attributes across all entities.
    pub attribute_count: usize,
}

impl std::fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model: entities={} rules={} attributes={}",
            self.entity_count, self.rule_count, self.attribute_count
        )
    }
}

/// Detailed info about a single entity.
#[derive(Debug, Clone)]
pub struct EntityInfo {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl std::fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity [{}]", self.name)?;
        for (i, (key, value)) in self.attributes.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// A rule as listed by the inspector.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Position in the source document.
    pub index: usize,
    pub condition: String,
    pub action: String,
    pub message: String,
}

impl std::fmt::Display for RuleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule #{} when `{}` then `{}`", self.index, self.condition, self.action)?;
        if !self.message.is_empty() {
            write!(f, " ({})", self.message)?;
        }
        Ok(())
    }
}
