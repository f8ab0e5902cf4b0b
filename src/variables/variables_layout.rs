use super::{PayloadSlot, SecondarySlot};
use crate::error::{AdapterConfigError, ArgGroup, VariablesError, json_type_name};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Describes how a payload group and a secondary group share one merged
/// variables object.
///
/// The two namespaces are disjoint by construction, so [`split`] can always
/// rebuild the groups that [`merge`] combined.
///
/// | payload | secondary | `fn(p, s)` sees | variables |
/// |---|---|---|---|
/// | `Field("body")` | `Flat` | `({name}, {id})` | `{body: {name}, id}` |
/// | `Fields(["a"])` | `Flat` | `({a}, {b})` | `{a, b}` |
/// | `Fields(["name"])` | `Nested("query")` | `({name}, {query: {q}})` | `{name, q}` |
///
/// [`split`]: VariablesLayout::split
/// [`merge`]: VariablesLayout::merge
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayoutConfig")]
pub struct VariablesLayout {
    payload: PayloadSlot,
    secondary: SecondarySlot,
}

#[derive(Deserialize)]
struct LayoutConfig {
    #[serde(default)]
    payload: PayloadSlot,
    #[serde(default)]
    secondary: SecondarySlot,
}

impl TryFrom<LayoutConfig> for VariablesLayout {
    type Error = AdapterConfigError;

    fn try_from(config: LayoutConfig) -> Result<Self, Self::Error> {
        VariablesLayout::new(config.payload, config.secondary)
    }
}

impl VariablesLayout {
    /// Builds a layout, refusing any configuration whose namespaces overlap.
    pub fn new(payload: PayloadSlot, secondary: SecondarySlot) -> Result<Self, AdapterConfigError> {
        let mut seen = HashSet::new();
        for field in payload.field_names() {
            if field.is_empty() {
                return Err(AdapterConfigError::EmptyFieldName);
            }
            if !seen.insert(field) {
                return Err(AdapterConfigError::DuplicateField {
                    field: field.to_string(),
                });
            }
        }

        if let SecondarySlot::Nested(field) = &secondary {
            if field.is_empty() {
                return Err(AdapterConfigError::EmptyFieldName);
            }
            if payload.claims(field) {
                return Err(AdapterConfigError::OverlappingSlots {
                    field: field.clone(),
                });
            }
        }

        Ok(Self { payload, secondary })
    }

    /// Payload nested under `field`, secondary fields flat alongside it.
    pub fn nested_payload(field: impl Into<String>) -> Result<Self, AdapterConfigError> {
        Self::new(PayloadSlot::Field(field.into()), SecondarySlot::Flat)
    }

    /// Payload flattened into the listed top-level fields.
    pub fn flattened_payload<I, S>(fields: I) -> Result<Self, AdapterConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            PayloadSlot::Fields(fields.into_iter().map(Into::into).collect()),
            SecondarySlot::Flat,
        )
    }

    /// Same payload slot, with the remaining fields wrapped under `field`.
    pub fn with_nested_secondary(
        self,
        field: impl Into<String>,
    ) -> Result<Self, AdapterConfigError> {
        Self::new(self.payload, SecondarySlot::Nested(field.into()))
    }

    pub fn payload(&self) -> &PayloadSlot {
        &self.payload
    }

    pub fn secondary(&self) -> &SecondarySlot {
        &self.secondary
    }

    /// Splits merged variables back into `(payload, secondary)`.
    ///
    /// `null` is treated as an empty object. Fields the payload slot does not
    /// claim are always forwarded to the secondary group, never dropped. A
    /// missing nested payload field yields `null`.
    pub fn split(&self, variables: Value) -> Result<(Value, Value), VariablesError> {
        let mut fields = match variables {
            Value::Null => Map::new(),
            other => into_object(other, "variables")?,
        };

        let payload = match &self.payload {
            PayloadSlot::Field(field) => fields.remove(field).unwrap_or(Value::Null),
            PayloadSlot::Fields(names) => {
                let mut payload = Map::new();
                for name in names {
                    if let Some(value) = fields.remove(name) {
                        payload.insert(name.clone(), value);
                    }
                }
                Value::Object(payload)
            }
        };

        let secondary = match &self.secondary {
            SecondarySlot::Flat => Value::Object(fields),
            SecondarySlot::Nested(field) => {
                let mut wrapper = Map::new();
                wrapper.insert(field.clone(), Value::Object(fields));
                Value::Object(wrapper)
            }
        };

        Ok((payload, secondary))
    }

    /// Merges the two argument groups into one variables object.
    ///
    /// Fails if the result could not be split back into the same groups. A
    /// `null` group is only accepted as the payload of a `Field` slot.
    pub fn merge(&self, payload: Value, secondary: Value) -> Result<Map<String, Value>, VariablesError> {
        let mut merged = Map::new();

        match &self.payload {
            PayloadSlot::Field(field) => {
                if !payload.is_null() {
                    merged.insert(field.clone(), payload);
                }
            }
            PayloadSlot::Fields(names) => {
                for (key, value) in into_object(payload, "payload")? {
                    if !names.contains(&key) {
                        return Err(VariablesError::Unrepresentable {
                            group: ArgGroup::Payload,
                            field: key,
                        });
                    }
                    merged.insert(key, value);
                }
            }
        }

        let mut secondary = into_object(secondary, "secondary group")?;
        let rest = match &self.secondary {
            SecondarySlot::Flat => secondary,
            SecondarySlot::Nested(field) => {
                let inner = secondary.remove(field);
                if let Some((key, _)) = secondary.into_iter().next() {
                    return Err(VariablesError::Unrepresentable {
                        group: ArgGroup::Secondary,
                        field: key,
                    });
                }
                match inner {
                    Some(inner) => into_object(inner, "nested secondary group")?,
                    None => {
                        return Err(VariablesError::Unrepresentable {
                            group: ArgGroup::Secondary,
                            field: field.clone(),
                        });
                    }
                }
            }
        };

        for (key, value) in rest {
            if self.payload.claims(&key) || merged.contains_key(&key) {
                return Err(VariablesError::Collision { field: key });
            }
            merged.insert(key, value);
        }

        Ok(merged)
    }
}

fn into_object(value: Value, what: &'static str) -> Result<Map<String, Value>, VariablesError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(VariablesError::NotAnObject {
            what,
            found: json_type_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_layout_nests_payload_under_body() {
        let layout = VariablesLayout::default();
        assert_eq!(layout.payload(), &PayloadSlot::Field("body".into()));
        assert_eq!(layout.secondary(), &SecondarySlot::Flat);
    }

    #[test]
    fn deserialize_runs_validation() {
        let err = serde_json::from_value::<VariablesLayout>(json!({
            "payload": { "field": "query" },
            "secondary": { "nested": "query" }
        }))
        .unwrap_err();

        assert!(err.to_string().contains("`query`"));
    }

    #[test]
    fn deserialize_defaults_missing_slots() {
        let layout: VariablesLayout =
            serde_json::from_value(json!({ "secondary": { "nested": "params" } })).unwrap();

        assert_eq!(layout.payload(), &PayloadSlot::Field("body".into()));
        assert_eq!(layout.secondary(), &SecondarySlot::Nested("params".into()));
    }
}
