//! Derived output fields.
//!
//! A derived field is computed from the entity at response time and merged
//! into the outgoing copy; it is never part of stored entity state and is
//! recomputed on every format call, never cached.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A pure computer for one derived field.
pub type FieldComputer = Box<dyn Fn(&Value) -> Value + Send + Sync>;

/// Registry of derived-field computers, keyed by output field name.
#[derive(Default)]
pub struct DerivedFields {
    computers: HashMap<String, FieldComputer>,
}

impl DerivedFields {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a computer under the given output field name.
    ///
    /// On a name collision with an entity field, the derived value wins.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        computer: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) {
        self.computers.insert(name.into(), Box::new(computer));
    }

    /// Whether any derived fields are configured.
    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    /// Merge the derived fields into a shallow copy of the entity.
    ///
    /// Every computer receives the original entity; results land in the
    /// copy under their registered names, overwriting same-named entity
    /// fields. The input is never mutated. With no computers configured,
    /// or for a non-object entity, the entity passes through as a plain
    /// clone.
    pub fn format(&self, entity: &Value) -> Value {
        if self.computers.is_empty() {
            return entity.clone();
        }

        let Some(object) = entity.as_object() else {
            return entity.clone();
        };

        let mut merged = object.clone();
        for (name, computer) in &self.computers {
            merged.insert(name.clone(), computer(entity));
        }
        Value::Object(merged)
    }
}

impl fmt::Debug for DerivedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedFields")
            .field("names", &self.computers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_without_fields_passes_through() {
        let fields = DerivedFields::new();
        let entity = json!({ "id": "1", "name": "a" });
        assert_eq!(fields.format(&entity), entity);
    }

    #[test]
    fn test_format_adds_derived_fields() {
        let mut fields = DerivedFields::new();
        fields.insert("fullName", |e: &Value| {
            json!(format!(
                "{} {}",
                e["firstName"].as_str().unwrap_or_default(),
                e["lastName"].as_str().unwrap_or_default()
            ))
        });

        let entity = json!({ "firstName": "A", "lastName": "B" });
        let formatted = fields.format(&entity);
        assert_eq!(
            formatted,
            json!({ "firstName": "A", "lastName": "B", "fullName": "A B" })
        );
        // input untouched
        assert_eq!(entity, json!({ "firstName": "A", "lastName": "B" }));
    }

    #[test]
    fn test_derived_value_overwrites_entity_field() {
        let mut fields = DerivedFields::new();
        fields.insert("name", |_: &Value| json!("derived"));

        let entity = json!({ "id": "1", "name": "stored" });
        assert_eq!(
            fields.format(&entity),
            json!({ "id": "1", "name": "derived" })
        );
    }

    #[test]
    fn test_computers_see_the_original_entity() {
        // A computer must not observe another computer's output.
        let mut fields = DerivedFields::new();
        fields.insert("a", |e: &Value| json!(e.get("b").is_some()));
        fields.insert("b", |e: &Value| json!(e.get("a").is_some()));

        let formatted = fields.format(&json!({ "id": "1" }));
        assert_eq!(formatted["a"], json!(false));
        assert_eq!(formatted["b"], json!(false));
    }

    #[test]
    fn test_non_object_entity_passes_through() {
        let mut fields = DerivedFields::new();
        fields.insert("x", |_: &Value| json!(1));
        assert_eq!(fields.format(&json!("scalar")), json!("scalar"));
    }
}
