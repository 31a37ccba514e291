use crate::domain::Field;
use std::collections::BTreeMap;

/// One message per field, empty when the field is valid. A fresh value always carries an entry for
/// each of the five fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl Default for FieldErrors {
    fn default() -> Self {
        Self(Field::ALL.into_iter().map(|f| (f, String::new())).collect())
    }
}

impl FieldErrors {
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Fields with a non-empty message, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
