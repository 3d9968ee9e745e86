//! Human-readable echo of the current control values.

use crate::patterns::ParamField;
use std::collections::BTreeMap;

/// Text shown next to each control, plus the active type's label and hint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayEcho {
    values: BTreeMap<ParamField, String>,
    type_label: String,
    type_hint: String,
}

impl DisplayEcho {
    pub fn set_value(&mut self, field: ParamField, value: f64) {
        self.values.insert(field, field.format_value(value));
    }

    pub fn set_type(&mut self, label: &str, hint: &str) {
        self.type_label = label.to_string();
        self.type_hint = hint.to_string();
    }

    pub fn value(&self, field: ParamField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn type_hint(&self) -> &str {
        &self.type_hint
    }

    pub fn values(&self) -> impl Iterator<Item = (ParamField, &str)> {
        self.values.iter().map(|(field, text)| (*field, text.as_str()))
    }
}
