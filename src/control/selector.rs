//! Display list of selectable pattern types.
//!
//! The list is derived from the registry and can be tampered with by the host
//! UI; [`TypeSelector::populate`] always clears and rebuilds it.

use crate::patterns::PatternRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOption {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct TypeSelector {
    options: Vec<TypeOption>,
    selected: Option<String>,
}

impl TypeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the option list from `registry` and mark `active` selected.
    pub fn populate(&mut self, registry: &PatternRegistry, active: &str) {
        self.options.clear();
        self.options.extend(registry.iter().map(|descriptor| TypeOption {
            key: descriptor.key.clone(),
            label: descriptor.label.clone(),
        }));
        self.select(active);
    }

    /// Append an entry without any checks (host-side edits).
    pub fn push_option(&mut self, key: &str, label: &str) {
        self.options.push(TypeOption {
            key: key.to_string(),
            label: label.to_string(),
        });
    }

    /// Mark `key` selected if present.
    pub fn select(&mut self, key: &str) -> bool {
        if self.options.iter().any(|option| option.key == key) {
            self.selected = Some(key.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[TypeOption] {
        &self.options
    }

    pub fn keys(&self) -> Vec<&str> {
        self.options.iter().map(|option| option.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
