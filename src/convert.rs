//! Name resolution and diagnostics shared by import steps

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A source record the import could not represent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnimplementedInstance {
    /// Name of the unsupported feature, e.g. `Frame.ZeroLength`
    pub kind: String,
    /// The offending record or value
    pub detail: Value,
}

impl UnimplementedInstance {
    pub fn new(kind: &str, detail: impl Serialize) -> Self {
        Self {
            kind: kind.to_string(),
            detail: serde_json::to_value(detail).unwrap_or(Value::Null),
        }
    }
}

impl fmt::Display for UnimplementedInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unimplemented {}: {}", self.kind, self.detail)
    }
}

/// Maps source object names to model tags and collects diagnostics
#[derive(Debug, Clone, Default)]
pub struct Converter {
    /// Tags keyed by (source kind, model role), then by source name
    names: HashMap<(String, String), HashMap<String, usize>>,
    diagnostics: Vec<UnimplementedInstance>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the model tag of a source object
    ///
    /// # Arguments
    /// * `kind` - Source object kind, e.g. `Joint` or `AnalSect`
    /// * `role` - What the tag refers to in the model, e.g. `node` or `section`
    /// * `name` - Source object label
    /// * `tag` - Model tag
    pub fn define(&mut self, kind: &str, role: &str, name: &str, tag: usize) {
        self.names
            .entry((kind.to_string(), role.to_string()))
            .or_default()
            .insert(name.to_string(), tag);
    }

    /// Look up the model tag of a source object
    pub fn identify(&self, kind: &str, role: &str, name: &str) -> Option<usize> {
        self.names
            .get(&(kind.to_string(), role.to_string()))?
            .get(name)
            .copied()
    }

    /// Record an unsupported case
    pub fn log(&mut self, instance: UnimplementedInstance) {
        log::warn!("{}", instance);
        self.diagnostics.push(instance);
    }

    pub fn diagnostics(&self) -> &[UnimplementedInstance] {
        &self.diagnostics
    }

    /// Take the collected diagnostics, leaving the list empty
    pub fn take_diagnostics(&mut self) -> Vec<UnimplementedInstance> {
        std::mem::take(&mut self.diagnostics)
    }
}
