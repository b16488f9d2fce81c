//! Registry of results shared between import steps

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    /// Element tag of each converted frame, keyed by frame label
    pub frame_tags: BTreeMap<String, usize>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_tag(&self, label: &str) -> Option<usize> {
        self.frame_tags.get(label).copied()
    }
}
