//! Frame element - 2-node line element (beam/column)

use serde::{Deserialize, Serialize};

/// Cross-section formulation of a frame element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameFormulation {
    /// Prismatic element with a single section
    Prism { section: usize },
    /// Force-based element integrated along its length (non-prismatic)
    Force { integration: usize },
}

/// A frame element connecting two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameElement {
    /// Element tag; assigned by the model when `None`
    pub tag: Option<usize>,
    /// Source frame label
    pub label: String,
    /// Node tags [i, j]
    pub nodes: [usize; 2],
    /// Geometric transformation tag
    pub transform: usize,
    /// Section formulation
    pub formulation: FrameFormulation,
    /// Added mass per unit length
    pub mass: f64,
}

impl FrameElement {
    /// Create a prismatic frame element
    pub fn prism(label: &str, nodes: [usize; 2], transform: usize, section: usize) -> Self {
        Self::new(label, nodes, transform, FrameFormulation::Prism { section })
    }

    /// Create a force-based frame element
    pub fn force(label: &str, nodes: [usize; 2], transform: usize, integration: usize) -> Self {
        Self::new(label, nodes, transform, FrameFormulation::Force { integration })
    }

    fn new(label: &str, nodes: [usize; 2], transform: usize, formulation: FrameFormulation) -> Self {
        Self {
            tag: None,
            label: label.to_string(),
            nodes,
            transform,
            formulation,
            mass: 0.0,
        }
    }

    /// Set an explicit element tag
    pub fn with_tag(mut self, tag: usize) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Set added mass per unit length
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn is_prismatic(&self) -> bool {
        matches!(self.formulation, FrameFormulation::Prism { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let e = FrameElement::prism("B1", [1, 2], 3, 7).with_mass(2.5);
        assert_eq!(e.tag, None);
        assert_eq!(e.nodes, [1, 2]);
        assert_eq!(e.transform, 3);
        assert_eq!(e.mass, 2.5);
        assert!(e.is_prismatic());

        let f = FrameElement::force("C1", [2, 3], 1, 4).with_tag(10);
        assert_eq!(f.tag, Some(10));
        assert_eq!(f.formulation, FrameFormulation::Force { integration: 4 });
        assert!(!f.is_prismatic());
    }
}
