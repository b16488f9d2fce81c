//! Target model - the structural model frame elements are written into

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::elements::{FrameElement, GeomTransform};
use crate::error::{ImportError, ImportResult};
use crate::math::Vec3;

/// Query and mutation calls the frame import makes on a model
pub trait ModelBuilder {
    /// Number of spatial dimensions
    fn ndm(&self) -> usize;

    /// Coordinates of a node. Planar models report z = 0.
    fn node_coord(&self, tag: usize) -> ImportResult<Vec3>;

    /// Define a geometric transformation
    fn geom_transf(&mut self, transform: GeomTransform) -> ImportResult<()>;

    /// Add a frame element, returning its tag
    fn element(&mut self, element: FrameElement) -> ImportResult<usize>;
}

/// In-memory structural model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameModel {
    /// Number of spatial dimensions (2 or 3)
    pub ndm: usize,
    /// Node coordinates by tag
    pub nodes: BTreeMap<usize, [f64; 3]>,
    /// Geometric transformations by tag
    pub transforms: BTreeMap<usize, GeomTransform>,
    /// Frame elements by tag
    pub elements: BTreeMap<usize, FrameElement>,
}

impl Default for FrameModel {
    fn default() -> Self {
        Self::new(3)
    }
}

impl FrameModel {
    /// Create a new empty model
    pub fn new(ndm: usize) -> Self {
        Self {
            ndm,
            nodes: BTreeMap::new(),
            transforms: BTreeMap::new(),
            elements: BTreeMap::new(),
        }
    }

    /// Add a node to the model
    pub fn add_node(&mut self, tag: usize, coords: [f64; 3]) -> ImportResult<()> {
        if self.nodes.contains_key(&tag) {
            return Err(ImportError::DuplicateTag(tag));
        }
        let coords = if self.ndm == 2 {
            [coords[0], coords[1], 0.0]
        } else {
            coords
        };
        self.nodes.insert(tag, coords);
        Ok(())
    }

    pub fn transform(&self, tag: usize) -> Option<&GeomTransform> {
        self.transforms.get(&tag)
    }

    pub fn frame(&self, tag: usize) -> Option<&FrameElement> {
        self.elements.get(&tag)
    }

    /// Frame element created from a source label
    pub fn frame_by_label(&self, label: &str) -> Option<&FrameElement> {
        self.elements.values().find(|e| e.label == label)
    }

    fn next_element_tag(&self) -> usize {
        self.elements.keys().next_back().map_or(1, |t| t + 1)
    }
}

impl ModelBuilder for FrameModel {
    fn ndm(&self) -> usize {
        self.ndm
    }

    fn node_coord(&self, tag: usize) -> ImportResult<Vec3> {
        self.nodes
            .get(&tag)
            .map(|c| Vec3::from(*c))
            .ok_or(ImportError::NodeNotFound(tag))
    }

    fn geom_transf(&mut self, transform: GeomTransform) -> ImportResult<()> {
        if self.transforms.contains_key(&transform.tag) {
            return Err(ImportError::DuplicateTag(transform.tag));
        }
        self.transforms.insert(transform.tag, transform);
        Ok(())
    }

    fn element(&mut self, mut element: FrameElement) -> ImportResult<usize> {
        // Validate nodes and transformation exist
        for node in element.nodes {
            if !self.nodes.contains_key(&node) {
                return Err(ImportError::NodeNotFound(node));
            }
        }
        if !self.transforms.contains_key(&element.transform) {
            return Err(ImportError::TransformNotFound(element.transform));
        }

        let tag = match element.tag {
            Some(tag) if self.elements.contains_key(&tag) => {
                return Err(ImportError::DuplicateTag(tag));
            }
            Some(tag) => tag,
            None => self.next_element_tag(),
        };
        element.tag = Some(tag);
        self.elements.insert(tag, element);
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_model() -> FrameModel {
        let mut model = FrameModel::new(3);
        model.add_node(1, [0.0, 0.0, 0.0]).unwrap();
        model.add_node(2, [4.0, 0.0, 3.0]).unwrap();
        model.geom_transf(GeomTransform::linear(1)).unwrap();
        model
    }

    #[test]
    fn test_node_coord() {
        let model = two_node_model();
        assert_eq!(model.node_coord(2).unwrap(), Vec3::new(4.0, 0.0, 3.0));
        assert!(matches!(model.node_coord(9), Err(ImportError::NodeNotFound(9))));
    }

    #[test]
    fn test_planar_nodes_drop_z() {
        let mut model = FrameModel::new(2);
        model.add_node(1, [1.0, 2.0, 7.0]).unwrap();
        assert_eq!(model.node_coord(1).unwrap(), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_duplicate_tags() {
        let mut model = two_node_model();
        assert!(matches!(
            model.add_node(1, [0.0; 3]),
            Err(ImportError::DuplicateTag(1))
        ));
        assert!(matches!(
            model.geom_transf(GeomTransform::linear(1)),
            Err(ImportError::DuplicateTag(1))
        ));
    }

    #[test]
    fn test_element_tags() {
        let mut model = two_node_model();
        let a = model.element(FrameElement::prism("A", [1, 2], 1, 1)).unwrap();
        let b = model.element(FrameElement::prism("B", [2, 1], 1, 1)).unwrap();
        assert_eq!((a, b), (1, 2));

        let c = model
            .element(FrameElement::prism("C", [1, 2], 1, 1).with_tag(10))
            .unwrap();
        assert_eq!(c, 10);
        assert_eq!(model.element(FrameElement::prism("D", [1, 2], 1, 1)).unwrap(), 11);
        assert_eq!(model.frame_by_label("C").and_then(|e| e.tag), Some(10));

        assert!(matches!(
            model.element(FrameElement::prism("E", [1, 2], 1, 1).with_tag(2)),
            Err(ImportError::DuplicateTag(2))
        ));
    }

    #[test]
    fn test_element_validation() {
        let mut model = two_node_model();
        assert!(matches!(
            model.element(FrameElement::prism("A", [1, 3], 1, 1)),
            Err(ImportError::NodeNotFound(3))
        ));
        assert!(matches!(
            model.element(FrameElement::prism("A", [1, 2], 5, 1)),
            Err(ImportError::TransformNotFound(5))
        ));
        assert!(model.elements.is_empty());
    }
}
