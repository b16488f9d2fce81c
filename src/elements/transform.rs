//! Geometric transformations for frame elements

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Kind of geometric transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformKind {
    Linear,
}

/// A geometric transformation mapping element local axes to global axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeomTransform {
    /// Transformation tag
    pub tag: usize,
    /// Transformation kind
    pub kind: TransformKind,
    /// Vector in the local x-z plane (3D models only)
    pub vecxz: Option<[f64; 3]>,
}

impl GeomTransform {
    /// Create a linear transformation for a planar model
    pub fn linear(tag: usize) -> Self {
        Self {
            tag,
            kind: TransformKind::Linear,
            vecxz: None,
        }
    }

    /// Set the local x-z plane vector
    pub fn with_vecxz(mut self, vecxz: Vec3) -> Self {
        self.vecxz = Some([vecxz.x, vecxz.y, vecxz.z]);
        self
    }

    /// Get the local x-z plane vector
    pub fn vecxz(&self) -> Option<Vec3> {
        self.vecxz.map(Vec3::from)
    }
}
