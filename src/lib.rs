//! CSI Frames - frame element import for structural models
//!
//! Converts the frame tables of a CSI interchange file (connectivity,
//! section assignments, end releases, local axes and added mass) into
//! frame elements of a finite element model:
//! - Local axis orientation of each member (geometric transformation)
//! - Prismatic and non-prismatic (force-based) frame elements
//! - Added mass per unit length
//! - A log of records the import cannot represent
//!
//! ## Example
//! ```rust
//! use csi_frames::prelude::*;
//! use serde_json::json;
//!
//! let mut model = FrameModel::new(3);
//! model.add_node(1, [0.0, 0.0, 0.0]).unwrap();
//! model.add_node(2, [10.0, 0.0, 0.0]).unwrap();
//!
//! let mut conv = Converter::new();
//! conv.define("Joint", "node", "1", 1);
//! conv.define("Joint", "node", "2", 2);
//! conv.define("AnalSect", "section", "W12X26", 1);
//!
//! let csi: CsiTables = serde_json::from_value(json!({
//!     "CONNECTIVITY - FRAME": [{"Frame": "B1", "JointI": "1", "JointJ": "2"}],
//!     "FRAME SECTION ASSIGNMENTS": [{"Frame": "B1", "AnalSect": "W12X26"}]
//! }))
//! .unwrap();
//!
//! let mut library = Library::new();
//! let skipped = create_frames(&csi, &mut model, &mut library, &ImportConfig::default(), &mut conv)
//!     .unwrap();
//!
//! assert!(skipped.is_empty());
//! assert_eq!(library.frame_tag("B1"), Some(1));
//! assert_eq!(model.transform(1).unwrap().vecxz, Some([0.0, 0.0, 1.0]));
//! ```

pub mod config;
pub mod convert;
pub mod elements;
pub mod error;
pub mod frames;
pub mod library;
pub mod math;
pub mod model;
pub mod tables;

// Re-export common types
pub mod prelude {
    pub use crate::config::ImportConfig;
    pub use crate::convert::{Converter, UnimplementedInstance};
    pub use crate::elements::{FrameElement, FrameFormulation, GeomTransform, TransformKind};
    pub use crate::error::{ImportError, ImportResult};
    pub use crate::frames::create_frames;
    pub use crate::library::Library;
    pub use crate::math::{orient, try_orient, Vec3};
    pub use crate::model::{FrameModel, ModelBuilder};
    pub use crate::tables::{CsiTables, Row};
}
