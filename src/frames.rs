//! Frame import - converts `CONNECTIVITY - FRAME` records into frame elements

use std::collections::BTreeMap;

use crate::config::ImportConfig;
use crate::convert::{Converter, UnimplementedInstance};
use crate::elements::{FrameElement, GeomTransform};
use crate::error::{ImportError, ImportResult};
use crate::library::Library;
use crate::math::{self, ZERO_LENGTH_TOLERANCE};
use crate::model::ModelBuilder;
use crate::tables::{
    CsiTables, Row, CONNECTIVITY_FRAME, FRAME_ADDED_MASS, FRAME_LOCAL_AXES, FRAME_RELEASES,
    FRAME_SECTION_ASSIGNMENTS,
};

/// Release flags that together turn a frame into a truss
const TRUSS_RELEASES: [&str; 5] = ["TI", "M2I", "M3I", "M2J", "M3J"];

/// Whether the frame has torsion and both bending moments released
fn is_truss(csi: &CsiTables, label: &str) -> bool {
    csi.find_row(FRAME_RELEASES, "Frame", label)
        .is_some_and(|release| TRUSS_RELEASES.iter().all(|dof| release.flag(dof)))
}

/// Numeric column of the frame's row in an assignment table
fn assigned_value(csi: &CsiTables, table: &str, label: &str, column: &str) -> f64 {
    csi.find_row(table, "Frame", label)
        .and_then(|row| row.number(column))
        .unwrap_or(0.0)
}

fn frame_nodes(frame: &Row, conv: &Converter) -> Option<[usize; 2]> {
    let i = conv.identify("Joint", "node", &frame.text("JointI")?)?;
    let j = conv.identify("Joint", "node", &frame.text("JointJ")?)?;
    Some([i, j])
}

/// Create frame elements for every record of the `CONNECTIVITY - FRAME` table
///
/// Each converted frame gets its own linear geometric transformation, numbered
/// from 1. In 3D the transformation carries the local x-z plane vector from
/// [`math::try_orient`]. Element tags are written to `library.frame_tags`.
///
/// Unsupported records (unlabelled frames, trusses, unknown joints,
/// unsupported or missing sections) are reported through `conv` and skipped.
/// Curved frames are reported but still converted as straight elements.
///
/// Fails with `InvalidInput` when `config.ndm` differs from the model's.
///
/// # Returns
/// Frames skipped because their end nodes coincide or their local axes
/// are singular
pub fn create_frames<M: ModelBuilder + ?Sized>(
    csi: &CsiTables,
    model: &mut M,
    library: &mut Library,
    config: &ImportConfig,
    conv: &mut Converter,
) -> ImportResult<Vec<UnimplementedInstance>> {
    if config.ndm != model.ndm() {
        return Err(ImportError::InvalidInput(format!(
            "import ndm {} does not match model ndm {}",
            config.ndm,
            model.ndm()
        )));
    }

    let mut skipped = Vec::new();
    let mut transform = 1;
    let mut tags = BTreeMap::new();

    for frame in csi.rows(CONNECTIVITY_FRAME) {
        let Some(label) = frame.text("Frame").filter(|l| !l.is_empty()) else {
            conv.log(UnimplementedInstance::new("Frame.MissingLabel", frame));
            continue;
        };
        let label = label.into_owned();

        if is_truss(csi, &label) {
            conv.log(UnimplementedInstance::new("Truss", frame));
            continue;
        }

        if frame.flag("IsCurved") {
            conv.log(UnimplementedInstance::new("Frame.Curve", frame));
        }

        let Some(nodes) = frame_nodes(frame, conv) else {
            conv.log(UnimplementedInstance::new("Frame.UnknownJoint", frame));
            continue;
        };

        let mass = assigned_value(csi, FRAME_ADDED_MASS, &label, "MassPerLen");
        let angle = assigned_value(csi, FRAME_LOCAL_AXES, &label, "Angle");

        // Geometric transformation
        let xi = model.node_coord(nodes[0])?;
        let xj = model.node_coord(nodes[1])?;
        if (xj - xi).norm() < ZERO_LENGTH_TOLERANCE {
            log::error!("ZERO LENGTH FRAME: {}", label);
            skipped.push(UnimplementedInstance::new("Frame.ZeroLength", frame));
            continue;
        }

        let transf = if config.ndm == 3 {
            match math::try_orient(&xi, &xj, angle) {
                Ok(vecxz) => GeomTransform::linear(transform).with_vecxz(vecxz),
                Err(e) => {
                    log::error!("DEGENERATE FRAME: {}: {}", label, e);
                    skipped.push(UnimplementedInstance::new("Frame.Degenerate", frame));
                    continue;
                }
            }
        } else {
            GeomTransform::linear(transform)
        };
        model.geom_transf(transf)?;
        let frame_transform = transform;
        transform += 1;

        // Section
        let Some(assign) = csi.find_row(FRAME_SECTION_ASSIGNMENTS, "Frame", &label) else {
            conv.log(UnimplementedInstance::new("FrameSection.Missing", frame));
            continue;
        };
        let section_name = assign.text("AnalSect").unwrap_or_default();
        let np_type = assign.text("NPSectType");

        let prismatic = assign.text("SectionType").map_or(true, |t| t != "Nonprismatic")
            || np_type.as_deref() == Some("Advanced");

        let element = if prismatic {
            conv.identify("AnalSect", "section", &section_name)
                .map(|section| FrameElement::prism(&label, nodes, frame_transform, section))
        } else if np_type.as_deref() == Some("Default") {
            conv.identify("AnalSect", "integration", &section_name)
                .map(|integration| FrameElement::force(&label, nodes, frame_transform, integration))
        } else {
            conv.log(UnimplementedInstance::new("FrameSection.NPSectType", np_type));
            continue;
        };

        let Some(element) = element else {
            conv.log(UnimplementedInstance::new("FrameSection.Unknown", assign));
            continue;
        };

        let tag = model.element(element.with_mass(mass))?;
        log::debug!("frame {} -> element {} (transform {})", label, tag, frame_transform);
        tags.insert(label, tag);
    }

    library.frame_tags = tags;

    Ok(skipped)
}
