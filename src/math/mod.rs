//! Vector utilities for frame element orientation

use nalgebra::Vector3;

use crate::error::{ImportError, ImportResult};

pub type Vec3 = Vector3<f64>;

/// Members shorter than this are treated as zero length
pub const ZERO_LENGTH_TOLERANCE: f64 = 1e-10;

/// Compute the local z-axis vector of a frame element
///
/// Local axis 2 lies in the plane of local axis 1 and global Z, unless the
/// member is vertical, in which case it is parallel to global X. Axis 3
/// follows the right-hand rule and is then rotated about axis 1 by `angle`.
///
/// # Arguments
/// * `xi` - Coordinates of the i-node
/// * `xj` - Coordinates of the j-node
/// * `angle` - Rotation about the local 1 axis (degrees)
///
/// # Returns
/// Unit vector along the rotated local 3 axis. Non-finite when `xi == xj`.
pub fn orient(xi: &Vec3, xj: &Vec3, angle: f64) -> Vec3 {
    // Local 1 axis, I -> J
    let e1 = xj - xi;

    // Vertical members take global X as local 2
    let e2 = if e1.x == 0.0 && e1.y == 0.0 {
        Vec3::x()
    } else {
        Vec3::z().cross(&e1)
    };

    let e3 = e1.cross(&e2);

    // Rodrigues rotation about the unnormalized member axis
    let angle = angle / 180.0 * std::f64::consts::PI;
    let e3r = e3 * angle.cos() + e1.cross(&e3) * angle.sin();

    e3r / e3r.norm()
}

/// Checked variant of [`orient`]
///
/// Fails instead of returning a non-finite vector when the member has
/// (near) zero length.
pub fn try_orient(xi: &Vec3, xj: &Vec3, angle: f64) -> ImportResult<Vec3> {
    let length = (xj - xi).norm();
    if length < ZERO_LENGTH_TOLERANCE {
        return Err(ImportError::DegenerateGeometry(format!(
            "member has zero length: i={:?}, j={:?}",
            xi.as_slice(),
            xj.as_slice()
        )));
    }

    let v = orient(xi, xj, angle);
    if !v.iter().all(|c| c.is_finite()) {
        return Err(ImportError::DegenerateGeometry(format!(
            "local axes are singular for angle {}",
            angle
        )));
    }

    Ok(v)
}
