#![warn(missing_docs)]

//! Math types for the wellpath trajectory engine.
//!
//! Thin wrappers around nalgebra providing domain-specific types
//! for 3D well-path geometry: points, vectors, directions, coordinate
//! frames, and the offshore spherical-coordinate convention.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

mod spherical;

pub use spherical::OffshoreSphericalCoords;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Coordinate frame with the given axes as columns and `origin` as
    /// translation. The axes are used as given, without normalization.
    pub fn from_frame(origin: &Point3, x: &Vec3, y: &Vec3, z: &Vec3) -> Self {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 1>(0, 0).copy_from(x);
        m.fixed_view_mut::<3, 1>(0, 1).copy_from(y);
        m.fixed_view_mut::<3, 1>(0, 2).copy_from(z);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&origin.coords);
        Self { matrix: m }
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula.
    pub fn rotation_about_axis(axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Angle from `a` to `b` measured about `axis`, in `[0, 2π)`.
///
/// The inputs need not be normalized. The sign convention is right-handed:
/// the angle is reflected to `2π - θ` when `a × b` points against `axis`.
pub fn signed_angle(axis: &Vec3, a: &Vec3, b: &Vec3) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    let angle = cos.acos();
    if axis.dot(&a.cross(b)) < 0.0 {
        2.0 * std::f64::consts::PI - angle
    } else {
        angle
    }
}
