//! Offshore spherical-coordinate convention.
//!
//! Y is North, X is East, Z is up; depth is negative Z. Azimuth is
//! measured clockwise from North looking down, inclination from
//! vertical-down (0 = straight down, π/2 = horizontal).

use crate::Vec3;

/// Spherical decomposition of a direction vector in the offshore convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffshoreSphericalCoords {
    /// Compass heading of the horizontal projection, radians.
    pub azimuth: f64,
    /// Angle from vertical-down, radians.
    pub inclination: f64,
    /// Length of the decomposed vector.
    pub radius: f64,
}

impl OffshoreSphericalCoords {
    /// Decompose a vector into azimuth, inclination and length.
    ///
    /// Degenerate inputs are defined rather than NaN: a vertical vector
    /// has azimuth 0, the zero vector additionally has inclination 0.
    pub fn from_vector(v: &Vec3) -> Self {
        let azimuth = if v.x == 0.0 && v.y == 0.0 {
            0.0
        } else {
            v.x.atan2(v.y)
        };
        let radius = v.norm();
        let inclination = if radius == 0.0 {
            0.0
        } else {
            (-v.z / radius).clamp(-1.0, 1.0).acos()
        };
        Self {
            azimuth,
            inclination,
            radius,
        }
    }

    /// Unit vector for the given azimuth and inclination.
    pub fn unit_vector(azimuth: f64, inclination: f64) -> Vec3 {
        let (sin_azi, cos_azi) = azimuth.sin_cos();
        let (sin_inc, cos_inc) = inclination.sin_cos();
        Vec3::new(sin_azi * sin_inc, cos_azi * sin_inc, -cos_inc)
    }
}
