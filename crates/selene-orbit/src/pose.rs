//! Rigid poses and the satellite pose math.

use std::f64::consts::TAU;

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::error::OrbitError;

/// A rigid transform: an orthonormal basis plus a position.
///
/// The basis columns are the local axes. Local X is "forward" and local Z is
/// "up", so a reference body flying along +X with +Z overhead has the identity
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub orientation: Mat3,
    pub position: Vec3,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        orientation: Mat3::IDENTITY,
        position: Vec3::ZERO,
    };

    pub fn new(orientation: Mat3, position: Vec3) -> Self {
        Self {
            orientation,
            position,
        }
    }

    /// Identity orientation at `position`.
    pub fn at(position: Vec3) -> Self {
        Self::new(Mat3::IDENTITY, position)
    }

    /// Build from explicit local axes.
    pub fn from_axes(x: Vec3, y: Vec3, z: Vec3, position: Vec3) -> Self {
        Self::new(Mat3::from_cols(x, y, z), position)
    }

    /// Local X axis.
    pub fn forward(&self) -> Vec3 {
        self.orientation.x_axis
    }

    /// Local Y axis.
    pub fn left(&self) -> Vec3 {
        self.orientation.y_axis
    }

    /// Local Z axis.
    pub fn up(&self) -> Vec3 {
        self.orientation.z_axis
    }

    /// Rotate the orientation about the pose's own up axis, keeping the position.
    pub fn yawed(&self, angle_rad: f32) -> Self {
        let axis = self.up().try_normalize().unwrap_or(Vec3::Z);
        let rotation = Mat3::from_axis_angle(axis, angle_rad);
        Self::new(rotation * self.orientation, self.position)
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols(
            self.orientation.x_axis.extend(0.0),
            self.orientation.y_axis.extend(0.0),
            self.orientation.z_axis.extend(0.0),
            self.position.extend(1.0),
        )
    }

    /// Split a rigid `Mat4` into basis and translation. Scale and projection are not removed.
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::new(Mat3::from_mat4(*m), m.w_axis.truncate())
    }

    /// True if the basis vectors are unit length and mutually perpendicular within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let (x, y, z) = (
            self.orientation.x_axis,
            self.orientation.y_axis,
            self.orientation.z_axis,
        );
        [x, y, z]
            .iter()
            .all(|axis| (axis.length() - 1.0).abs() <= tolerance)
            && x.dot(y).abs() <= tolerance
            && y.dot(z).abs() <= tolerance
            && z.dot(x).abs() <= tolerance
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pose of a satellite `t` revolutions into a circular orbit around `origin`.
///
/// At `t = 0` the satellite sits `radius_m` along the origin's forward axis.
/// It then turns counter-clockwise about the origin's up axis (right-handed),
/// one revolution per unit of `t`. The satellite's local X always points back
/// at the origin, Y is `up × X` and Z is `X × Y`.
pub fn orbit_pose(origin: &Pose, radius_m: f32, t: f64) -> Result<Pose, OrbitError> {
    let up = origin.up().try_normalize().ok_or(OrbitError::DegenerateOrbit)?;

    // Only the fractional turn matters for the angle; reducing in f64 keeps
    // precision after many revolutions.
    let angle = (t.rem_euclid(1.0) * TAU) as f32;
    let radial = Quat::from_axis_angle(up, angle) * (origin.forward() * radius_m);
    let orbit_pos = origin.position + radial;

    let rel_x = (origin.position - orbit_pos)
        .try_normalize()
        .ok_or(OrbitError::DegenerateOrbit)?;
    let rel_y = up
        .cross(rel_x)
        .try_normalize()
        .ok_or(OrbitError::DegenerateOrbit)?;
    let rel_z = rel_x.cross(rel_y);

    Ok(Pose::from_axes(rel_x, rel_y, rel_z, orbit_pos))
}
