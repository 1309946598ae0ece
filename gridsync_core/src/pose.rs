use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// Position and orientation of an entity.
///
/// `rotation` holds Euler angles in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Same pose with every angle wrapped into `[0, 360)`
    pub fn wrapped(&self) -> Self {
        Self {
            position: self.position,
            rotation: Vec3::new(
                wrap_degrees(self.rotation.x),
                wrap_degrees(self.rotation.y),
                wrap_degrees(self.rotation.z),
            ),
        }
    }
}

/// Wraps an angle in degrees into `[0, 360)`
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
