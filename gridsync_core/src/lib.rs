//! Contains a set of shared types

pub mod color;
pub mod id;
pub mod input;
pub mod pose;
pub mod role;
pub mod roster;

pub use bevy_math::Vec3;

pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::id::{EntityId, PeerId};
    pub use crate::input::InputFlags;
    pub use crate::pose::Pose;
    pub use crate::role::Role;
    pub use crate::roster::{ColorEntry, ScoreEntry};
    pub use bevy_math::Vec3;
}
