//! Scene node component

use bevy_ecs::prelude::*;
use glam::Quat;

use super::{LookTarget, Transform};

/// An orientable object in the scene: a [`Transform`] plus an update flag.
///
/// The flag is set whenever something rewrites the node's orientation and
/// stays set until a consumer (typically whatever re-derives world
/// matrices) calls [`SceneNode::clear_updated`].
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SceneNode {
    pub transform: Transform,
    updated: bool,
}

impl SceneNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Mark the node's transform as changed since the last clear.
    pub fn set_updated(&mut self) {
        self.updated = true;
    }

    /// Whether the transform changed since the last clear.
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Acknowledge the change, e.g. after re-deriving dependent state.
    pub fn clear_updated(&mut self) {
        self.updated = false;
    }
}

impl LookTarget for SceneNode {
    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    fn set_updated(&mut self) {
        SceneNode::set_updated(self);
    }
}
