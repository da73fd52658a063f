//! Mouselook - pointer-driven look control for cameras and scene nodes
//!
//! While a configured pointer button is held, pointer motion rotates a
//! target: horizontal drags accumulate yaw without bound, vertical drags
//! pitch within a clamped ascent range, and roll is pinned to zero.
//!
//! # Pieces
//! - [`InputSurface`]: pointer event fan-out with one queue per listener
//! - [`LookController`]: the drag-to-rotation session state machine
//! - [`SceneNode`] and [`Transform`]: a ready-made [`LookTarget`] with an
//!   update flag for downstream consumers
//! - [`platform_winit`]: adapter from winit window events
//!
//! Hosts feed pointer events into the surface, then call
//! [`LookController::update`] once per simulation tick.

pub mod input;
pub mod platform_winit;
pub mod scene;
pub mod surface;

// Re-export Bevy ECS prelude for users
pub use bevy_ecs::prelude::*;

pub use input::{ButtonSelector, ParseButtonSelectorError, PointerButton, PointerEvent};
pub use scene::{LookConfig, LookController, LookTarget, SceneNode, Transform};
pub use surface::{InputSurface, ListenerId};
