//! Scene-side types: transforms, nodes and the look controller

mod look_controller;
mod node;
mod transform;

pub use look_controller::*;
pub use node::*;
pub use transform::*;
