//! Rendering module - debug gizmo view of the arena.

mod draw;
mod plugin;

pub use plugin::{RenderConfig, RenderingPlugin, ShakeCamera};
