//! Animation core for the triangle-tunnel site background.
//!
//! Everything in this crate is platform-neutral: no DOM, no GPU. The web
//! frontend feeds it input snapshots and a frame delta and reads back a
//! group matrix plus one model matrix per instance.

pub mod config;
pub mod constants;
pub mod group;
pub mod input;
pub mod morph;
pub mod scene;
pub mod tunnel;

pub static TUNNEL_WGSL: &str = include_str!("../shaders/tunnel.wgsl");

pub use config::SceneConfig;
pub use group::GroupTransform;
pub use input::InputState;
pub use morph::{lerp, smoothstep, MorphState, MorphTrigger, ScrollWindow};
pub use scene::TunnelScene;
pub use tunnel::{logo_targets, triangle_outline_vertices, tunnel_layout, TunnelSlot};
