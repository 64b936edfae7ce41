//! Scene construction parameters.

use crate::constants::*;
use crate::morph::MorphTrigger;

/// Immutable configuration passed into [`crate::TunnelScene::new`].
///
/// The defaults reproduce the production scene; tests and previews can build
/// smaller or differently-triggered scenes without touching globals, so
/// multiple scene instances never interfere.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub count: usize,
    pub depth: f32,
    pub logo_edge: f32,
    pub logo_z: f32,
    pub logo_scale: f32,
    pub trigger: MorphTrigger,
    /// Exponential damping rate (per second) for the section trigger.
    pub morph_rate: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            count: INSTANCE_COUNT,
            depth: TUNNEL_DEPTH,
            logo_edge: LOGO_EDGE,
            logo_z: LOGO_Z,
            logo_scale: LOGO_SCALE,
            trigger: MorphTrigger::Section {
                index: LOGO_SECTION,
            },
            morph_rate: MORPH_RATE_PER_SEC,
        }
    }
}
