//! Per-frame scene update: morph, group transform and instance matrices.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::group::GroupTransform;
use crate::input::InputState;
use crate::morph::{lerp, smoothstep, MorphState};
use crate::tunnel::{self, TunnelSlot};
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;

/// The whole background scene: fixed target sets plus the mutable per-frame
/// state. One call to [`TunnelScene::advance`] per rendered frame; the
/// renderer then uploads [`TunnelScene::instance_matrices`] in a single
/// buffer write.
pub struct TunnelScene {
    config: SceneConfig,
    slots: Vec<TunnelSlot>,
    logo_targets: Vec<Vec3>,
    morph: MorphState,
    group: GroupTransform,
    matrices: Vec<Mat4>,
}

impl TunnelScene {
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let slots = tunnel::tunnel_layout(config.count, config.depth, &mut rng);
        let logo_targets =
            tunnel::logo_targets(config.count, config.logo_edge, config.logo_z, &mut rng);
        log::info!(
            "[scene] instances={} depth={} trigger={:?}",
            config.count,
            config.depth,
            config.trigger
        );
        Self {
            slots,
            logo_targets,
            morph: MorphState::default(),
            group: GroupTransform::default(),
            matrices: vec![Mat4::IDENTITY; config.count],
            config,
        }
    }

    /// Advance the scene by `dt` seconds against one input snapshot.
    pub fn advance(&mut self, dt: f32, input: &InputState) {
        let s = input.scroll_fraction();
        let m = self.morph.update(
            self.config.trigger,
            self.config.morph_rate,
            dt,
            s,
            input.active_section(),
        );
        self.group.update(dt, s, input.pointer, m);

        // Tunnel motion fades out (never hard-stops) as the morph completes,
        // so depth keeps drifting faintly behind the displayed logo.
        let pause = smoothstep((m - PAUSE_FADE_START) / (1.0 - PAUSE_FADE_START));
        let speed =
            lerp(TUNNEL_SPEED_MIN, TUNNEL_SPEED_MAX, s) * dt.max(0.0) * (1.0 - PAUSE_STRENGTH * pause);
        let depth = self.config.depth;

        for (i, slot) in self.slots.iter_mut().enumerate() {
            let mut z = slot.base_z + speed;
            while z > 0.0 {
                z -= depth;
            }
            slot.base_z = z;

            let depth01 = 1.0 - z.abs() / depth;
            let tunnel_scale = lerp(TUNNEL_SCALE_MIN, TUNNEL_SCALE_MAX, depth01) * slot.scale_jitter;
            let tunnel_rz = slot.rotation_jitter + z * DEPTH_ROLL_COEFF;

            // Blend tunnel -> logo; rotation flattens to exactly zero and
            // scale lands exactly on logo_scale at full morph.
            let pos = Vec3::new(0.0, 0.0, z).lerp(self.logo_targets[i], m);
            let scale = lerp(tunnel_scale, self.config.logo_scale, m);
            let rz = lerp(tunnel_rz, 0.0, m);

            self.matrices[i] = Mat4::from_scale_rotation_translation(
                Vec3::splat(scale),
                Quat::from_rotation_z(rz),
                pos,
            );
        }
    }

    #[inline]
    pub fn instance_matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    #[inline]
    pub fn group_matrix(&self) -> Mat4 {
        self.group.matrix()
    }

    #[inline]
    pub fn morph_progress(&self) -> f32 {
        self.morph.progress()
    }

    #[inline]
    pub fn slots(&self) -> &[TunnelSlot] {
        &self.slots
    }

    #[inline]
    pub fn logo_targets(&self) -> &[Vec3] {
        &self.logo_targets
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
