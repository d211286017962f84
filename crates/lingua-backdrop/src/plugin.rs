use bevy::{prelude::*, window::WindowResized};

use crate::{
    animate::{advance_clock, backdrop_active, drift_shapes, orbit_light, spin_particles},
    config::BackdropConfig,
    scene::bootstrap_backdrop,
    teardown::{DisposeBackdrop, handle_dispose_events},
    viewport::{BackdropViewport, apply_window_resize},
};

/// Lifecycle of the backdrop scene.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropPhase {
    /// Waiting for the render asset stores; nothing constructed yet.
    Pending,
    /// Scene constructed, animation pass running.
    Active,
    /// Torn down; construction and animation are both permanently off.
    Disposed,
}

/// Bevy plugin for the decorative backdrop.
///
/// Construction is deferred (see [`bootstrap_backdrop`]) and runs in
/// `PreUpdate`, so the scene fully exists before the animation pass first
/// runs in `Update`. Teardown requests are handled in `PostUpdate`.
#[derive(Default)]
pub struct BackdropPlugin {
    pub config: BackdropConfig,
}

impl Plugin for BackdropPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(BackdropPhase::Pending)
            .init_resource::<BackdropViewport>()
            .add_event::<WindowResized>()
            .add_event::<DisposeBackdrop>()
            .add_systems(PreUpdate, bootstrap_backdrop)
            .add_systems(
                Update,
                (
                    (advance_clock, drift_shapes, orbit_light, spin_particles)
                        .chain()
                        .run_if(backdrop_active),
                    apply_window_resize,
                ),
            )
            .add_systems(PostUpdate, handle_dispose_events);
    }
}
