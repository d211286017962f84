use bevy::{prelude::*, window::WindowResized};

use crate::scene::BackdropCamera;

/// Last viewport dimensions the backdrop adapted to.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct BackdropViewport {
    pub width: f32,
    pub height: f32,
}

/// Track window resizes: update the recorded viewport and the backdrop
/// camera's aspect ratio. Scene objects are never reconstructed here.
pub(crate) fn apply_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<BackdropViewport>,
    mut cameras: Query<&mut Projection, With<BackdropCamera>>,
) {
    let Some(event) = resize_events.read().last() else {
        return;
    };

    viewport.width = event.width;
    viewport.height = event.height;

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = event.width / event.height.max(1.0);
        }
    }
}
