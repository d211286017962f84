use bevy::prelude::*;

use crate::{
    animate::BackdropClock,
    plugin::BackdropPhase,
    scene::{Backdrop, BackdropAssets},
};

/// Request a full teardown of the backdrop at the end of the current frame.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct DisposeBackdrop;

/// Tear the backdrop down: despawn everything it spawned, release every
/// asset it allocated, restore the ambient light it overwrote, stop the
/// animation pass and mark the phase disposed.
///
/// Safe to call at any point in the lifecycle. Before construction finished
/// there is nothing to release and the phase still moves to `Disposed`, so
/// a construction that is still waiting on the render capability will never
/// proceed. Calling it twice is a no-op the second time.
pub fn teardown_backdrop(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<Backdrop>>()
        .iter(world)
        .collect();
    let despawned = entities.len();
    for entity in entities {
        world.despawn(entity);
    }

    // The ledger is taken out of the world first, so each handle can only
    // ever be released once even if teardown is requested again.
    let mut released = 0_usize;
    if let Some(ledger) = world.remove_resource::<BackdropAssets>() {
        if let Some(mut meshes) = world.get_resource_mut::<Assets<Mesh>>() {
            for handle in &ledger.meshes {
                if meshes.remove(handle).is_some() {
                    released += 1;
                }
            }
        }
        if let Some(mut materials) = world.get_resource_mut::<Assets<StandardMaterial>>() {
            for handle in &ledger.materials {
                if materials.remove(handle).is_some() {
                    released += 1;
                }
            }
        }

        // The renderer owns this resource and expects it to keep existing;
        // put back whatever was there before construction overwrote it.
        world.insert_resource(ledger.ambient_before.unwrap_or_default());
    }

    world.remove_resource::<BackdropClock>();

    if let Some(mut phase) = world.get_resource_mut::<BackdropPhase>() {
        *phase = BackdropPhase::Disposed;
    }

    tracing::debug!(despawned, released, "backdrop torn down");
}

/// Drain [`DisposeBackdrop`] requests and run the teardown when one arrived.
pub(crate) fn handle_dispose_events(world: &mut World) {
    let requested = world
        .resource_mut::<Events<DisposeBackdrop>>()
        .drain()
        .count()
        > 0;
    if requested {
        teardown_backdrop(world);
    }
}
