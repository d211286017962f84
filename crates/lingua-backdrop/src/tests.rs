use bevy::{asset::AssetPlugin, prelude::*, window::WindowResized};

use crate::{
    Backdrop, BackdropAssets, BackdropCamera, BackdropClock, BackdropConfig, BackdropPhase,
    BackdropPlugin, BackdropViewport, CLOCK_STEP, DisposeBackdrop, DriftShape, OrbitLight,
    ParticleCloud, teardown_backdrop,
};

fn small_config() -> BackdropConfig {
    BackdropConfig {
        shape_count: 8,
        particle_count: 32,
        seed: Some(42),
    }
}

/// Headless app with the render asset stores available from the start.
fn backdrop_app(config: BackdropConfig) -> App {
    let mut app = bare_app(config);
    app.init_asset::<Mesh>();
    app.init_asset::<StandardMaterial>();
    app
}

/// Headless app without the asset stores, mimicking a render capability
/// that has not finished loading yet.
fn bare_app(config: BackdropConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.add_plugins(BackdropPlugin { config });
    app
}

fn shape_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<(), With<DriftShape>>();
    query.iter(app.world()).count()
}

fn backdrop_entity_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<(), With<Backdrop>>();
    query.iter(app.world()).count()
}

#[test]
fn construction_is_deferred_until_render_assets_exist() {
    let mut app = bare_app(small_config());

    for _ in 0..3 {
        app.update();
    }
    assert_eq!(*app.world().resource::<BackdropPhase>(), BackdropPhase::Pending);
    assert_eq!(backdrop_entity_count(&mut app), 0);

    app.init_asset::<Mesh>();
    app.init_asset::<StandardMaterial>();
    app.update();

    assert_eq!(*app.world().resource::<BackdropPhase>(), BackdropPhase::Active);
    assert_eq!(shape_count(&mut app), 8);
}

#[test]
fn construction_spawns_the_full_scene_exactly_once() {
    let mut app = backdrop_app(small_config());
    app.update();
    app.update();

    assert_eq!(shape_count(&mut app), 8);

    let mut clouds = app.world_mut().query_filtered::<(), With<ParticleCloud>>();
    assert_eq!(clouds.iter(app.world()).count(), 1);

    let mut cameras = app.world_mut().query_filtered::<(), With<BackdropCamera>>();
    assert_eq!(cameras.iter(app.world()).count(), 1);

    let mut directionals = app.world_mut().query_filtered::<(), With<DirectionalLight>>();
    assert_eq!(directionals.iter(app.world()).count(), 2);

    let mut orbiters = app.world_mut().query_filtered::<(), With<OrbitLight>>();
    assert_eq!(orbiters.iter(app.world()).count(), 1);

    assert!(app.world().contains_resource::<AmbientLight>());

    // 6 palette meshes + the particle cloud; 5 palette materials + the cloud's.
    let ledger = app.world().resource::<BackdropAssets>();
    assert_eq!(ledger.meshes.len(), 7);
    assert_eq!(ledger.materials.len(), 6);
    assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 7);
    assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 6);
}

#[test]
fn animation_advances_the_clock_and_mutates_the_scene() {
    let mut app = backdrop_app(small_config());
    app.update();

    let clock_after_one = app.world().resource::<BackdropClock>().0;
    assert!((clock_after_one - CLOCK_STEP).abs() < 1e-6);

    let mut shapes = app.world_mut().query::<(&DriftShape, &Transform)>();
    let (_, before) = shapes.iter(app.world()).next().expect("shapes exist");
    let before = *before;

    app.update();

    let clock_after_two = app.world().resource::<BackdropClock>().0;
    assert!((clock_after_two - 2.0 * CLOCK_STEP).abs() < 1e-6);

    let mut shapes = app.world_mut().query::<(&DriftShape, &Transform)>();
    let (_, after) = shapes.iter(app.world()).next().expect("shapes exist");
    assert_ne!(before.rotation, after.rotation);

    let mut lights = app.world_mut().query::<(&OrbitLight, &Transform)>();
    let (orbit, light_transform) = lights.iter(app.world()).next().expect("orbit light exists");
    // After two ticks the light sits on its circle, not at the origin.
    let radial = light_transform.translation.truncate().length();
    assert!((radial - orbit.radius).abs() < 1e-3);
}

#[test]
fn teardown_releases_every_resource_exactly_once() {
    let mut app = backdrop_app(small_config());
    app.update();
    assert_eq!(shape_count(&mut app), 8);

    app.world_mut().send_event(DisposeBackdrop);
    app.update();

    assert_eq!(*app.world().resource::<BackdropPhase>(), BackdropPhase::Disposed);
    assert_eq!(backdrop_entity_count(&mut app), 0);
    assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 0);
    assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 0);
    assert!(!app.world().contains_resource::<BackdropClock>());
    assert!(!app.world().contains_resource::<BackdropAssets>());

    // No ambient light existed before construction, so the default is left.
    let ambient = app.world().resource::<AmbientLight>();
    assert_eq!(ambient.brightness, AmbientLight::default().brightness);

    // A second teardown finds nothing to release and must not panic.
    teardown_backdrop(app.world_mut());
    assert_eq!(*app.world().resource::<BackdropPhase>(), BackdropPhase::Disposed);
}

#[test]
fn teardown_restores_the_preexisting_ambient_light() {
    let mut app = backdrop_app(small_config());
    app.insert_resource(AmbientLight {
        color: Color::srgb(1.0, 0.0, 0.0),
        brightness: 55.0,
        ..AmbientLight::default()
    });

    app.update();
    // Construction replaces the host's ambient configuration while active.
    assert_ne!(app.world().resource::<AmbientLight>().brightness, 55.0);

    app.world_mut().send_event(DisposeBackdrop);
    app.update();

    let ambient = app.world().resource::<AmbientLight>();
    assert_eq!(ambient.brightness, 55.0);
    assert_eq!(ambient.color, Color::srgb(1.0, 0.0, 0.0));
}

#[test]
fn no_animation_runs_after_teardown() {
    let mut app = backdrop_app(small_config());
    app.update();

    app.world_mut().send_event(DisposeBackdrop);
    app.update();

    // A stray animated shape would only move if the pass were still live.
    let probe = app
        .world_mut()
        .spawn((
            DriftShape {
                spin: Vec2::new(0.1, 0.1),
                phase: Vec2::ZERO,
            },
            Transform::default(),
        ))
        .id();

    for _ in 0..5 {
        app.update();
    }

    let transform = app.world().get::<Transform>(probe).expect("probe exists");
    assert_eq!(*transform, Transform::default());
    assert!(!app.world().contains_resource::<BackdropClock>());
}

#[test]
fn teardown_before_construction_blocks_it_for_good() {
    let mut app = bare_app(small_config());
    app.update();
    assert_eq!(*app.world().resource::<BackdropPhase>(), BackdropPhase::Pending);

    app.world_mut().send_event(DisposeBackdrop);
    app.update();
    assert_eq!(*app.world().resource::<BackdropPhase>(), BackdropPhase::Disposed);

    // The render capability arriving late must not resurrect the scene.
    app.init_asset::<Mesh>();
    app.init_asset::<StandardMaterial>();
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(backdrop_entity_count(&mut app), 0);
    assert!(!app.world().contains_resource::<BackdropAssets>());
}

#[test]
fn resize_updates_viewport_and_aspect_without_rebuilding() {
    let mut app = backdrop_app(small_config());
    app.update();
    let shapes_before = shape_count(&mut app);

    let window = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(WindowResized {
        window,
        width: 1280.0,
        height: 720.0,
    });
    app.update();

    let viewport = *app.world().resource::<BackdropViewport>();
    assert_eq!(viewport.width, 1280.0);
    assert_eq!(viewport.height, 720.0);

    let mut cameras = app
        .world_mut()
        .query_filtered::<&Projection, With<BackdropCamera>>();
    let projection = cameras
        .single(app.world())
        .expect("exactly one backdrop camera");
    let Projection::Perspective(perspective) = projection else {
        panic!("backdrop camera uses a perspective projection");
    };
    assert!((perspective.aspect_ratio - 1280.0 / 720.0).abs() < 1e-6);

    assert_eq!(shape_count(&mut app), shapes_before);
}

#[test]
fn seeded_construction_is_reproducible() {
    let transforms = |app: &mut App| -> Vec<Transform> {
        let mut query = app.world_mut().query_filtered::<&Transform, With<DriftShape>>();
        query.iter(app.world()).copied().collect()
    };

    let mut first = backdrop_app(small_config());
    first.update();
    let mut second = backdrop_app(small_config());
    second.update();

    assert_eq!(transforms(&mut first), transforms(&mut second));
}
