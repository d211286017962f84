use std::f32::consts::{PI, TAU};

use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::render_resource::PrimitiveTopology,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    animate::BackdropClock,
    config::BackdropConfig,
    plugin::BackdropPhase,
};

/// Tag on every entity the backdrop spawns; teardown despawns by this tag.
#[derive(Component, Debug, Clone, Copy)]
pub struct Backdrop;

/// The backdrop's own camera, so resize handling never touches a camera the
/// application may add for other purposes.
#[derive(Component, Debug, Clone, Copy)]
pub struct BackdropCamera;

/// Per-shape animation parameters, drawn once at construction.
#[derive(Component, Debug, Clone, Copy)]
pub struct DriftShape {
    /// Fixed per-frame rotation increments around x and y.
    pub spin: Vec2,
    /// Oscillation phase offsets so the shapes do not bob in lockstep.
    pub phase: Vec2,
}

/// Marker for the single point-cloud entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleCloud;

/// Point light swept along a circle by the animation pass.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitLight {
    pub radius: f32,
    pub angular_speed: f32,
}

/// Ledger of every asset handle the backdrop allocated.
///
/// Teardown drains this to release each mesh and material exactly once;
/// nothing else holds strong clones once the entities are gone. The ambient
/// light resource belongs to the renderer, not the backdrop, so the value
/// found at construction is kept here and put back at teardown.
#[derive(Resource, Debug, Default)]
pub struct BackdropAssets {
    pub meshes: Vec<Handle<Mesh>>,
    pub materials: Vec<Handle<StandardMaterial>>,
    pub ambient_before: Option<AmbientLight>,
}

const SHAPE_SPIN: Vec2 = Vec2::new(0.001, 0.0015);
const SHAPE_VOLUME: f32 = 30.0;
const SHAPE_DEPTH_OFFSET: f32 = -10.0;
const PARTICLE_VOLUME: f32 = 50.0;
const PARTICLE_DEPTH_OFFSET: f32 = -20.0;

fn shape_colors() -> [Color; 5] {
    [
        Color::srgb_u8(0x4a, 0x90, 0xe2),
        Color::srgb_u8(0x50, 0xe3, 0xc2),
        Color::srgb_u8(0xf5, 0xa6, 0x23),
        Color::srgb_u8(0xbd, 0x10, 0xe0),
        Color::srgb_u8(0x7e, 0xd3, 0x21),
    ]
}

/// Build the scene once the render asset stores exist.
///
/// Runs every `PreUpdate` tick while the phase is `Pending`: if the asset
/// stores have not appeared yet (the render capability is still loading)
/// it simply tries again next frame, and if the backdrop was disposed in
/// the meantime it never builds at all.
pub(crate) fn bootstrap_backdrop(
    mut commands: Commands,
    config: Res<BackdropConfig>,
    mut phase: ResMut<BackdropPhase>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    ambient: Option<Res<AmbientLight>>,
) {
    if *phase != BackdropPhase::Pending {
        return;
    }
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut ledger = BackdropAssets {
        ambient_before: ambient.map(|light| light.clone()),
        ..BackdropAssets::default()
    };

    spawn_camera(&mut commands);
    spawn_shapes(&mut commands, &config, &mut rng, &mut meshes, &mut materials, &mut ledger);
    spawn_particle_cloud(&mut commands, &config, &mut rng, &mut meshes, &mut materials, &mut ledger);
    spawn_lights(&mut commands);

    commands.insert_resource(ledger);
    commands.insert_resource(BackdropClock::default());
    *phase = BackdropPhase::Active;

    tracing::debug!(
        shapes = config.shape_count,
        particles = config.particle_count,
        "backdrop scene constructed"
    );
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Backdrop,
        BackdropCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..PerspectiveProjection::default()
        }),
        Transform::from_xyz(0.0, 0.0, 8.0),
    ));
}

fn spawn_shapes(
    commands: &mut Commands,
    config: &BackdropConfig,
    rng: &mut StdRng,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    ledger: &mut BackdropAssets,
) {
    let geometry_palette = [
        meshes.add(Sphere::new(0.8)),
        meshes.add(Torus {
            minor_radius: 0.25,
            major_radius: 0.6,
        }),
        meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        meshes.add(Tetrahedron::default()),
        meshes.add(Capsule3d::new(0.35, 0.7)),
        meshes.add(Cylinder::new(0.4, 0.8)),
    ];
    let material_palette = shape_colors().map(|color| {
        materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..StandardMaterial::default()
        })
    });
    ledger.meshes.extend(geometry_palette.iter().cloned());
    ledger.materials.extend(material_palette.iter().cloned());

    for _ in 0..config.shape_count {
        let mesh = geometry_palette[rng.gen_range(0..geometry_palette.len())].clone();
        let material = material_palette[rng.gen_range(0..material_palette.len())].clone();

        let half = SHAPE_VOLUME / 2.0;
        let translation = Vec3::new(
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
            rng.gen_range(-half..half) + SHAPE_DEPTH_OFFSET,
        );
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..PI),
        );
        let scale = rng.gen_range(0.2..0.6);

        commands.spawn((
            Backdrop,
            DriftShape {
                spin: SHAPE_SPIN,
                phase: Vec2::new(rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU)),
            },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform {
                translation,
                rotation,
                scale: Vec3::splat(scale),
            },
        ));
    }
}

fn spawn_particle_cloud(
    commands: &mut Commands,
    config: &BackdropConfig,
    rng: &mut StdRng,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    ledger: &mut BackdropAssets,
) {
    let half = PARTICLE_VOLUME / 2.0;
    let mut positions = Vec::with_capacity(config.particle_count);
    for _ in 0..config.particle_count {
        positions.push([
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
            rng.gen_range(-half..half) + PARTICLE_DEPTH_OFFSET,
        ]);
    }

    let mut cloud = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    cloud.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    let cloud_mesh = meshes.add(cloud);
    let cloud_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.8, 0.8, 0.8, 0.7),
        unlit: true,
        ..StandardMaterial::default()
    });
    ledger.meshes.push(cloud_mesh.clone());
    ledger.materials.push(cloud_material.clone());

    commands.spawn((
        Backdrop,
        ParticleCloud,
        Mesh3d(cloud_mesh),
        MeshMaterial3d(cloud_material),
        Transform::default(),
    ));
}

fn spawn_lights(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..AmbientLight::default()
    });

    commands.spawn((
        Backdrop,
        DirectionalLight {
            illuminance: 6_000.0,
            ..DirectionalLight::default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Backdrop,
        DirectionalLight {
            illuminance: 3_000.0,
            ..DirectionalLight::default()
        },
        Transform::from_xyz(-5.0, -5.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Backdrop,
        OrbitLight {
            radius: 7.0,
            angular_speed: 0.5,
        },
        PointLight {
            intensity: 800_000.0,
            range: 100.0,
            ..PointLight::default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
