use bevy::prelude::*;

/// Tunables for the backdrop scene.
///
/// Defaults to 70 solid shapes and a 1000-point particle cloud.
/// `seed` pins the placement RNG, which the
/// tests use; the app leaves it unset for a fresh arrangement per launch.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct BackdropConfig {
    pub shape_count: usize,
    pub particle_count: usize,
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            shape_count: 70,
            particle_count: 1000,
            seed: None,
        }
    }
}
