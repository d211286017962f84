//! Decorative animated 3D backdrop for the Global Translator window.
//!
//! [`BackdropPlugin`] owns the whole lifecycle of the scene:
//! - deferred construction once the render asset stores are available,
//! - a per-frame animation pass driven by a fixed-step clock,
//! - camera/viewport bookkeeping on window resize,
//! - teardown that despawns every entity it created and releases every
//!   mesh/material it ever allocated, exactly once.
//!
//! The backdrop is purely cosmetic: it reads nothing from and exposes
//! nothing to the translation panel drawn above it.
#![forbid(unsafe_code)]

pub mod animate;
pub mod config;
pub mod plugin;
pub mod scene;
pub mod teardown;
pub mod viewport;

pub use animate::{BackdropClock, CLOCK_STEP};
pub use config::BackdropConfig;
pub use plugin::{BackdropPhase, BackdropPlugin};
pub use scene::{Backdrop, BackdropAssets, BackdropCamera, DriftShape, OrbitLight, ParticleCloud};
pub use teardown::{DisposeBackdrop, teardown_backdrop};
pub use viewport::BackdropViewport;

#[cfg(test)]
mod tests;
