//! Application shell of the Global Translator.
//!
//! Wires the translation controller and client from `lingua-translate` into
//! a Bevy UI panel drawn over the `lingua-backdrop` scene. All UI events and
//! worker completions travel through one lock-free [`ActionQueue`], drained
//! once per frame, so the controller has a single mutation path.
#![forbid(unsafe_code)]

use std::sync::Arc;

use bevy::prelude::*;
use lingua_translate::{TranslationClient, TranslationController};

pub mod actions;
pub mod logging;
pub mod panel;
pub mod text_entry;
pub mod worker;

pub use actions::{ActionQueue, ActionSender, PanelAction, SourceEdit};

/// The translation state machine, owned by the ECS.
#[derive(Resource, Debug, Default)]
pub struct PanelController(pub TranslationController);

/// Shared handle to the blocking HTTP client; cloned into worker tasks.
#[derive(Resource, Clone)]
pub struct PanelClient(pub Arc<TranslationClient>);

/// UI panel, action routing and request dispatch for the translator.
pub struct TranslatorPanelPlugin {
    pub client: Arc<TranslationClient>,
}

impl Plugin for TranslatorPanelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PanelClient(self.client.clone()))
            .init_resource::<ActionQueue>()
            .init_resource::<PanelController>()
            .add_systems(Startup, panel::setup_panel)
            .add_systems(PreUpdate, actions::drain_panel_actions)
            .add_systems(
                Update,
                (
                    text_entry::capture_source_text,
                    panel::handle_buttons,
                    panel::sync_source_text,
                    panel::sync_result_text,
                    panel::sync_language_label,
                    panel::sync_translate_button,
                ),
            );
    }
}
