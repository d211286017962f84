use std::sync::Arc;

use bevy::{log::LogPlugin, prelude::*};
use lingua_app::{TranslatorPanelPlugin, logging};
use lingua_backdrop::BackdropPlugin;
use lingua_translate::{ServiceConfig, TranslateError, TranslationClient};

fn main() -> Result<(), TranslateError> {
    logging::init_logging();

    let config = ServiceConfig::load()?;
    let client = Arc::new(TranslationClient::new(config)?);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Global Translator".to_string(),
                        ..default()
                    }),
                    ..default()
                })
                // init_logging owns the subscriber.
                .disable::<LogPlugin>(),
        )
        .add_plugins(BackdropPlugin::default())
        .add_plugins(TranslatorPanelPlugin { client })
        .run();

    Ok(())
}
