//! Translator panel layout and per-frame view sync.
//!
//! The panel never mutates state directly: button presses become actions on
//! the queue, and the `sync_*` systems copy the controller back into the
//! text nodes each frame.

use bevy::prelude::*;
use lingua_translate::Language;

use crate::{
    PanelController,
    actions::{ActionQueue, PanelAction},
};

pub const PANEL_TITLE: &str = "Global Translator";
pub const SOURCE_PLACEHOLDER: &str = "Enter text to translate";
pub const LANGUAGE_PLACEHOLDER: &str = "Select Language";
pub const TRANSLATE_LABEL: &str = "Translate Text";
pub const TRANSLATING_LABEL: &str = "Translating…";

const PANEL_BACKGROUND: Color = Color::srgba(0.03, 0.06, 0.11, 0.88);
const FIELD_BACKGROUND: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
const BUTTON_BACKGROUND: Color = Color::srgb(0.29, 0.56, 0.89);
const BUTTON_BACKGROUND_BUSY: Color = Color::srgb(0.35, 0.38, 0.44);
const TEXT_COLOR: Color = Color::srgb(0.92, 0.95, 0.98);
const PLACEHOLDER_COLOR: Color = Color::srgba(0.92, 0.95, 0.98, 0.45);

#[derive(Component)]
pub struct SourceTextDisplay;

#[derive(Component)]
pub struct ResultTextDisplay;

#[derive(Component)]
pub struct LanguageButton;

#[derive(Component)]
pub struct LanguageButtonLabel;

#[derive(Component)]
pub struct TranslateButton;

#[derive(Component)]
pub struct TranslateButtonLabel;

fn field_node(min_height: f32) -> Node {
    Node {
        width: Val::Percent(100.0),
        min_height: Val::Px(min_height),
        padding: UiRect::all(Val::Px(10.0)),
        ..default()
    }
}

fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

/// Spawn the panel tree: title, source field, language and translate
/// buttons, result field. Runs once at startup.
pub(crate) fn setup_panel(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|root| {
            root.spawn((
                Node {
                    width: Val::Px(520.0),
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(14.0),
                    padding: UiRect::all(Val::Px(24.0)),
                    ..default()
                },
                BackgroundColor(PANEL_BACKGROUND),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new(PANEL_TITLE),
                    TextFont::from_font_size(28.0),
                    TextColor(TEXT_COLOR),
                ));

                panel
                    .spawn((field_node(96.0), BackgroundColor(FIELD_BACKGROUND)))
                    .with_children(|field| {
                        field.spawn((
                            Text::new(SOURCE_PLACEHOLDER),
                            TextFont::from_font_size(18.0),
                            TextColor(PLACEHOLDER_COLOR),
                            SourceTextDisplay,
                        ));
                    });

                panel
                    .spawn(Node {
                        column_gap: Val::Px(12.0),
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Button,
                            button_node(),
                            BackgroundColor(FIELD_BACKGROUND),
                            LanguageButton,
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(LANGUAGE_PLACEHOLDER),
                                TextFont::from_font_size(18.0),
                                TextColor(TEXT_COLOR),
                                LanguageButtonLabel,
                            ));
                        });

                        row.spawn((
                            Button,
                            button_node(),
                            BackgroundColor(BUTTON_BACKGROUND),
                            TranslateButton,
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(TRANSLATE_LABEL),
                                TextFont::from_font_size(18.0),
                                TextColor(TEXT_COLOR),
                                TranslateButtonLabel,
                            ));
                        });
                    });

                panel
                    .spawn((field_node(64.0), BackgroundColor(FIELD_BACKGROUND)))
                    .with_children(|field| {
                        field.spawn((
                            Text::default(),
                            TextFont::from_font_size(18.0),
                            TextColor(TEXT_COLOR),
                            ResultTextDisplay,
                        ));
                    });
            });
        });
}

/// Turn presses into actions. The translate button is inert while a request
/// is in flight; the controller's busy check backs this up.
pub(crate) fn handle_buttons(
    interactions: Query<
        (
            &Interaction,
            Option<&LanguageButton>,
            Option<&TranslateButton>,
        ),
        (Changed<Interaction>, With<Button>),
    >,
    controller: Res<PanelController>,
    queue: Res<ActionQueue>,
) {
    for (interaction, language, translate) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if language.is_some() {
            queue.push(PanelAction::CycleLanguage);
        }
        if translate.is_some() && !controller.0.is_busy() {
            queue.push(PanelAction::Translate);
        }
    }
}

fn sync_text(text: &mut Text, color: &mut TextColor, value: &str, tint: Color) {
    if text.0 != value {
        text.0 = value.to_string();
    }
    if color.0 != tint {
        color.0 = tint;
    }
}

pub(crate) fn sync_source_text(
    controller: Res<PanelController>,
    mut displays: Query<(&mut Text, &mut TextColor), With<SourceTextDisplay>>,
) {
    for (mut text, mut color) in &mut displays {
        if controller.0.source_text().is_empty() {
            sync_text(&mut text, &mut color, SOURCE_PLACEHOLDER, PLACEHOLDER_COLOR);
        } else {
            sync_text(&mut text, &mut color, controller.0.source_text(), TEXT_COLOR);
        }
    }
}

pub(crate) fn sync_result_text(
    controller: Res<PanelController>,
    mut displays: Query<(&mut Text, &mut TextColor), With<ResultTextDisplay>>,
) {
    for (mut text, mut color) in &mut displays {
        sync_text(
            &mut text,
            &mut color,
            controller.0.result().display_text(),
            TEXT_COLOR,
        );
    }
}

pub(crate) fn sync_language_label(
    controller: Res<PanelController>,
    mut labels: Query<(&mut Text, &mut TextColor), With<LanguageButtonLabel>>,
) {
    let value = controller
        .0
        .target()
        .map(Language::label)
        .unwrap_or(LANGUAGE_PLACEHOLDER);
    for (mut text, mut color) in &mut labels {
        sync_text(&mut text, &mut color, value, TEXT_COLOR);
    }
}

pub(crate) fn sync_translate_button(
    controller: Res<PanelController>,
    mut labels: Query<(&mut Text, &mut TextColor), With<TranslateButtonLabel>>,
    mut buttons: Query<&mut BackgroundColor, With<TranslateButton>>,
) {
    let (value, background) = if controller.0.is_busy() {
        (TRANSLATING_LABEL, BUTTON_BACKGROUND_BUSY)
    } else {
        (TRANSLATE_LABEL, BUTTON_BACKGROUND)
    };

    for (mut text, mut color) in &mut labels {
        sync_text(&mut text, &mut color, value, TEXT_COLOR);
    }
    for mut color in &mut buttons {
        if color.0 != background {
            color.0 = background;
        }
    }
}
