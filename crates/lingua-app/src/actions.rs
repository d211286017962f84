use std::sync::Arc;

use bevy::prelude::*;
use crossbeam_queue::SegQueue;
use lingua_translate::{Language, TranslationOutcome};

use crate::{PanelClient, PanelController, worker};

/// One edit of the source text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEdit {
    Insert(String),
    Backspace,
}

/// Everything that can happen to the panel, from UI systems or from the
/// background worker. Exactly one `Finished` arrives per dispatched request.
#[derive(Debug, Clone)]
pub enum PanelAction {
    EditSource(SourceEdit),
    CycleLanguage,
    Translate,
    Finished(TranslationOutcome),
}

/// Lock-free queue carrying [`PanelAction`]s into the per-frame drain.
///
/// UI systems push directly; worker tasks get a cloned [`ActionSender`] so
/// they can report back without touching the ECS.
#[derive(Resource, Clone)]
pub struct ActionQueue {
    queue: Arc<SegQueue<PanelAction>>,
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self {
            queue: Arc::new(SegQueue::new()),
        }
    }
}

impl ActionQueue {
    pub fn push(&self, action: PanelAction) {
        self.queue.push(action);
    }

    #[must_use]
    pub fn sender(&self) -> ActionSender {
        ActionSender {
            queue: self.queue.clone(),
        }
    }

    #[must_use]
    pub fn drain(&self) -> Vec<PanelAction> {
        let mut drained = Vec::new();
        while let Some(action) = self.queue.pop() {
            drained.push(action);
        }
        drained
    }
}

/// Cheap handle for pushing actions from outside the ECS.
#[derive(Clone)]
pub struct ActionSender {
    queue: Arc<SegQueue<PanelAction>>,
}

impl ActionSender {
    pub fn send(&self, action: PanelAction) {
        self.queue.push(action);
    }
}

pub(crate) fn apply_edit(controller: &mut PanelController, edit: SourceEdit) {
    match edit {
        SourceEdit::Insert(text) => {
            let mut source = controller.0.source_text().to_string();
            source.push_str(&text);
            controller.0.set_source_text(source);
        }
        SourceEdit::Backspace => {
            let mut source = controller.0.source_text().to_string();
            source.pop();
            controller.0.set_source_text(source);
        }
    }
}

/// Advance the selector: unset -> first language -> ... -> last -> unset.
#[must_use]
pub(crate) fn next_language(current: Option<Language>) -> Option<Language> {
    match current {
        None => Some(Language::ALL[0]),
        Some(language) => Language::ALL
            .iter()
            .copied()
            .skip_while(|candidate| *candidate != language)
            .nth(1),
    }
}

/// Drain the queue and apply every action to the controller.
///
/// A `Translate` that passes validation hands the request straight to the
/// worker; the matching `Finished` arrives through the same queue on a later
/// frame and closes the cycle.
pub fn drain_panel_actions(world: &mut World) {
    let actions = world.resource::<ActionQueue>().drain();
    if actions.is_empty() {
        return;
    }

    for action in actions {
        match action {
            PanelAction::EditSource(edit) => {
                apply_edit(&mut world.resource_mut::<PanelController>(), edit);
            }
            PanelAction::CycleLanguage => {
                let mut controller = world.resource_mut::<PanelController>();
                let next = next_language(controller.0.target());
                controller.0.set_target(next);
            }
            PanelAction::Translate => {
                let request = world.resource_mut::<PanelController>().0.begin_translation();
                if let Some(request) = request {
                    tracing::debug!(target = %request.target, "dispatching translation request");
                    let client = world.resource::<PanelClient>().0.clone();
                    let sender = world.resource::<ActionQueue>().sender();
                    worker::spawn_translation_worker(client, sender, request);
                }
            }
            PanelAction::Finished(outcome) => {
                world
                    .resource_mut::<PanelController>()
                    .0
                    .finish_translation(outcome);
            }
        }
    }
}
