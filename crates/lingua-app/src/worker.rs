use std::sync::Arc;

use bevy::tasks::{IoTaskPool, TaskPoolBuilder};
use lingua_translate::{TranslationClient, TranslationRequest};

use crate::actions::{ActionSender, PanelAction};

fn ensure_io_task_pool() {
    IoTaskPool::get_or_init(|| {
        TaskPoolBuilder::new()
            .thread_name("lingua io".to_string())
            .build()
    });
}

/// Run one translation request off the frame schedule.
///
/// The blocking HTTP call happens on the IO task pool; the single completion
/// is pushed back through the action queue, where the next drain applies it
/// to the controller. No retry, no cancellation: the busy flag keeps a second
/// request from starting while this one is in flight.
pub fn spawn_translation_worker(
    client: Arc<TranslationClient>,
    sender: ActionSender,
    request: TranslationRequest,
) {
    ensure_io_task_pool();
    IoTaskPool::get()
        .spawn(async move {
            let outcome = client.translate_outcome(&request);
            sender.send(PanelAction::Finished(outcome));
        })
        .detach();
}
