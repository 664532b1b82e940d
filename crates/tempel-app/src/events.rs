use std::sync::Arc;

use kanal::AsyncReceiver;
use tempel_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::paste_ocr::PasteOcrController;

pub mod paste_image;
pub mod recognize;
pub mod result_actions;
pub mod toggle_theme;

/// App's main loop
///
/// Pastes run as their own tasks so copy, save and theme events keep flowing
/// while a recognition is in progress.
pub async fn event_loop(
    controller: Arc<PasteOcrController>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut pastes = JoinSet::new();

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            Some(finished) = pastes.join_next() => {
                if let Err(e) = finished {
                    tracing::error!("[EVENT_LOOP] Paste task failed: {}", e);
                }
                continue;
            }
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(&controller, &mut pastes, event).await {
            cancel.cancel();
            break;
        }
    }

    Ok(())
}

/// Returns `false` when the app should stop
async fn handle_events(
    controller: &Arc<PasteOcrController>,
    pastes: &mut JoinSet<()>,
    event: AppEvent,
) -> bool {
    match event {
        AppEvent::Paste(payload) => {
            let controller = controller.clone();
            pastes.spawn(async move {
                if let Err(e) = controller.handle_paste(payload).await {
                    tracing::debug!("Paste ended without result: {}", e);
                }
            });
        }
        AppEvent::PasteAreaClicked => controller.handle_click(),
        AppEvent::CopyResult => {
            if let Err(e) = controller.copy_result().await {
                tracing::debug!("{}", e);
            }
        }
        AppEvent::SaveResult => {
            if let Err(e) = controller.save_result().await {
                tracing::debug!("{}", e);
            }
        }
        AppEvent::ToggleTheme => {
            controller.toggle_theme();
        }
        AppEvent::Quit => {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return false;
        }
    }

    true
}
